use super::*;

/// Tests removing one category from a brand tagged {auto, moto}.
///
/// Expected: Ok(1) and only "auto" remains
#[tokio::test]
async fn removes_single_category() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrandRepository::new(db);
    let brand = repo.create(params("Honda", &["auto", "moto"])).await?;

    let removed = repo
        .delete_category(brand.id, VehicleCategory::Moto)
        .await?;

    assert_eq!(removed, 1);
    assert_eq!(
        factory::category_tag::labels(db, "brand", brand.id).await?,
        vec!["auto"]
    );

    Ok(())
}

/// Tests that deleting an absent category is a no-op.
///
/// Expected: Ok(0) on the second call
#[tokio::test]
async fn repeated_delete_is_noop() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrandRepository::new(db);
    let brand = repo.create(params("Honda", &["auto", "moto"])).await?;

    repo.delete_category(brand.id, VehicleCategory::Moto).await?;
    let removed = repo
        .delete_category(brand.id, VehicleCategory::Moto)
        .await?;

    assert_eq!(removed, 0);

    Ok(())
}

/// Tests that removing the last category keeps the brand itself.
///
/// Expected: Ok and brand still found with no categories
#[tokio::test]
async fn keeps_brand_after_last_tag_removed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrandRepository::new(db);
    let brand = repo.create(params("Lada", &["auto"])).await?;

    repo.delete_category(brand.id, VehicleCategory::Auto).await?;

    let found = repo.get_by_id(brand.id).await?.unwrap();
    assert!(found.categories.is_empty());

    Ok(())
}
