use super::*;

/// Tests creating a brand with two categories.
///
/// Verifies that exactly one brand row and one tag row per category are written.
///
/// Expected: Ok with brand carrying both categories
#[tokio::test]
async fn creates_brand_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrandRepository::new(db);
    let brand = repo.create(params("Toyota", &["auto", "truck"])).await?;

    assert_eq!(brand.name, "Toyota");
    assert_eq!(
        brand.categories,
        vec![VehicleCategory::Auto, VehicleCategory::Truck]
    );
    assert_eq!(Brand::find().count(db).await?, 1);
    assert_eq!(
        factory::category_tag::labels(db, "brand", brand.id).await?,
        vec!["auto", "truck"]
    );

    Ok(())
}

/// Tests that repeated labels produce a single tag row.
///
/// Expected: Ok with one tag row
#[tokio::test]
async fn collapses_duplicate_categories() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrandRepository::new(db);
    let brand = repo.create(params("Isuzu", &["truck", "truck"])).await?;

    assert_eq!(
        factory::category_tag::labels(db, "brand", brand.id).await?,
        vec!["truck"]
    );

    Ok(())
}

/// Tests that a failing tag insert rolls back the brand row.
///
/// The category_tag table is deliberately missing so the first tag insert fails
/// after the brand insert succeeded inside the same transaction.
///
/// Expected: Err and no brand row persisted
#[tokio::test]
async fn rolls_back_brand_when_tag_insert_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Brand).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrandRepository::new(db);
    let result = repo.create(params("Toyota", &["auto"])).await;

    assert!(result.is_err());
    assert_eq!(Brand::find().count(db).await?, 0);

    Ok(())
}
