use super::*;

/// Tests that an update replaces the whole tag set.
///
/// Seeds stale rows for every category, then updates with a single one.
///
/// Expected: Ok and only the supplied category remains
#[tokio::test]
async fn replaces_stale_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    factory::category_tag::tag(db, "brand", brand.id, &["auto", "moto", "truck"]).await?;

    let repo = BrandRepository::new(db);
    let updated = repo
        .update(brand.id, params("Renamed", &["truck"]))
        .await?;

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.categories, vec![VehicleCategory::Truck]);
    assert_eq!(
        factory::category_tag::labels(db, "brand", brand.id).await?,
        vec!["truck"]
    );

    Ok(())
}

/// Tests that applying the same tag set twice leaves the same rows.
///
/// Expected: Ok with identical tag rows after both updates
#[tokio::test]
async fn repeated_update_is_idempotent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrandRepository::new(db);
    let brand = repo.create(params("Kia", &["auto"])).await?;

    repo.update(brand.id, params("Kia", &["auto", "moto"]))
        .await?;
    let first = factory::category_tag::labels(db, "brand", brand.id).await?;
    repo.update(brand.id, params("Kia", &["auto", "moto"]))
        .await?;
    let second = factory::category_tag::labels(db, "brand", brand.id).await?;

    assert_eq!(first, vec!["auto", "moto"]);
    assert_eq!(first, second);

    Ok(())
}

/// Tests that updating a missing brand changes nothing.
///
/// Tag rows seeded for the missing ID must survive the failed update.
///
/// Expected: Err(RecordNotFound) and tags untouched
#[tokio::test]
async fn fails_for_missing_brand_without_touching_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category_tag::tag(db, "brand", 999, &["moto"]).await?;

    let repo = BrandRepository::new(db);
    let result = repo.update(999, params("Ghost", &["auto"])).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(
        factory::category_tag::labels(db, "brand", 999).await?,
        vec!["moto"]
    );

    Ok(())
}

/// Tests that a failing tag insert during update rolls back the column update.
///
/// Without the category_tag table the tag delete fails after the brand row was
/// updated inside the transaction.
///
/// Expected: Err and the original name kept
#[tokio::test]
async fn rolls_back_columns_when_tag_write_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Brand).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::BrandFactory::new(db)
        .name("Original")
        .build()
        .await?;

    let repo = BrandRepository::new(db);
    let result = repo.update(brand.id, params("Changed", &["auto"])).await;

    assert!(result.is_err());
    let stored = Brand::find_by_id(brand.id).one(db).await?.unwrap();
    assert_eq!(stored.name, "Original");

    Ok(())
}
