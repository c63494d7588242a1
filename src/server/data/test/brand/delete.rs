use super::*;

/// Tests that deleting a brand removes its tags and its models' tags.
///
/// Expected: Ok with no brand, model or tag rows left
#[tokio::test]
async fn deletes_brand_models_and_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrandRepository::new(db);
    let brand = repo.create(params("Toyota", &["auto"])).await?;
    let model = factory::brand_model::create_brand_model(db, brand.id).await?;
    factory::category_tag::tag(db, "model", model.id, &["auto"]).await?;

    repo.delete(brand.id).await?;

    assert_eq!(Brand::find().count(db).await?, 0);
    assert_eq!(BrandModel::find().count(db).await?, 0);
    assert_eq!(CategoryTag::find().count(db).await?, 0);

    Ok(())
}

/// Tests deleting a missing brand.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BrandRepository::new(db).delete(404).await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
