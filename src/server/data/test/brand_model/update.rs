use super::*;

/// Tests that an update replaces the model's tags and keeps other entities' tags.
///
/// A brand sharing the same numeric ID must not lose its tags.
///
/// Expected: Ok with only the model's rows replaced
#[tokio::test]
async fn replaces_only_own_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let repo = BrandModelRepository::new(db);
    let model = repo.create(params(brand.id, None, &["auto", "moto"])).await?;
    factory::category_tag::tag(db, "brand", model.id, &["moto"]).await?;

    let updated = repo
        .update(model.id, params(brand.id, None, &["truck"]))
        .await?;

    assert_eq!(updated.categories, vec![VehicleCategory::Truck]);
    assert_eq!(
        factory::category_tag::labels(db, "model", model.id).await?,
        vec!["truck"]
    );
    assert_eq!(
        factory::category_tag::labels(db, "brand", model.id).await?,
        vec!["moto"]
    );

    Ok(())
}

/// Tests updating a missing model.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_model() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let result = BrandModelRepository::new(db)
        .update(404, params(brand.id, None, &["auto"]))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
