use super::*;

/// Tests creating a model under an existing brand and body type.
///
/// Expected: Ok with model tagged and listed under its category
#[tokio::test]
async fn creates_model_with_tags() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let body_type = factory::body_type::create_body_type(db).await?;

    let repo = BrandModelRepository::new(db);
    let model = repo
        .create(params(brand.id, Some(body_type.id), &["auto"]))
        .await?;

    assert_eq!(model.brand_id, brand.id);
    assert_eq!(model.body_type_id, Some(body_type.id));
    assert_eq!(
        factory::category_tag::labels(db, "model", model.id).await?,
        vec!["auto"]
    );

    let page = repo
        .get_by_category_paginated(&CategoryQuery {
            category: VehicleCategory::Auto,
            search: None,
            page: 0,
            per_page: 10,
        })
        .await?;
    assert_eq!(page.total, 1);

    Ok(())
}

/// Tests that a missing brand rejects the create without writing rows.
///
/// Expected: Err(RecordNotFound) and no model or tag rows
#[tokio::test]
async fn fails_for_missing_brand() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = BrandModelRepository::new(db)
        .create(params(77, None, &["auto"]))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));
    assert_eq!(BrandModel::find().count(db).await?, 0);
    assert_eq!(CategoryTag::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a missing body type rejects the create.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_body_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let brand = factory::brand::create_brand(db).await?;
    let result = BrandModelRepository::new(db)
        .create(params(brand.id, Some(55), &["auto"]))
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
