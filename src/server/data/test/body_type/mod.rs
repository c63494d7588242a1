use crate::server::{
    data::catalog::body_type::BodyTypeRepository,
    model::{
        catalog::BodyTypeParams,
        category::{CategorySet, VehicleCategory},
    },
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

fn params(name: &str, categories: &[&str]) -> BodyTypeParams {
    BodyTypeParams {
        name: name.to_string(),
        image_path: Some("/uploads/sedan.png".to_string()),
        categories: CategorySet::parse(categories).unwrap(),
    }
}

/// Tests creating and re-tagging a body type.
///
/// Expected: Ok with the replaced set stored
#[tokio::test]
async fn creates_and_updates_body_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BodyTypeRepository::new(db);
    let body_type = repo.create(params("Sedan", &["auto"])).await?;
    let updated = repo
        .update(body_type.id, params("Pickup", &["auto", "truck"]))
        .await?;

    assert_eq!(updated.name, "Pickup");
    assert_eq!(
        updated.categories,
        vec![VehicleCategory::Auto, VehicleCategory::Truck]
    );

    Ok(())
}

/// Tests that deleting a body type detaches models instead of deleting them.
///
/// Expected: Ok with the model kept and its body type cleared
#[tokio::test]
async fn delete_detaches_models() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BodyTypeRepository::new(db);
    let body_type = repo.create(params("Sedan", &["auto"])).await?;
    let brand = factory::brand::create_brand(db).await?;
    let model = factory::brand_model::BrandModelFactory::new(db, brand.id)
        .body_type_id(Some(body_type.id))
        .build()
        .await?;

    repo.delete(body_type.id).await?;

    assert_eq!(BodyType::find().count(db).await?, 0);
    let model = BrandModel::find_by_id(model.id).one(db).await?.unwrap();
    assert_eq!(model.body_type_id, None);
    assert!(factory::category_tag::labels(db, "body_type", body_type.id)
        .await?
        .is_empty());

    Ok(())
}
