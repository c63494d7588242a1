use crate::server::{
    data::location::{CityRepository, RegionRepository},
    model::location::{CityParams, RegionParams},
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

fn region_params(name_en: &str) -> RegionParams {
    RegionParams {
        name_tm: format!("{} welaýaty", name_en),
        name_en: name_en.to_string(),
        name_ru: format!("{} велаят", name_en),
    }
}

/// Tests searching regions by any of their three names.
///
/// Expected: Ok with the region matched through its Russian name
#[tokio::test]
async fn searches_any_region_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Region)
        .with_table(City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = RegionRepository::new(db);
    let ahal = repo.create(region_params("Ahal")).await?;
    repo.create(region_params("Mary")).await?;

    let page = repo.get_paginated(Some("Ahal велаят"), 0, 10).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, ahal.id);

    Ok(())
}

/// Tests that deleting a region removes its cities.
///
/// Expected: Ok with no region or city rows
#[tokio::test]
async fn deleting_region_removes_cities() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Region)
        .with_table(City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let region = factory::location::create_region(db).await?;
    factory::location::create_city(db, region.id).await?;

    RegionRepository::new(db).delete(region.id).await?;

    assert_eq!(Region::find().count(db).await?, 0);
    assert_eq!(City::find().count(db).await?, 0);

    Ok(())
}

/// Tests that a city cannot reference a missing region.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn city_requires_region() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(Region)
        .with_table(City)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = CityRepository::new(db)
        .create(CityParams {
            region_id: 3,
            name_tm: "Aşgabat".to_string(),
            name_en: "Ashgabat".to_string(),
            name_ru: "Ашхабад".to_string(),
        })
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
