use crate::server::{data::auto_store::AutoStoreRepository, model::auto_store::AutoStoreParams};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

fn params(store_name: &str, region_id: Option<i32>, city_id: Option<i32>) -> AutoStoreParams {
    AutoStoreParams {
        user_id: 14,
        store_name: store_name.to_string(),
        phone_number: "+99362000000".to_string(),
        email: None,
        address: Some("Magtymguly ave. 12".to_string()),
        logo_path: Some("uploads/stores/logo.webp".to_string()),
        images: vec![
            "uploads/stores/1.webp".to_string(),
            "uploads/stores/2.webp".to_string(),
        ],
        region_id,
        city_id,
    }
}

/// Tests creating a store with a location and images.
///
/// Expected: Ok with region, city and images in insertion order
#[tokio::test]
async fn create_loads_location_and_images() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let region = factory::location::create_region(db).await?;
    let city = factory::location::create_city(db, region.id).await?;

    let store = AutoStoreRepository::new(db)
        .create(params("Ahal Motors", Some(region.id), Some(city.id)))
        .await?;

    assert_eq!(store.region.as_ref().map(|r| r.id), Some(region.id));
    assert_eq!(store.city.as_ref().map(|c| c.id), Some(city.id));
    assert_eq!(
        store.images(),
        vec!["uploads/stores/1.webp", "uploads/stores/2.webp"]
    );
    assert_eq!(store.owner_name, None);

    Ok(())
}

/// Tests the store name search with locations loaded for the whole page.
///
/// Expected: Ok with only the matching store and its city
#[tokio::test]
async fn search_matches_store_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let region = factory::location::create_region(db).await?;
    let city = factory::location::create_city(db, region.id).await?;
    let repo = AutoStoreRepository::new(db);

    let ahal = repo
        .create(params("Ahal Motors", Some(region.id), Some(city.id)))
        .await?;
    repo.create(params("Mary Trucks", None, None)).await?;

    let page = repo.get_paginated(Some("MOTOR"), 0, 10).await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].store.id, ahal.store.id);
    assert_eq!(page.items[0].city.as_ref().map(|c| c.id), Some(city.id));

    Ok(())
}

/// Tests update and delete of a store id that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound) for both
#[tokio::test]
async fn missing_store_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let repo = AutoStoreRepository::new(db);

    let updated = repo.update(404, params("Ghost", None, None)).await;
    assert!(matches!(updated, Err(DbErr::RecordNotFound(_))));

    let deleted = repo.delete(404).await;
    assert!(matches!(deleted, Err(DbErr::RecordNotFound(_))));

    Ok(())
}

/// Tests that deleting a store removes it.
///
/// Expected: Ok, and the store is no longer found
#[tokio::test]
async fn delete_removes_store() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_store_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let store = factory::auto_store::create_auto_store(db, 3).await?;
    let repo = AutoStoreRepository::new(db);

    repo.delete(store.id).await?;

    assert!(repo.get_by_id(store.id).await?.is_none());

    Ok(())
}
