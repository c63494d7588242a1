use crate::server::{
    data::{listing::ListingRepository, stock::StockRepository},
    model::listing::{Listing, ListingKind, ListingStatus, StockParams},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

fn params(store_name: &str, status: ListingStatus) -> StockParams {
    StockParams {
        user_id: 21,
        status,
        store_name: store_name.to_string(),
        phone_number: "+99365000000".to_string(),
        email: Some("sales@example.com".to_string()),
        address: "Bitarap Turkmenistan ave. 5".to_string(),
        region_id: None,
        city_id: None,
        description: None,
    }
}

/// Tests that a created stock entry is readable as a stock listing.
///
/// Expected: Ok with the requested initial status and owner
#[tokio::test]
async fn created_entry_is_listed_as_stock() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stock = StockRepository::new(db)
        .create(params("Lebap Auto", ListingStatus::Accepted))
        .await?;

    let listed = ListingRepository::new(db)
        .get_by_id(ListingKind::Stock, stock.id)
        .await?
        .unwrap();
    assert!(matches!(
        listed,
        Listing::Stock(ref s) if s.status == "accepted" && s.user_id == 21
    ));

    Ok(())
}

/// Tests that an update rewrites the columns but leaves the status alone.
///
/// Expected: Ok with the new store name and the original "blocked" status
#[tokio::test]
async fn update_keeps_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let existing = factory::listing::create_stock(db, 21, "blocked").await?;

    let updated = StockRepository::new(db)
        .update(existing.id, params("Renamed Motors", ListingStatus::Accepted))
        .await?;

    assert_eq!(updated.store_name, "Renamed Motors");
    assert_eq!(updated.status, "blocked");

    Ok(())
}

/// Tests updating and deleting a stock entry that does not exist.
///
/// Expected: Err(DbErr::RecordNotFound) for both
#[tokio::test]
async fn missing_entry_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = StockRepository::new(db);
    let result = repo.update(404, params("Ghost", ListingStatus::Pending)).await;
    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    let result = repo.delete(404).await;
    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
