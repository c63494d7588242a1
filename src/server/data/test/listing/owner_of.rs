use super::*;

/// Tests resolving the owner of a stock listing.
///
/// Expected: Ok(user_id)
#[tokio::test]
async fn returns_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let stock = factory::listing::create_stock(db, 1234, "pending").await?;

    let owner = ListingRepository::new(db)
        .owner_of(ListingKind::Stock, stock.id)
        .await?;

    assert_eq!(owner, 1234);

    Ok(())
}

/// Tests resolving the owner of a missing listing.
///
/// Expected: Err(RecordNotFound)
#[tokio::test]
async fn fails_for_missing_listing() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ListingRepository::new(db)
        .owner_of(ListingKind::Car, 1)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
