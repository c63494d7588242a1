use super::*;

/// Tests filtering listings by status.
///
/// Expected: Ok with only pending motos
#[tokio::test]
async fn filters_by_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let pending = factory::listing::create_moto(db, 1, "pending").await?;
    factory::listing::create_moto(db, 2, "accepted").await?;

    let filter = ListingFilter {
        status: Some(ListingStatus::Pending),
        search: None,
    };
    let page = ListingRepository::new(db)
        .get_paginated(ListingKind::Moto, &filter, 0, 10)
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items, vec![Listing::Moto(pending)]);

    Ok(())
}

/// Tests searching car descriptions.
///
/// Expected: Ok with the car whose description matches
#[tokio::test]
async fn searches_description() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let match_car = factory::listing::CarFactory::new(db)
        .description(Some("Clean Camry, one owner".to_string()))
        .build()
        .await?;
    factory::listing::CarFactory::new(db)
        .description(Some("Rusty pickup".to_string()))
        .build()
        .await?;

    let filter = ListingFilter {
        status: None,
        search: Some("camry".to_string()),
    };
    let page = ListingRepository::new(db)
        .get_paginated(ListingKind::Car, &filter, 0, 10)
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items, vec![Listing::Car(match_car)]);

    Ok(())
}
