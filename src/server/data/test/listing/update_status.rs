use super::*;

/// Tests writing a new status to a car listing.
///
/// Expected: Ok(id) with the new status stored
#[tokio::test]
async fn writes_status() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::listing::create_car(db, 42).await?;

    let repo = ListingRepository::new(db);
    let id = repo
        .update_status(ListingKind::Car, car.id, ListingStatus::Accepted)
        .await?;

    assert_eq!(id, car.id);
    let stored = Car::find_by_id(car.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "accepted");

    Ok(())
}

/// Tests that any status may follow any other, including itself.
///
/// Expected: Ok for blocked -> pending -> pending
#[tokio::test]
async fn allows_any_transition() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let truck = factory::listing::create_truck(db, 7, "blocked").await?;

    let repo = ListingRepository::new(db);
    repo.update_status(ListingKind::Truck, truck.id, ListingStatus::Pending)
        .await?;
    repo.update_status(ListingKind::Truck, truck.id, ListingStatus::Pending)
        .await?;

    let stored = Truck::find_by_id(truck.id).one(db).await?.unwrap();
    assert_eq!(stored.status, "pending");

    Ok(())
}

/// Tests that the kind selects the table.
///
/// A car with the same ID as the target moto must keep its status.
///
/// Expected: Ok with only the moto updated
#[tokio::test]
async fn updates_only_selected_kind() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_listing_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let car = factory::listing::create_car(db, 1).await?;
    let moto = factory::listing::create_moto(db, 1, "pending").await?;
    assert_eq!(car.id, moto.id);

    ListingRepository::new(db)
        .update_status(ListingKind::Moto, moto.id, ListingStatus::Blocked)
        .await?;

    assert_eq!(Car::find_by_id(car.id).one(db).await?.unwrap().status, "pending");
    assert_eq!(Moto::find_by_id(moto.id).one(db).await?.unwrap().status, "blocked");

    Ok(())
}

/// Tests updating a listing that does not exist.
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
        .update_status(ListingKind::Stock, 9, ListingStatus::Accepted)
        .await;

    assert!(matches!(result, Err(DbErr::RecordNotFound(_))));

    Ok(())
}
