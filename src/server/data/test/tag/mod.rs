use crate::server::{
    data::tag::CategoryTagRepository,
    model::category::{CategorySet, TaggableKind, VehicleCategory},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests that tags are grouped per entity and sorted.
///
/// Expected: Ok with one sorted entry per tagged entity
#[tokio::test]
async fn groups_categories_by_entity() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category_tag::tag(db, "brand", 1, &["truck", "auto"]).await?;
    factory::category_tag::tag(db, "brand", 2, &["moto"]).await?;
    factory::category_tag::tag(db, "model", 1, &["moto"]).await?;

    let repo = CategoryTagRepository::new(db);
    let grouped = repo.categories_for(TaggableKind::Brand, &[1, 2, 3]).await?;

    assert_eq!(
        grouped.get(&1),
        Some(&vec![VehicleCategory::Auto, VehicleCategory::Truck])
    );
    assert_eq!(grouped.get(&2), Some(&vec![VehicleCategory::Moto]));
    assert_eq!(grouped.get(&3), None);

    Ok(())
}

/// Tests that a label outside the vocabulary surfaces as an error on read.
///
/// Expected: Err(DbErr::Custom)
#[tokio::test]
async fn rejects_unknown_stored_label() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::category_tag::tag(db, "brand", 1, &["boat"]).await?;

    let result = CategoryTagRepository::new(db)
        .categories_of(TaggableKind::Brand, 1)
        .await;

    assert!(matches!(result, Err(DbErr::Custom(_))));

    Ok(())
}

/// Tests that a plain insert refuses to duplicate an existing row.
///
/// Expected: Err on the second insert of the same category
#[tokio::test]
async fn insert_rejects_existing_row() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = CategoryTagRepository::new(db);
    let set = CategorySet::parse(["auto"]).unwrap();
    repo.insert(TaggableKind::Brand, 5, &set).await?;

    assert!(repo.insert(TaggableKind::Brand, 5, &set).await.is_err());

    repo.replace(TaggableKind::Brand, 5, &set).await?;
    assert_eq!(
        factory::category_tag::labels(db, "brand", 5).await?,
        vec!["auto"]
    );

    Ok(())
}
