use crate::server::{data::slider::SliderRepository, model::slider::SliderFilter};
use entity::prelude::*;
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests limiting the slider list to one platform.
///
/// Expected: Ok with only the mobile sliders, blank platform meaning all of them
#[tokio::test]
async fn filters_by_platform() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Slider).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let mobile = factory::slider::create_slider(db, "mobile").await?;
    factory::slider::create_slider(db, "web").await?;

    let repo = SliderRepository::new(db);
    let page = repo
        .get_paginated(&SliderFilter::new(Some("mobile".to_string()), None), 0, 10)
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, mobile.id);

    let page = repo
        .get_paginated(&SliderFilter::new(Some("  ".to_string()), None), 0, 10)
        .await?;
    assert_eq!(page.total, 2);

    Ok(())
}

/// Tests that a zero page size is served as one item per page.
///
/// Expected: Ok with a page of one slider instead of a paginator panic
#[tokio::test]
async fn zero_page_size_returns_one_item() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_table(Slider).build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    factory::slider::create_slider(db, "web").await?;
    factory::slider::create_slider(db, "web").await?;

    let page = SliderRepository::new(db)
        .get_paginated(&SliderFilter::default(), 0, 0)
        .await?;

    assert_eq!(page.per_page, 1);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total, 2);

    Ok(())
}
