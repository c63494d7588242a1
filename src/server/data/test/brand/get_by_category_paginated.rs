use super::*;

fn query(
    category: VehicleCategory,
    search: Option<&str>,
    page: u64,
    per_page: u64,
) -> CategoryQuery {
    CategoryQuery {
        category,
        search: search.map(str::to_string),
        page,
        per_page,
    }
}

/// Tests that only brands tagged with the category are returned, newest first.
///
/// Expected: Ok with the two "auto" brands, each with its full category set
#[tokio::test]
async fn returns_tagged_brands_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let now = Utc::now();

    let older = factory::brand::BrandFactory::new(db)
        .name("Older")
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let moto_only = factory::brand::BrandFactory::new(db)
        .name("Moto Only")
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    let newer = factory::brand::BrandFactory::new(db)
        .name("Newer")
        .created_at(now)
        .build()
        .await?;
    factory::category_tag::tag(db, "brand", older.id, &["auto"]).await?;
    factory::category_tag::tag(db, "brand", moto_only.id, &["moto"]).await?;
    factory::category_tag::tag(db, "brand", newer.id, &["auto", "truck"]).await?;

    let repo = BrandRepository::new(db);
    let page = repo
        .get_by_category_paginated(&query(VehicleCategory::Auto, None, 0, 10))
        .await?;

    assert_eq!(page.total, 2);
    let ids: Vec<i32> = page.items.iter().map(|b| b.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);
    assert_eq!(
        page.items[0].categories,
        vec![VehicleCategory::Auto, VehicleCategory::Truck]
    );

    Ok(())
}

/// Tests case-insensitive name search.
///
/// Expected: Ok with only the brand whose name contains the term
#[tokio::test]
async fn filters_by_name_ignoring_case() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrandRepository::new(db);
    let toyota = repo.create(params("Toyota", &["auto"])).await?;
    repo.create(params("Mercedes", &["auto"])).await?;

    let page = repo
        .get_by_category_paginated(&query(VehicleCategory::Auto, Some("TOY"), 0, 10))
        .await?;

    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, toyota.id);

    Ok(())
}

/// Tests that the total counts every match while a page holds at most `per_page`.
///
/// Expected: Ok with total 3, one item on the second page
#[tokio::test]
async fn paginates_results() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrandRepository::new(db);
    for name in ["A", "B", "C"] {
        repo.create(params(name, &["truck"])).await?;
    }

    let page = repo
        .get_by_category_paginated(&query(VehicleCategory::Truck, None, 1, 2))
        .await?;

    assert_eq!(page.total, 3);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.total_pages(), 2);

    Ok(())
}

/// Tests that `_` and `%` in the search term match only themselves.
///
/// Expected: Ok with no match for a bare wildcard, one match for a literal underscore
#[tokio::test]
async fn search_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrandRepository::new(db);
    repo.create(params("Toyota", &["auto"])).await?;
    repo.create(params("Mercedes", &["auto"])).await?;

    for term in ["_", "%"] {
        let page = repo
            .get_by_category_paginated(&query(VehicleCategory::Auto, Some(term), 0, 10))
            .await?;
        assert_eq!(page.total, 0, "search {:?}", term);
    }

    let amg = repo.create(params("Mercedes_AMG", &["auto"])).await?;
    let page = repo
        .get_by_category_paginated(&query(VehicleCategory::Auto, Some("s_a"), 0, 10))
        .await?;
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].id, amg.id);

    Ok(())
}

/// Tests that a zero page size does not reach the paginator.
///
/// Expected: Ok with one brand per page
#[tokio::test]
async fn zero_page_size_returns_one_item() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_catalog_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = BrandRepository::new(db);
    repo.create(params("A", &["moto"])).await?;
    repo.create(params("B", &["moto"])).await?;

    let page = repo
        .get_by_category_paginated(&query(VehicleCategory::Moto, None, 0, 0))
        .await?;

    assert_eq!(page.total, 2);
    assert_eq!(page.items.len(), 1);
    assert_eq!(page.per_page, 1);

    Ok(())
}
