//! Listing tables (cars, motos, trucks, dealer stock).
//!
//! Listings are created by the public marketplace; this repository only reads them,
//! writes status transitions and resolves the owning user.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::{
    data::{contains_ignore_case, page_size},
    model::{
        listing::{Listing, ListingFilter, ListingKind, ListingStatus},
        page::Page,
    },
};

/// A table holding one listing kind.
pub trait ListingTable: EntityTrait {
    const KIND: ListingKind;

    fn id_column() -> Self::Column;
    fn user_id_column() -> Self::Column;
    fn status_column() -> Self::Column;
    /// Free-text column matched by the list search.
    fn search_column() -> Self::Column;
    fn created_at_column() -> Self::Column;
    fn updated_at_column() -> Self::Column;
    fn wrap(model: Self::Model) -> Listing;
}

macro_rules! listing_table {
    ($module:ident, $kind:expr, $variant:ident, $search:ident) => {
        impl ListingTable for entity::$module::Entity {
            const KIND: ListingKind = $kind;

            fn id_column() -> Self::Column {
                entity::$module::Column::Id
            }
            fn user_id_column() -> Self::Column {
                entity::$module::Column::UserId
            }
            fn status_column() -> Self::Column {
                entity::$module::Column::Status
            }
            fn search_column() -> Self::Column {
                entity::$module::Column::$search
            }
            fn created_at_column() -> Self::Column {
                entity::$module::Column::CreatedAt
            }
            fn updated_at_column() -> Self::Column {
                entity::$module::Column::UpdatedAt
            }
            fn wrap(model: Self::Model) -> Listing {
                Listing::$variant(model)
            }
        }
    };
}

listing_table!(car, ListingKind::Car, Car, Description);
listing_table!(moto, ListingKind::Moto, Moto, Description);
listing_table!(truck, ListingKind::Truck, Truck, Description);
listing_table!(stock, ListingKind::Stock, Stock, StoreName);

fn not_found<E: ListingTable>(id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("{} {} not found", E::KIND, id))
}

/// Overwrites the status of one listing.
///
/// # Returns
/// - `Ok(id)` - The listing ID whose status was written
/// - `Err(DbErr::RecordNotFound)` - No listing with this ID
async fn write_status<E, C>(conn: &C, id: i32, status: ListingStatus) -> Result<i32, DbErr>
where
    E: ListingTable,
    C: ConnectionTrait,
{
    let result = E::update_many()
        .col_expr(E::status_column(), Expr::value(status.as_str()))
        .col_expr(E::updated_at_column(), Expr::value(Utc::now()))
        .filter(E::id_column().eq(id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(not_found::<E>(id));
    }

    Ok(id)
}

async fn read_owner<E, C>(conn: &C, id: i32) -> Result<i64, DbErr>
where
    E: ListingTable,
    C: ConnectionTrait,
{
    E::find()
        .select_only()
        .column(E::user_id_column())
        .filter(E::id_column().eq(id))
        .into_tuple::<i64>()
        .one(conn)
        .await?
        .ok_or_else(|| not_found::<E>(id))
}

async fn read_one<E, C>(conn: &C, id: i32) -> Result<Option<Listing>, DbErr>
where
    E: ListingTable,
    C: ConnectionTrait,
{
    let model = E::find().filter(E::id_column().eq(id)).one(conn).await?;

    Ok(model.map(E::wrap))
}

async fn read_page<E, C>(
    conn: &C,
    filter: &ListingFilter,
    page: u64,
    per_page: u64,
) -> Result<Page<Listing>, DbErr>
where
    E: ListingTable,
    E::Model: Send + Sync,
    C: ConnectionTrait,
{
    let per_page = page_size(per_page);
    let mut select = E::find();
    if let Some(status) = filter.status {
        select = select.filter(E::status_column().eq(status.as_str()));
    }
    if let Some(condition) = contains_ignore_case(E::search_column(), filter.search.as_deref()) {
        select = select.filter(condition);
    }

    let paginator = select
        .order_by_desc(E::created_at_column())
        .order_by_desc(E::id_column())
        .paginate(conn, per_page);

    let total = paginator.num_items().await?;
    let models = paginator.fetch_page(page).await?;

    Ok(Page {
        items: models.into_iter().map(E::wrap).collect(),
        total,
        page,
        per_page,
    })
}

/// Persistence needed by a listing status change.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingStatusStore: Send + Sync {
    /// Writes `status` unconditionally and returns the listing ID.
    async fn update_status(
        &self,
        kind: ListingKind,
        id: i32,
        status: ListingStatus,
    ) -> Result<i32, DbErr>;

    /// Resolves the user that owns the listing.
    async fn owner_of(&self, kind: ListingKind, id: i32) -> Result<i64, DbErr>;
}

pub struct ListingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, kind: ListingKind, id: i32) -> Result<Option<Listing>, DbErr> {
        match kind {
            ListingKind::Car => read_one::<entity::car::Entity, _>(self.db, id).await,
            ListingKind::Moto => read_one::<entity::moto::Entity, _>(self.db, id).await,
            ListingKind::Truck => read_one::<entity::truck::Entity, _>(self.db, id).await,
            ListingKind::Stock => read_one::<entity::stock::Entity, _>(self.db, id).await,
        }
    }

    /// Gets one page of listings of a kind, newest first.
    pub async fn get_paginated(
        &self,
        kind: ListingKind,
        filter: &ListingFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Listing>, DbErr> {
        match kind {
            ListingKind::Car => {
                read_page::<entity::car::Entity, _>(self.db, filter, page, per_page).await
            }
            ListingKind::Moto => {
                read_page::<entity::moto::Entity, _>(self.db, filter, page, per_page).await
            }
            ListingKind::Truck => {
                read_page::<entity::truck::Entity, _>(self.db, filter, page, per_page).await
            }
            ListingKind::Stock => {
                read_page::<entity::stock::Entity, _>(self.db, filter, page, per_page).await
            }
        }
    }
}

#[async_trait]
impl ListingStatusStore for ListingRepository<'_> {
    async fn update_status(
        &self,
        kind: ListingKind,
        id: i32,
        status: ListingStatus,
    ) -> Result<i32, DbErr> {
        match kind {
            ListingKind::Car => write_status::<entity::car::Entity, _>(self.db, id, status).await,
            ListingKind::Moto => write_status::<entity::moto::Entity, _>(self.db, id, status).await,
            ListingKind::Truck => {
                write_status::<entity::truck::Entity, _>(self.db, id, status).await
            }
            ListingKind::Stock => {
                write_status::<entity::stock::Entity, _>(self.db, id, status).await
            }
        }
    }

    async fn owner_of(&self, kind: ListingKind, id: i32) -> Result<i64, DbErr> {
        match kind {
            ListingKind::Car => read_owner::<entity::car::Entity, _>(self.db, id).await,
            ListingKind::Moto => read_owner::<entity::moto::Entity, _>(self.db, id).await,
            ListingKind::Truck => read_owner::<entity::truck::Entity, _>(self.db, id).await,
            ListingKind::Stock => read_owner::<entity::stock::Entity, _>(self.db, id).await,
        }
    }
}
