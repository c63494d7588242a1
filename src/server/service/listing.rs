use sea_orm::DatabaseConnection;

use crate::server::{
    data::listing::ListingRepository,
    error::AppError,
    model::{
        listing::{Listing, ListingFilter, ListingKind},
        page::Page,
    },
};

/// Read side of the four listing kinds.
pub struct ListingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, kind: ListingKind, id: i32) -> Result<Listing, AppError> {
        ListingRepository::new(self.db)
            .get_by_id(kind, id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("{} listing {} not found", kind, id)))
    }

    pub async fn get_paginated(
        &self,
        kind: ListingKind,
        filter: &ListingFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<Listing>, AppError> {
        Ok(ListingRepository::new(self.db)
            .get_paginated(kind, filter, page, per_page)
            .await?)
    }
}
