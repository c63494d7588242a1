//! HTTP handlers.
//!
//! Handlers validate request DTOs, convert them into server-side parameters, call a
//! service and convert the result back into a response DTO. Every handler is
//! annotated with `#[utoipa::path]` and registered through the router's
//! `OpenApiRouter` so the Swagger UI stays in sync with the routes.

pub mod auto_store;
pub mod body_type;
pub mod brand;
pub mod brand_model;
pub mod listing;
pub mod location;
pub mod settings;
pub mod slider;
pub mod stock;
pub mod user;

use serde::Deserialize;
use utoipa::IntoParams;

use crate::server::{
    error::AppError,
    model::{catalog::CategoryQuery, category::VehicleCategory},
};

const DEFAULT_LIMIT: u64 = 10;
const MAX_LIMIT: u64 = 100;

pub(crate) fn default_page() -> u64 {
    1
}

pub(crate) fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

/// Converts a one-based page and a raw limit into a zero-based page and a bounded page size.
pub(crate) fn page_window(page: u64, limit: u64) -> (u64, u64) {
    (page.max(1) - 1, limit.clamp(1, MAX_LIMIT))
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationParams {
    /// One-based page number.
    #[serde(default = "default_page")]
    #[param(default = 1, minimum = 1)]
    pub page: u64,
    /// Items per page, at most 100.
    #[serde(default = "default_limit")]
    #[param(default = 10, minimum = 1, maximum = 100)]
    pub limit: u64,
    /// Case-insensitive substring search.
    pub search: Option<String>,
}

impl PaginationParams {
    pub fn window(&self) -> (u64, u64) {
        page_window(self.page, self.limit)
    }
}

/// Query for the brand, model and body type list endpoints.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CategoryListParams {
    /// `auto`, `moto` or `truck`.
    pub category: String,
    pub search: Option<String>,
    #[serde(default = "default_page")]
    #[param(default = 1, minimum = 1)]
    pub page: u64,
    #[serde(default = "default_limit")]
    #[param(default = 10, minimum = 1, maximum = 100)]
    pub limit: u64,
}

impl CategoryListParams {
    pub fn into_query(self) -> Result<CategoryQuery, AppError> {
        let category = self.category.parse::<VehicleCategory>()?;
        let (page, per_page) = page_window(self.page, self.limit);

        Ok(CategoryQuery {
            category,
            search: self.search,
            page,
            per_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_window_is_zero_based_and_bounded() {
        assert_eq!(page_window(1, 10), (0, 10));
        assert_eq!(page_window(0, 0), (0, 1));
        assert_eq!(page_window(3, 500), (2, MAX_LIMIT));
    }

    #[test]
    fn category_list_rejects_unknown_category() {
        let params = CategoryListParams {
            category: "boat".to_string(),
            search: None,
            page: 1,
            limit: 10,
        };

        assert!(matches!(params.into_query(), Err(AppError::Category(_))));
    }
}
