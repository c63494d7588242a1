use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::location::{CityDto, RegionDto};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AutoStoreDto {
    pub id: i32,
    pub user_id: i64,
    /// Owner's full name from the user service, `null` when it could not be resolved.
    pub owner_name: Option<String>,
    pub store_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub logo_path: Option<String>,
    pub images: Vec<String>,
    pub region: Option<RegionDto>,
    pub city: Option<CityDto>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveAutoStoreDto {
    #[validate(range(min = 1))]
    pub user_id: i64,
    #[validate(length(min = 1, max = 255))]
    pub store_name: String,
    #[validate(length(min = 1, max = 32))]
    pub phone_number: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    pub logo_path: Option<String>,
    #[serde(default)]
    #[validate(length(max = 20))]
    pub images: Vec<String>,
    pub region_id: Option<i32>,
    pub city_id: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedAutoStoresDto {
    pub auto_stores: Vec<AutoStoreDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
