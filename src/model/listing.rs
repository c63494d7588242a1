use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CarDto {
    pub id: i32,
    pub user_id: i64,
    pub status: String,
    pub brand_id: Option<i32>,
    pub model_id: Option<i32>,
    pub year: i32,
    pub price: i64,
    pub vin: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MotoDto {
    pub id: i32,
    pub user_id: i64,
    pub status: String,
    pub brand_id: Option<i32>,
    pub model_id: Option<i32>,
    pub year: i32,
    pub price: i64,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TruckDto {
    pub id: i32,
    pub user_id: i64,
    pub status: String,
    pub brand_id: Option<i32>,
    pub model_id: Option<i32>,
    pub year: i32,
    pub price: i64,
    pub load_capacity: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StockDto {
    pub id: i32,
    pub user_id: i64,
    pub status: String,
    pub store_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub address: String,
    pub region_id: Option<i32>,
    pub city_id: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Any listing, tagged with its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListingDto {
    Car(CarDto),
    Moto(MotoDto),
    Truck(TruckDto),
    Stock(StockDto),
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedListingsDto {
    pub listings: Vec<ListingDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateListingStatusDto {
    /// `pending`, `accepted` or `blocked`.
    pub status: String,
    /// Push notification text sent to the listing owner.
    #[validate(length(min = 1, max = 1000))]
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ListingStatusChangedDto {
    pub kind: String,
    pub id: i32,
    pub status: String,
    pub owner_id: i64,
}

/// Dealer stock entry written from the back office.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveStockDto {
    #[validate(range(min = 1))]
    pub user_id: i64,
    /// Initial status on create, `pending` when omitted. Ignored on update.
    pub status: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub store_name: String,
    #[validate(length(min = 1, max = 32))]
    pub phone_number: String,
    #[validate(email)]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 500))]
    pub address: String,
    pub region_id: Option<i32>,
    pub city_id: Option<i32>,
    #[validate(length(max = 5000))]
    pub description: Option<String>,
}
