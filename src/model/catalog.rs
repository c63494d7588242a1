use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BrandDto {
    pub id: i32,
    pub name: String,
    pub logo_path: Option<String>,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Body for both brand create and brand update.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveBrandDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub logo_path: Option<String>,
    /// Replaces the stored category set. Labels: `auto`, `moto`, `truck`.
    #[validate(length(min = 1, message = "at least one category is required"))]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedBrandsDto {
    pub brands: Vec<BrandDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BrandModelDto {
    pub id: i32,
    pub brand_id: i32,
    pub body_type_id: Option<i32>,
    pub name: String,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveBrandModelDto {
    #[validate(range(min = 1))]
    pub brand_id: i32,
    pub body_type_id: Option<i32>,
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[validate(length(min = 1, message = "at least one category is required"))]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedBrandModelsDto {
    pub models: Vec<BrandModelDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BodyTypeDto {
    pub id: i32,
    pub name: String,
    pub image_path: Option<String>,
    pub categories: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveBodyTypeDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    pub image_path: Option<String>,
    #[validate(length(min = 1, message = "at least one category is required"))]
    pub categories: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedBodyTypesDto {
    pub body_types: Vec<BodyTypeDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
