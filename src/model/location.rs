use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RegionDto {
    pub id: i32,
    pub name_tm: String,
    pub name_en: String,
    pub name_ru: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveRegionDto {
    #[validate(length(min = 1, max = 255))]
    pub name_tm: String,
    #[validate(length(min = 1, max = 255))]
    pub name_en: String,
    #[validate(length(min = 1, max = 255))]
    pub name_ru: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CityDto {
    pub id: i32,
    pub region_id: i32,
    pub name_tm: String,
    pub name_en: String,
    pub name_ru: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveCityDto {
    #[validate(range(min = 1))]
    pub region_id: i32,
    #[validate(length(min = 1, max = 255))]
    pub name_tm: String,
    #[validate(length(min = 1, max = 255))]
    pub name_en: String,
    #[validate(length(min = 1, max = 255))]
    pub name_ru: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedRegionsDto {
    pub regions: Vec<RegionDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedCitiesDto {
    pub cities: Vec<CityDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
