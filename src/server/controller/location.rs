use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        location::{
            CityDto, PaginatedCitiesDto, PaginatedRegionsDto, RegionDto, SaveCityDto,
            SaveRegionDto,
        },
    },
    server::{
        controller::{default_limit, default_page, page_window, PaginationParams},
        error::AppError,
        model::location::{city_dto, region_dto},
        service::location::{CityService, RegionService},
        state::AppState,
    },
};

pub static LOCATION_TAG: &str = "location";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CityListParams {
    /// Only cities of this region.
    pub region_id: Option<i32>,
    /// Matches any of the three names.
    pub search: Option<String>,
    #[serde(default = "default_page")]
    #[param(default = 1, minimum = 1)]
    pub page: u64,
    #[serde(default = "default_limit")]
    #[param(default = 10, minimum = 1, maximum = 100)]
    pub limit: u64,
}

#[utoipa::path(
    post,
    path = "/api/regions",
    tag = LOCATION_TAG,
    request_body = SaveRegionDto,
    responses(
        (status = 201, description = "Region created", body = RegionDto),
        (status = 400, description = "Invalid region data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_region(
    State(state): State<AppState>,
    Json(payload): Json<SaveRegionDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let region = RegionService::new(&state.db).create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(region_dto(region))))
}

/// List regions ordered by ID; `search` matches the Turkmen, English or Russian name.
#[utoipa::path(
    get,
    path = "/api/regions",
    tag = LOCATION_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of regions", body = PaginatedRegionsDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_regions(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = params.window();

    let regions = RegionService::new(&state.db)
        .get_paginated(params.search.as_deref(), page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(regions.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/regions/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Region ID")),
    responses(
        (status = 200, description = "Region", body = RegionDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_region_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let region = RegionService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(region_dto(region))))
}

#[utoipa::path(
    put,
    path = "/api/regions/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Region ID")),
    request_body = SaveRegionDto,
    responses(
        (status = 200, description = "Region updated", body = RegionDto),
        (status = 400, description = "Invalid region data", body = ValidationErrorDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_region(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveRegionDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let region = RegionService::new(&state.db)
        .update(id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(region_dto(region))))
}

/// Delete a region and every city in it.
#[utoipa::path(
    delete,
    path = "/api/regions/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "Region ID")),
    responses(
        (status = 204, description = "Region deleted"),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_region(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    RegionService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    post,
    path = "/api/cities",
    tag = LOCATION_TAG,
    request_body = SaveCityDto,
    responses(
        (status = 201, description = "City created", body = CityDto),
        (status = 400, description = "Invalid city data", body = ValidationErrorDto),
        (status = 404, description = "Region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_city(
    State(state): State<AppState>,
    Json(payload): Json<SaveCityDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let city = CityService::new(&state.db).create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(city_dto(city))))
}

#[utoipa::path(
    get,
    path = "/api/cities",
    tag = LOCATION_TAG,
    params(CityListParams),
    responses(
        (status = 200, description = "One page of cities", body = PaginatedCitiesDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cities(
    State(state): State<AppState>,
    Query(params): Query<CityListParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = page_window(params.page, params.limit);

    let cities = CityService::new(&state.db)
        .get_paginated(params.region_id, params.search.as_deref(), page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(cities.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/cities/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "City ID")),
    responses(
        (status = 200, description = "City", body = CityDto),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_city_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let city = CityService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(city_dto(city))))
}

#[utoipa::path(
    put,
    path = "/api/cities/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "City ID")),
    request_body = SaveCityDto,
    responses(
        (status = 200, description = "City updated", body = CityDto),
        (status = 400, description = "Invalid city data", body = ValidationErrorDto),
        (status = 404, description = "City or region not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveCityDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let city = CityService::new(&state.db)
        .update(id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(city_dto(city))))
}

#[utoipa::path(
    delete,
    path = "/api/cities/{id}",
    tag = LOCATION_TAG,
    params(("id" = i32, Path, description = "City ID")),
    responses(
        (status = 204, description = "City deleted"),
        (status = 404, description = "City not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_city(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    CityService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
