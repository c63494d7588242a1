use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{DeletedDto, ErrorDto, ValidationErrorDto},
        catalog::{BrandDto, PaginatedBrandsDto, SaveBrandDto},
    },
    server::{
        controller::CategoryListParams,
        error::AppError,
        model::{catalog::BrandParams, category::VehicleCategory},
        service::catalog::BrandService,
        state::AppState,
    },
};

/// Tag for grouping brand endpoints in OpenAPI documentation
pub static BRAND_TAG: &str = "brand";

/// Create a brand with its vehicle categories.
///
/// The brand row and one tag row per category are written in a single transaction;
/// if any tag insert fails nothing is stored.
///
/// # Returns
/// - `201 Created` - Brand with its stored categories
/// - `400 Bad Request` - Invalid body or unknown category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/api/brands",
    tag = BRAND_TAG,
    request_body = SaveBrandDto,
    responses(
        (status = 201, description = "Brand created", body = BrandDto),
        (status = 400, description = "Invalid brand data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_brand(
    State(state): State<AppState>,
    Json(payload): Json<SaveBrandDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let params = BrandParams::from_dto(payload)?;

    let brand = BrandService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(brand.into_dto())))
}

/// List brands tagged with a category, newest first.
///
/// Each brand carries its full category set, not just the requested one.
///
/// # Returns
/// - `200 OK` - One page of brands
/// - `400 Bad Request` - Missing or unknown category
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/api/brands",
    tag = BRAND_TAG,
    params(CategoryListParams),
    responses(
        (status = 200, description = "Brands in the category", body = PaginatedBrandsDto),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brands(
    State(state): State<AppState>,
    Query(params): Query<CategoryListParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = params.into_query()?;

    let brands = BrandService::new(&state.db).get_by_category(&query).await?;

    Ok((StatusCode::OK, Json(brands.into_dto())))
}

/// Get a brand by ID.
#[utoipa::path(
    get,
    path = "/api/brands/{id}",
    tag = BRAND_TAG,
    params(("id" = i32, Path, description = "Brand ID")),
    responses(
        (status = 200, description = "Brand", body = BrandDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_brand_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let brand = BrandService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(brand.into_dto())))
}

/// Update a brand and replace its category set.
///
/// Stored categories not present in the body are removed; the replacement happens
/// in the same transaction as the column update.
///
/// # Returns
/// - `200 OK` - Updated brand
/// - `400 Bad Request` - Invalid body or unknown category
/// - `404 Not Found` - Brand does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/brands/{id}",
    tag = BRAND_TAG,
    params(("id" = i32, Path, description = "Brand ID")),
    request_body = SaveBrandDto,
    responses(
        (status = 200, description = "Brand updated", body = BrandDto),
        (status = 400, description = "Invalid brand data", body = ValidationErrorDto),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveBrandDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let params = BrandParams::from_dto(payload)?;

    let brand = BrandService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(brand.into_dto())))
}

/// Delete a brand, its models and all of their category tags.
#[utoipa::path(
    delete,
    path = "/api/brands/{id}",
    tag = BRAND_TAG,
    params(("id" = i32, Path, description = "Brand ID")),
    responses(
        (status = 204, description = "Brand deleted"),
        (status = 404, description = "Brand not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_brand(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    BrandService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Remove one category from a brand.
///
/// Deleting a category the brand does not carry succeeds with `deleted: 0`. The brand
/// itself is kept even when its last category is removed.
#[utoipa::path(
    delete,
    path = "/api/brands/{id}/categories/{category}",
    tag = BRAND_TAG,
    params(
        ("id" = i32, Path, description = "Brand ID"),
        ("category" = String, Path, description = "`auto`, `moto` or `truck`")
    ),
    responses(
        (status = 200, description = "Number of removed tag rows", body = DeletedDto),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_brand_category(
    State(state): State<AppState>,
    Path((id, category)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let category = category.parse::<VehicleCategory>()?;

    let deleted = BrandService::new(&state.db)
        .delete_category(id, category)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted })))
}
