use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        auto_store::{AutoStoreDto, PaginatedAutoStoresDto, SaveAutoStoreDto},
    },
    server::{
        controller::PaginationParams, error::AppError, service::auto_store::AutoStoreService,
        state::AppState,
    },
};

pub static AUTO_STORE_TAG: &str = "auto_store";

#[utoipa::path(
    post,
    path = "/api/auto-stores",
    tag = AUTO_STORE_TAG,
    request_body = SaveAutoStoreDto,
    responses(
        (status = 201, description = "Auto store created", body = AutoStoreDto),
        (status = 400, description = "Invalid store data or location", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_auto_store(
    State(state): State<AppState>,
    Json(payload): Json<SaveAutoStoreDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let store = AutoStoreService::new(&state.db, &state.directory)
        .create(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(store.into_dto())))
}

/// List auto stores newest first; `search` matches the store name.
///
/// Owner names come from the user service and are `null` when it is unavailable.
#[utoipa::path(
    get,
    path = "/api/auto-stores",
    tag = AUTO_STORE_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of auto stores", body = PaginatedAutoStoresDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auto_stores(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = params.window();

    let stores = AutoStoreService::new(&state.db, &state.directory)
        .get_paginated(params.search.as_deref(), page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(stores.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/auto-stores/{id}",
    tag = AUTO_STORE_TAG,
    params(("id" = i32, Path, description = "Auto store ID")),
    responses(
        (status = 200, description = "Auto store", body = AutoStoreDto),
        (status = 404, description = "Auto store not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_auto_store(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let store = AutoStoreService::new(&state.db, &state.directory)
        .get_by_id(id)
        .await?;

    Ok((StatusCode::OK, Json(store.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/auto-stores/{id}",
    tag = AUTO_STORE_TAG,
    params(("id" = i32, Path, description = "Auto store ID")),
    request_body = SaveAutoStoreDto,
    responses(
        (status = 200, description = "Auto store updated", body = AutoStoreDto),
        (status = 400, description = "Invalid store data or location", body = ValidationErrorDto),
        (status = 404, description = "Auto store not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_auto_store(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveAutoStoreDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let store = AutoStoreService::new(&state.db, &state.directory)
        .update(id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(store.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/auto-stores/{id}",
    tag = AUTO_STORE_TAG,
    params(("id" = i32, Path, description = "Auto store ID")),
    responses(
        (status = 204, description = "Auto store deleted"),
        (status = 404, description = "Auto store not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_auto_store(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AutoStoreService::new(&state.db, &state.directory)
        .delete(id)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
