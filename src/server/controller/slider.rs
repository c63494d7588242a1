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
        slider::{PaginatedSlidersDto, SaveSliderDto, SliderDto},
    },
    server::{
        controller::{default_limit, default_page, page_window},
        error::AppError,
        model::slider::{slider_dto, SliderFilter},
        service::slider::SliderService,
        state::AppState,
    },
};

pub static SLIDER_TAG: &str = "slider";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SliderListParams {
    /// Only sliders shown on this platform, e.g. `web` or `mobile`.
    pub platform: Option<String>,
    /// Case-insensitive substring of the title.
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
    path = "/api/sliders",
    tag = SLIDER_TAG,
    request_body = SaveSliderDto,
    responses(
        (status = 201, description = "Slider created", body = SliderDto),
        (status = 400, description = "Invalid slider data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_slider(
    State(state): State<AppState>,
    Json(payload): Json<SaveSliderDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let slider = SliderService::new(&state.db).create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(slider_dto(slider))))
}

/// List sliders newest first, optionally for one platform.
#[utoipa::path(
    get,
    path = "/api/sliders",
    tag = SLIDER_TAG,
    params(SliderListParams),
    responses(
        (status = 200, description = "One page of sliders", body = PaginatedSlidersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sliders(
    State(state): State<AppState>,
    Query(params): Query<SliderListParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = page_window(params.page, params.limit);
    let filter = SliderFilter::new(params.platform, params.search);

    let sliders = SliderService::new(&state.db)
        .get_paginated(&filter, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(sliders.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/sliders/{id}",
    tag = SLIDER_TAG,
    params(("id" = i32, Path, description = "Slider ID")),
    responses(
        (status = 200, description = "Slider", body = SliderDto),
        (status = 404, description = "Slider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_slider_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let slider = SliderService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(slider_dto(slider))))
}

#[utoipa::path(
    put,
    path = "/api/sliders/{id}",
    tag = SLIDER_TAG,
    params(("id" = i32, Path, description = "Slider ID")),
    request_body = SaveSliderDto,
    responses(
        (status = 200, description = "Slider updated", body = SliderDto),
        (status = 400, description = "Invalid slider data", body = ValidationErrorDto),
        (status = 404, description = "Slider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_slider(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveSliderDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let slider = SliderService::new(&state.db)
        .update(id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(slider_dto(slider))))
}

#[utoipa::path(
    delete,
    path = "/api/sliders/{id}",
    tag = SLIDER_TAG,
    params(("id" = i32, Path, description = "Slider ID")),
    responses(
        (status = 204, description = "Slider deleted"),
        (status = 404, description = "Slider not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_slider(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    SliderService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
