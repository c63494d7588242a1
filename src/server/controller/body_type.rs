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
        catalog::{BodyTypeDto, PaginatedBodyTypesDto, SaveBodyTypeDto},
    },
    server::{
        controller::CategoryListParams,
        error::AppError,
        model::{catalog::BodyTypeParams, category::VehicleCategory},
        service::catalog::BodyTypeService,
        state::AppState,
    },
};

pub static BODY_TYPE_TAG: &str = "body_type";

/// Create a body type with its vehicle categories.
#[utoipa::path(
    post,
    path = "/api/body-types",
    tag = BODY_TYPE_TAG,
    request_body = SaveBodyTypeDto,
    responses(
        (status = 201, description = "Body type created", body = BodyTypeDto),
        (status = 400, description = "Invalid body type data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_body_type(
    State(state): State<AppState>,
    Json(payload): Json<SaveBodyTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let params = BodyTypeParams::from_dto(payload)?;

    let body_type = BodyTypeService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(body_type.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/body-types",
    tag = BODY_TYPE_TAG,
    params(CategoryListParams),
    responses(
        (status = 200, description = "Body types in the category", body = PaginatedBodyTypesDto),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_body_types(
    State(state): State<AppState>,
    Query(params): Query<CategoryListParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = params.into_query()?;

    let body_types = BodyTypeService::new(&state.db)
        .get_by_category(&query)
        .await?;

    Ok((StatusCode::OK, Json(body_types.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/body-types/{id}",
    tag = BODY_TYPE_TAG,
    params(("id" = i32, Path, description = "Body type ID")),
    responses(
        (status = 200, description = "Body type", body = BodyTypeDto),
        (status = 404, description = "Body type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_body_type_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let body_type = BodyTypeService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(body_type.into_dto())))
}

/// Update a body type and replace its category set.
#[utoipa::path(
    put,
    path = "/api/body-types/{id}",
    tag = BODY_TYPE_TAG,
    params(("id" = i32, Path, description = "Body type ID")),
    request_body = SaveBodyTypeDto,
    responses(
        (status = 200, description = "Body type updated", body = BodyTypeDto),
        (status = 400, description = "Invalid body type data", body = ValidationErrorDto),
        (status = 404, description = "Body type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_body_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveBodyTypeDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let params = BodyTypeParams::from_dto(payload)?;

    let body_type = BodyTypeService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(body_type.into_dto())))
}

/// Delete a body type. Models that used it are kept with no body type.
#[utoipa::path(
    delete,
    path = "/api/body-types/{id}",
    tag = BODY_TYPE_TAG,
    params(("id" = i32, Path, description = "Body type ID")),
    responses(
        (status = 204, description = "Body type deleted"),
        (status = 404, description = "Body type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_body_type(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    BodyTypeService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/body-types/{id}/categories/{category}",
    tag = BODY_TYPE_TAG,
    params(
        ("id" = i32, Path, description = "Body type ID"),
        ("category" = String, Path, description = "`auto`, `moto` or `truck`")
    ),
    responses(
        (status = 200, description = "Number of removed tag rows", body = DeletedDto),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_body_type_category(
    State(state): State<AppState>,
    Path((id, category)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let category = category.parse::<VehicleCategory>()?;

    let deleted = BodyTypeService::new(&state.db)
        .delete_category(id, category)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted })))
}
