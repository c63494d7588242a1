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
        catalog::{BrandModelDto, PaginatedBrandModelsDto, SaveBrandModelDto},
    },
    server::{
        controller::CategoryListParams,
        error::AppError,
        model::{catalog::BrandModelParams, category::VehicleCategory},
        service::catalog::BrandModelService,
        state::AppState,
    },
};

pub static MODEL_TAG: &str = "model";

/// Create a model under an existing brand.
///
/// # Returns
/// - `201 Created` - Model with its stored categories
/// - `400 Bad Request` - Invalid body or unknown category
/// - `404 Not Found` - Brand or body type does not exist
#[utoipa::path(
    post,
    path = "/api/models",
    tag = MODEL_TAG,
    request_body = SaveBrandModelDto,
    responses(
        (status = 201, description = "Model created", body = BrandModelDto),
        (status = 400, description = "Invalid model data", body = ValidationErrorDto),
        (status = 404, description = "Brand or body type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_model(
    State(state): State<AppState>,
    Json(payload): Json<SaveBrandModelDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let params = BrandModelParams::from_dto(payload)?;

    let model = BrandModelService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(model.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/models",
    tag = MODEL_TAG,
    params(CategoryListParams),
    responses(
        (status = 200, description = "Models in the category", body = PaginatedBrandModelsDto),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_models(
    State(state): State<AppState>,
    Query(params): Query<CategoryListParams>,
) -> Result<impl IntoResponse, AppError> {
    let query = params.into_query()?;

    let models = BrandModelService::new(&state.db)
        .get_by_category(&query)
        .await?;

    Ok((StatusCode::OK, Json(models.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/models/{id}",
    tag = MODEL_TAG,
    params(("id" = i32, Path, description = "Model ID")),
    responses(
        (status = 200, description = "Model", body = BrandModelDto),
        (status = 404, description = "Model not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_model_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let model = BrandModelService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(model.into_dto())))
}

/// Update a model and replace its category set.
#[utoipa::path(
    put,
    path = "/api/models/{id}",
    tag = MODEL_TAG,
    params(("id" = i32, Path, description = "Model ID")),
    request_body = SaveBrandModelDto,
    responses(
        (status = 200, description = "Model updated", body = BrandModelDto),
        (status = 400, description = "Invalid model data", body = ValidationErrorDto),
        (status = 404, description = "Model, brand or body type not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_model(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveBrandModelDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let params = BrandModelParams::from_dto(payload)?;

    let model = BrandModelService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(model.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/models/{id}",
    tag = MODEL_TAG,
    params(("id" = i32, Path, description = "Model ID")),
    responses(
        (status = 204, description = "Model deleted"),
        (status = 404, description = "Model not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_model(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    BrandModelService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete,
    path = "/api/models/{id}/categories/{category}",
    tag = MODEL_TAG,
    params(
        ("id" = i32, Path, description = "Model ID"),
        ("category" = String, Path, description = "`auto`, `moto` or `truck`")
    ),
    responses(
        (status = 200, description = "Number of removed tag rows", body = DeletedDto),
        (status = 400, description = "Unknown category", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_model_category(
    State(state): State<AppState>,
    Path((id, category)): Path<(i32, String)>,
) -> Result<impl IntoResponse, AppError> {
    let category = category.parse::<VehicleCategory>()?;

    let deleted = BrandModelService::new(&state.db)
        .delete_category(id, category)
        .await?;

    Ok((StatusCode::OK, Json(DeletedDto { deleted })))
}
