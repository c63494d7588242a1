//! Dealer stock writes. Listing and moderation of stock entries live under
//! `/api/listings/stock`.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use validator::Validate;

use crate::{
    model::{
        api::{ErrorDto, ValidationErrorDto},
        listing::{SaveStockDto, StockDto},
    },
    server::{
        error::AppError,
        model::listing::{stock_dto, StockParams},
        service::stock::StockService,
        state::AppState,
    },
};

pub static STOCK_TAG: &str = "stock";

#[utoipa::path(
    post,
    path = "/api/stocks",
    tag = STOCK_TAG,
    request_body = SaveStockDto,
    responses(
        (status = 201, description = "Stock entry created", body = StockDto),
        (status = 400, description = "Invalid stock data or status", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_stock(
    State(state): State<AppState>,
    Json(payload): Json<SaveStockDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let params = StockParams::from_dto(payload)?;

    let stock = StockService::new(&state.db).create(params).await?;

    Ok((StatusCode::CREATED, Json(stock_dto(stock))))
}

/// Update a stock entry. The status is left as is; use the listing status endpoint.
#[utoipa::path(
    put,
    path = "/api/stocks/{id}",
    tag = STOCK_TAG,
    params(("id" = i32, Path, description = "Stock entry ID")),
    request_body = SaveStockDto,
    responses(
        (status = 200, description = "Stock entry updated", body = StockDto),
        (status = 400, description = "Invalid stock data", body = ValidationErrorDto),
        (status = 404, description = "Stock entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_stock(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveStockDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let params = StockParams::from_dto(payload)?;

    let stock = StockService::new(&state.db).update(id, params).await?;

    Ok((StatusCode::OK, Json(stock_dto(stock))))
}

#[utoipa::path(
    delete,
    path = "/api/stocks/{id}",
    tag = STOCK_TAG,
    params(("id" = i32, Path, description = "Stock entry ID")),
    responses(
        (status = 204, description = "Stock entry deleted"),
        (status = 404, description = "Stock entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_stock(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    StockService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
