use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    model::{api::ErrorDto, user::PaginatedMarketplaceUsersDto},
    server::{
        controller::PaginationParams, error::AppError,
        service::marketplace_user::MarketplaceUserService, state::AppState,
    },
};

pub static USER_TAG: &str = "user";

/// List marketplace accounts from the user service.
///
/// `search` matches the full name, email or phone number.
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "Marketplace users", body = PaginatedMarketplaceUsersDto),
        (status = 502, description = "User service unavailable", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = params.window();

    let users = MarketplaceUserService::new(&state.directory)
        .get_paginated(params.search.as_deref(), page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}
