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
        api::{ErrorDto, StatusTransitionErrorDto, ValidationErrorDto},
        listing::{
            ListingDto, ListingStatusChangedDto, PaginatedListingsDto, UpdateListingStatusDto,
        },
    },
    server::{
        controller::{default_limit, default_page, page_window},
        data::listing::ListingRepository,
        error::AppError,
        model::listing::{ListingFilter, ListingKind, ListingStatus, StatusTransition},
        service::{listing::ListingService, listing_status::ListingStatusService},
        state::AppState,
    },
};

pub static LISTING_TAG: &str = "listing";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListingListParams {
    /// `pending`, `accepted` or `blocked`.
    pub status: Option<String>,
    /// Searches the description, or the store name for dealer stock.
    pub search: Option<String>,
    #[serde(default = "default_page")]
    #[param(default = 1, minimum = 1)]
    pub page: u64,
    #[serde(default = "default_limit")]
    #[param(default = 10, minimum = 1, maximum = 100)]
    pub limit: u64,
}

/// List listings of one kind, newest first.
///
/// `kind` is one of `car`, `moto`, `truck` or `stock` (plural forms accepted).
#[utoipa::path(
    get,
    path = "/api/listings/{kind}",
    tag = LISTING_TAG,
    params(
        ("kind" = String, Path, description = "Listing kind"),
        ListingListParams
    ),
    responses(
        (status = 200, description = "One page of listings", body = PaginatedListingsDto),
        (status = 400, description = "Unknown kind or status", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listings(
    State(state): State<AppState>,
    Path(kind): Path<String>,
    Query(params): Query<ListingListParams>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind.parse::<ListingKind>()?;
    let filter = ListingFilter {
        status: params
            .status
            .as_deref()
            .map(str::parse::<ListingStatus>)
            .transpose()?,
        search: params.search,
    };
    let (page, per_page) = page_window(params.page, params.limit);

    let listings = ListingService::new(&state.db)
        .get_paginated(kind, &filter, page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(listings.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/listings/{kind}/{id}",
    tag = LISTING_TAG,
    params(
        ("kind" = String, Path, description = "Listing kind"),
        ("id" = i32, Path, description = "Listing ID")
    ),
    responses(
        (status = 200, description = "Listing", body = ListingDto),
        (status = 400, description = "Unknown kind", body = ErrorDto),
        (status = 404, description = "Listing not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_listing_by_id(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let kind = kind.parse::<ListingKind>()?;

    let listing = ListingService::new(&state.db).get_by_id(kind, id).await?;

    Ok((StatusCode::OK, Json(listing.into_dto())))
}

/// Change a listing's moderation status and notify its owner.
///
/// The status is written first, then the owner and their delivery token are looked
/// up. A failure at any of these steps is returned with the failing `step`; earlier
/// steps are not undone. The push notification is sent in the background and its
/// outcome does not affect the response.
///
/// # Returns
/// - `200 OK` - Status committed and notification handed to the gateway
/// - `400 Bad Request` - Unknown kind or status, or empty message
/// - `404 Not Found` - Listing or owner not found
/// - `502 Bad Gateway` - User service failed during token lookup
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/api/listings/{kind}/{id}/status",
    tag = LISTING_TAG,
    params(
        ("kind" = String, Path, description = "Listing kind"),
        ("id" = i32, Path, description = "Listing ID")
    ),
    request_body = UpdateListingStatusDto,
    responses(
        (status = 200, description = "Status changed", body = ListingStatusChangedDto),
        (status = 400, description = "Invalid request", body = ValidationErrorDto),
        (status = 404, description = "Listing or owner not found", body = StatusTransitionErrorDto),
        (status = 502, description = "User service unavailable", body = StatusTransitionErrorDto),
        (status = 500, description = "Internal server error", body = StatusTransitionErrorDto)
    ),
)]
pub async fn update_listing_status(
    State(state): State<AppState>,
    Path((kind, id)): Path<(String, i32)>,
    Json(payload): Json<UpdateListingStatusDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;
    let transition = StatusTransition {
        kind: kind.parse::<ListingKind>()?,
        listing_id: id,
        status: payload.status.parse::<ListingStatus>()?,
        message: payload.message,
    };

    let store = ListingRepository::new(&state.db);
    let change = ListingStatusService::new(&store, &state.directory, &state.dispatcher)
        .change_status(transition)
        .await?;

    Ok((StatusCode::OK, Json(change.into_dto())))
}
