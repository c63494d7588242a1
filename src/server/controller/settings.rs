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
        settings::{
            AdminUserDto, CreateAdminUserDto, PaginatedAdminUsersDto, RoleDto, SaveRoleDto,
            UpdateAdminUserDto,
        },
    },
    server::{
        controller::PaginationParams,
        error::AppError,
        model::settings::role_dto,
        service::settings::{AdminUserService, RoleService},
        state::AppState,
    },
};

pub static SETTINGS_TAG: &str = "settings";

#[utoipa::path(
    post,
    path = "/api/settings/roles",
    tag = SETTINGS_TAG,
    request_body = SaveRoleDto,
    responses(
        (status = 201, description = "Role created", body = RoleDto),
        (status = 400, description = "Invalid role data", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_role(
    State(state): State<AppState>,
    Json(payload): Json<SaveRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let role = RoleService::new(&state.db).create(payload.into()).await?;

    Ok((StatusCode::CREATED, Json(role_dto(role))))
}

#[utoipa::path(
    get,
    path = "/api/settings/roles",
    tag = SETTINGS_TAG,
    responses(
        (status = 200, description = "All roles", body = Vec<RoleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let roles = RoleService::new(&state.db).get_all().await?;

    let roles: Vec<RoleDto> = roles.into_iter().map(role_dto).collect();

    Ok((StatusCode::OK, Json(roles)))
}

#[utoipa::path(
    get,
    path = "/api/settings/roles/{id}",
    tag = SETTINGS_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 200, description = "Role", body = RoleDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_role_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let role = RoleService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(role_dto(role))))
}

#[utoipa::path(
    put,
    path = "/api/settings/roles/{id}",
    tag = SETTINGS_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    request_body = SaveRoleDto,
    responses(
        (status = 200, description = "Role updated", body = RoleDto),
        (status = 400, description = "Invalid role data", body = ValidationErrorDto),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<SaveRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let role = RoleService::new(&state.db)
        .update(id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(role_dto(role))))
}

/// Delete a role together with every account that holds it.
#[utoipa::path(
    delete,
    path = "/api/settings/roles/{id}",
    tag = SETTINGS_TAG,
    params(("id" = i32, Path, description = "Role ID")),
    responses(
        (status = 204, description = "Role deleted"),
        (status = 404, description = "Role not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_role(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    RoleService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Create a back-office account.
///
/// The password is hashed with bcrypt before it is stored and is never returned.
#[utoipa::path(
    post,
    path = "/api/settings/users",
    tag = SETTINGS_TAG,
    request_body = CreateAdminUserDto,
    responses(
        (status = 201, description = "Account created", body = AdminUserDto),
        (status = 400, description = "Invalid account or unknown role", body = ValidationErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateAdminUserDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AdminUserService::new(&state.db)
        .create(payload.into())
        .await?;

    Ok((StatusCode::CREATED, Json(user.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/settings/users",
    tag = SETTINGS_TAG,
    params(PaginationParams),
    responses(
        (status = 200, description = "One page of accounts", body = PaginatedAdminUsersDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_users(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> Result<impl IntoResponse, AppError> {
    let (page, per_page) = params.window();

    let users = AdminUserService::new(&state.db)
        .get_paginated(page, per_page)
        .await?;

    Ok((StatusCode::OK, Json(users.into_dto())))
}

#[utoipa::path(
    get,
    path = "/api/settings/users/{id}",
    tag = SETTINGS_TAG,
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 200, description = "Account", body = AdminUserDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_user_by_id(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AdminUserService::new(&state.db).get_by_id(id).await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

/// Update an account. Omitting `password` keeps the current one.
#[utoipa::path(
    put,
    path = "/api/settings/users/{id}",
    tag = SETTINGS_TAG,
    params(("id" = i32, Path, description = "Account ID")),
    request_body = UpdateAdminUserDto,
    responses(
        (status = 200, description = "Account updated", body = AdminUserDto),
        (status = 400, description = "Invalid account or unknown role", body = ValidationErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_admin_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateAdminUserDto>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate()?;

    let user = AdminUserService::new(&state.db)
        .update(id, payload.into())
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/settings/users/{id}",
    tag = SETTINGS_TAG,
    params(("id" = i32, Path, description = "Account ID")),
    responses(
        (status = 204, description = "Account deleted"),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_admin_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AdminUserService::new(&state.db).delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
