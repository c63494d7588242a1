use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RoleDto {
    pub id: i32,
    pub name: String,
    #[schema(value_type = Object)]
    pub permissions: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SaveRoleDto {
    #[validate(length(min = 1, max = 64))]
    pub name: String,
    #[schema(value_type = Object)]
    pub permissions: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AdminUserDto {
    pub id: i32,
    pub username: String,
    pub login: String,
    pub role_id: i32,
    pub role_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateAdminUserDto {
    #[validate(length(min = 1, max = 255))]
    pub username: String,
    #[validate(length(min = 3, max = 64))]
    pub login: String,
    #[validate(length(min = 8, max = 72))]
    pub password: String,
    #[validate(range(min = 1))]
    pub role_id: i32,
}

/// Omitting `password` keeps the current one.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateAdminUserDto {
    #[validate(length(min = 1, max = 255))]
    pub username: String,
    #[validate(length(min = 3, max = 64))]
    pub login: String,
    #[validate(length(min = 8, max = 72))]
    pub password: Option<String>,
    #[validate(range(min = 1))]
    pub role_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PaginatedAdminUsersDto {
    pub users: Vec<AdminUserDto>,
    pub total: u64,
    pub page: u64,
    pub per_page: u64,
    pub total_pages: u64,
}
