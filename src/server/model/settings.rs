//! Roles and back-office accounts.

use chrono::{DateTime, Utc};

use crate::{
    model::settings::{
        AdminUserDto, CreateAdminUserDto, PaginatedAdminUsersDto, RoleDto, SaveRoleDto,
        UpdateAdminUserDto,
    },
    server::model::page::Page,
};

#[derive(Debug, Clone)]
pub struct RoleParams {
    pub name: String,
    pub permissions: serde_json::Value,
}

impl From<SaveRoleDto> for RoleParams {
    fn from(dto: SaveRoleDto) -> Self {
        Self {
            name: dto.name,
            permissions: dto.permissions,
        }
    }
}

pub fn role_dto(entity: entity::role::Model) -> RoleDto {
    RoleDto {
        id: entity.id,
        name: entity.name,
        permissions: entity.permissions,
    }
}

/// Account fields accepted on create and update.
///
/// `password` is plain text and is hashed by the service before it reaches the
/// repository. On update `None` keeps the stored hash.
#[derive(Debug, Clone)]
pub struct AdminUserParams {
    pub username: String,
    pub login: String,
    pub password: Option<String>,
    pub role_id: i32,
}

impl From<CreateAdminUserDto> for AdminUserParams {
    fn from(dto: CreateAdminUserDto) -> Self {
        Self {
            username: dto.username,
            login: dto.login,
            password: Some(dto.password),
            role_id: dto.role_id,
        }
    }
}

impl From<UpdateAdminUserDto> for AdminUserParams {
    fn from(dto: UpdateAdminUserDto) -> Self {
        Self {
            username: dto.username,
            login: dto.login,
            password: dto.password,
            role_id: dto.role_id,
        }
    }
}

/// Account row joined with its role name. Never carries the password hash.
#[derive(Debug, Clone, PartialEq)]
pub struct AdminUser {
    pub id: i32,
    pub username: String,
    pub login: String,
    pub role_id: i32,
    pub role_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl AdminUser {
    pub fn from_entity(
        entity: entity::admin_user::Model,
        role: Option<entity::role::Model>,
    ) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            login: entity.login,
            role_id: entity.role_id,
            role_name: role.map(|role| role.name),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> AdminUserDto {
        AdminUserDto {
            id: self.id,
            username: self.username,
            login: self.login,
            role_id: self.role_id,
            role_name: self.role_name,
            created_at: self.created_at,
        }
    }
}

impl Page<AdminUser> {
    pub fn into_dto(self) -> PaginatedAdminUsersDto {
        let total_pages = self.total_pages();
        PaginatedAdminUsersDto {
            users: self.items.into_iter().map(AdminUser::into_dto).collect(),
            total: self.total,
            page: self.page + 1,
            per_page: self.per_page,
            total_pages,
        }
    }
}
