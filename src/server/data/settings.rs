//! Roles and admin accounts.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::page_size,
    model::{
        page::Page,
        settings::{AdminUser, RoleParams},
    },
};

pub struct RoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: RoleParams) -> Result<entity::role::Model, DbErr> {
        entity::role::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            permissions: ActiveValue::Set(params.permissions),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::role::Model>, DbErr> {
        entity::role::Entity::find_by_id(id).one(self.db).await
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<entity::role::Model>, DbErr> {
        entity::role::Entity::find()
            .filter(entity::role::Column::Name.eq(name))
            .one(self.db)
            .await
    }

    pub async fn get_all(&self) -> Result<Vec<entity::role::Model>, DbErr> {
        entity::role::Entity::find()
            .order_by_asc(entity::role::Column::Id)
            .all(self.db)
            .await
    }

    pub async fn update(&self, id: i32, params: RoleParams) -> Result<entity::role::Model, DbErr> {
        let existing = self
            .get_by_id(id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("role {} not found", id)))?;

        let mut role: entity::role::ActiveModel = existing.into();
        role.name = ActiveValue::Set(params.name);
        role.permissions = ActiveValue::Set(params.permissions);
        role.update(self.db).await
    }

    /// Deletes a role and, through the foreign key, every account holding it.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::role::Entity::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("role {} not found", id)));
        }

        Ok(())
    }
}

/// Account columns other than the password hash.
pub struct AdminUserRecord {
    pub username: String,
    pub login: String,
    pub role_id: i32,
}

pub struct AdminUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn not_found(id: i32) -> DbErr {
        DbErr::RecordNotFound(format!("admin user {} not found", id))
    }

    /// Creates an account with an already-hashed password.
    pub async fn create(
        &self,
        record: AdminUserRecord,
        password_hash: String,
    ) -> Result<AdminUser, DbErr> {
        let user = entity::admin_user::ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(record.username),
            login: ActiveValue::Set(record.login),
            password_hash: ActiveValue::Set(password_hash),
            role_id: ActiveValue::Set(record.role_id),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        let role = entity::role::Entity::find_by_id(user.role_id)
            .one(self.db)
            .await?;

        Ok(AdminUser::from_entity(user, role))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AdminUser>, DbErr> {
        let found = entity::admin_user::Entity::find_by_id(id)
            .find_also_related(entity::role::Entity)
            .one(self.db)
            .await?;

        Ok(found.map(|(user, role)| AdminUser::from_entity(user, role)))
    }

    /// Gets the stored hash for a login, used to verify credentials.
    pub async fn find_by_login(
        &self,
        login: &str,
    ) -> Result<Option<entity::admin_user::Model>, DbErr> {
        entity::admin_user::Entity::find()
            .filter(entity::admin_user::Column::Login.eq(login))
            .one(self.db)
            .await
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::admin_user::Entity::find().count(self.db).await
    }

    /// Gets accounts ordered by ID, each joined with its role.
    pub async fn get_paginated(&self, page: u64, per_page: u64) -> Result<Page<AdminUser>, DbErr> {
        let per_page = page_size(per_page);
        let paginator = entity::admin_user::Entity::find()
            .find_also_related(entity::role::Entity)
            .order_by_asc(entity::admin_user::Column::Id)
            .paginate(self.db, per_page);

        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(page).await?;

        Ok(Page {
            items: rows
                .into_iter()
                .map(|(user, role)| AdminUser::from_entity(user, role))
                .collect(),
            total,
            page,
            per_page,
        })
    }

    /// Updates an account. A `None` hash keeps the stored password.
    pub async fn update(
        &self,
        id: i32,
        record: AdminUserRecord,
        password_hash: Option<String>,
    ) -> Result<AdminUser, DbErr> {
        let existing = entity::admin_user::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| Self::not_found(id))?;

        let mut user: entity::admin_user::ActiveModel = existing.into();
        user.username = ActiveValue::Set(record.username);
        user.login = ActiveValue::Set(record.login);
        user.role_id = ActiveValue::Set(record.role_id);
        if let Some(password_hash) = password_hash {
            user.password_hash = ActiveValue::Set(password_hash);
        }
        let user = user.update(self.db).await?;

        let role = entity::role::Entity::find_by_id(user.role_id)
            .one(self.db)
            .await?;

        Ok(AdminUser::from_entity(user, role))
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::admin_user::Entity::delete_by_id(id)
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(Self::not_found(id));
        }

        Ok(())
    }
}
