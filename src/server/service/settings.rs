//! Roles and back-office accounts, including the first-start super admin.

use sea_orm::DatabaseConnection;

use crate::server::{
    config::SuperAdmin,
    data::settings::{AdminUserRecord, AdminUserRepository, RoleRepository},
    error::AppError,
    model::{
        page::Page,
        settings::{AdminUser, AdminUserParams, RoleParams},
    },
};

/// Role granted to the account created by [`AdminUserService::ensure_super_admin`].
pub const SUPER_ADMIN_ROLE: &str = "super_admin";

pub struct RoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: RoleParams) -> Result<entity::role::Model, AppError> {
        Ok(RoleRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<entity::role::Model, AppError> {
        RoleRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Role {} not found", id)))
    }

    pub async fn get_all(&self) -> Result<Vec<entity::role::Model>, AppError> {
        Ok(RoleRepository::new(self.db).get_all().await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: RoleParams,
    ) -> Result<entity::role::Model, AppError> {
        Ok(RoleRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(RoleRepository::new(self.db).delete(id).await?)
    }
}

pub struct AdminUserService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminUserService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_role(&self, role_id: i32) -> Result<(), AppError> {
        RoleRepository::new(self.db)
            .get_by_id(role_id)
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::BadRequest(format!("Role {} does not exist", role_id)))
    }

    fn split(params: AdminUserParams) -> (AdminUserRecord, Option<String>) {
        (
            AdminUserRecord {
                username: params.username,
                login: params.login,
                role_id: params.role_id,
            },
            params.password,
        )
    }

    /// Creates an account. The password is stored only as a bcrypt hash.
    pub async fn create(&self, params: AdminUserParams) -> Result<AdminUser, AppError> {
        self.ensure_role(params.role_id).await?;

        let (record, password) = Self::split(params);
        let password =
            password.ok_or_else(|| AppError::BadRequest("Password is required".to_string()))?;
        let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;

        let user = AdminUserRepository::new(self.db).create(record, hash).await?;

        tracing::info!(user_id = user.id, login = %user.login, "Admin user created");

        Ok(user)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<AdminUser, AppError> {
        AdminUserRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Admin user {} not found", id)))
    }

    pub async fn get_paginated(
        &self,
        page: u64,
        per_page: u64,
    ) -> Result<Page<AdminUser>, AppError> {
        Ok(AdminUserRepository::new(self.db)
            .get_paginated(page, per_page)
            .await?)
    }

    /// Updates an account, re-hashing the password only when a new one is supplied.
    pub async fn update(&self, id: i32, params: AdminUserParams) -> Result<AdminUser, AppError> {
        self.ensure_role(params.role_id).await?;

        let (record, password) = Self::split(params);
        let hash = password
            .map(|password| bcrypt::hash(password, bcrypt::DEFAULT_COST))
            .transpose()?;

        Ok(AdminUserRepository::new(self.db)
            .update(id, record, hash)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(AdminUserRepository::new(self.db).delete(id).await?)
    }

    /// Creates the super admin role and account when no account exists yet.
    ///
    /// Returns `true` when an account was created. Without configured credentials an
    /// empty account table is only reported.
    pub async fn ensure_super_admin(
        &self,
        credentials: Option<&SuperAdmin>,
    ) -> Result<bool, AppError> {
        let users = AdminUserRepository::new(self.db);
        if users.count().await? > 0 {
            return Ok(false);
        }

        let Some(credentials) = credentials else {
            tracing::warn!(
                "No admin user exists; set SUPER_ADMIN_LOGIN and SUPER_ADMIN_PASSWORD to create one"
            );
            return Ok(false);
        };

        let roles = RoleRepository::new(self.db);
        let role = match roles.find_by_name(SUPER_ADMIN_ROLE).await? {
            Some(role) => role,
            None => {
                roles
                    .create(RoleParams {
                        name: SUPER_ADMIN_ROLE.to_string(),
                        permissions: serde_json::json!({ "all": true }),
                    })
                    .await?
            }
        };

        self.create(AdminUserParams {
            username: "Super Admin".to_string(),
            login: credentials.login.clone(),
            password: Some(credentials.password.clone()),
            role_id: role.id,
        })
        .await?;

        tracing::info!(login = %credentials.login, "Super admin account created");

        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;

    fn credentials() -> SuperAdmin {
        SuperAdmin {
            login: "root".to_string(),
            password: "correct horse battery".to_string(),
        }
    }

    #[tokio::test]
    async fn creates_super_admin_once() {
        let test = TestBuilder::new()
            .with_settings_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let service = AdminUserService::new(db);

        assert!(service.ensure_super_admin(Some(&credentials())).await.unwrap());
        assert!(!service.ensure_super_admin(Some(&credentials())).await.unwrap());

        let stored = AdminUserRepository::new(db)
            .find_by_login("root")
            .await
            .unwrap()
            .unwrap();
        assert_ne!(stored.password_hash, "correct horse battery");
        assert!(bcrypt::verify("correct horse battery", &stored.password_hash).unwrap());

        let user = service.get_by_id(stored.id).await.unwrap();
        assert_eq!(user.role_name.as_deref(), Some(SUPER_ADMIN_ROLE));
    }

    #[tokio::test]
    async fn skips_bootstrap_without_credentials() {
        let test = TestBuilder::new()
            .with_settings_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let created = AdminUserService::new(db)
            .ensure_super_admin(None)
            .await
            .unwrap();

        assert!(!created);
        assert_eq!(AdminUserRepository::new(db).count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn rejects_unknown_role() {
        let test = TestBuilder::new()
            .with_settings_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let result = AdminUserService::new(db)
            .create(AdminUserParams {
                username: "Aman".to_string(),
                login: "aman".to_string(),
                password: Some("long enough".to_string()),
                role_id: 404,
            })
            .await;

        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[tokio::test]
    async fn update_without_password_keeps_hash() {
        let test = TestBuilder::new()
            .with_settings_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();
        let role = factory::settings::create_role(db).await.unwrap();
        let user = factory::settings::create_admin_user(db, role.id).await.unwrap();

        AdminUserService::new(db)
            .update(
                user.id,
                AdminUserParams {
                    username: user.username.clone(),
                    login: user.login.clone(),
                    password: None,
                    role_id: role.id,
                },
            )
            .await
            .unwrap();

        let stored = AdminUserRepository::new(db)
            .find_by_login(&user.login)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.password_hash, user.password_hash);
    }
}
