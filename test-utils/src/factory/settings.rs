use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a role with an empty permission document.
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::role::Model, DbErr> {
    entity::role::ActiveModel {
        id: ActiveValue::NotSet,
        name: ActiveValue::Set(format!("role_{}", next_id())),
        permissions: ActiveValue::Set(serde_json::json!({})),
    }
    .insert(db)
    .await
}

/// Creates an admin user for the given role.
///
/// The stored hash is a placeholder and will not verify against any password.
pub async fn create_admin_user(
    db: &DatabaseConnection,
    role_id: i32,
) -> Result<entity::admin_user::Model, DbErr> {
    let id = next_id();
    entity::admin_user::ActiveModel {
        id: ActiveValue::NotSet,
        username: ActiveValue::Set(format!("Admin {}", id)),
        login: ActiveValue::Set(format!("admin{}", id)),
        password_hash: ActiveValue::Set("not-a-hash".to_string()),
        role_id: ActiveValue::Set(role_id),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
