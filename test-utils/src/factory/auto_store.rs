use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{prelude::Json, ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a store owned by `user_id` with no location and no images.
pub async fn create_auto_store(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::auto_store::Model, DbErr> {
    let id = next_id();
    let now = Utc::now();
    entity::auto_store::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        store_name: ActiveValue::Set(format!("Store {}", id)),
        phone_number: ActiveValue::Set(format!("+9936{:07}", id)),
        email: ActiveValue::Set(None),
        address: ActiveValue::Set(None),
        logo_path: ActiveValue::Set(None),
        images: ActiveValue::Set(Json::Array(Vec::new())),
        region_id: ActiveValue::Set(None),
        city_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
