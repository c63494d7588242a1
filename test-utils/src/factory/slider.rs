use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a slider for the given platform.
pub async fn create_slider(
    db: &DatabaseConnection,
    platform: &str,
) -> Result<entity::slider::Model, DbErr> {
    let id = next_id();
    entity::slider::ActiveModel {
        id: ActiveValue::NotSet,
        title: ActiveValue::Set(format!("Slider {}", id)),
        image_path: ActiveValue::Set(format!("uploads/sliders/{}.webp", id)),
        platform: ActiveValue::Set(platform.to_string()),
        created_at: ActiveValue::Set(Utc::now()),
    }
    .insert(db)
    .await
}
