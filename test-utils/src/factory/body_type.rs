use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test body types.
pub struct BodyTypeFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    image_path: Option<String>,
}

impl<'a> BodyTypeFactory<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Body Type {}", next_id()),
            image_path: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn image_path(mut self, image_path: Option<String>) -> Self {
        self.image_path = image_path;
        self
    }

    pub async fn build(self) -> Result<entity::body_type::Model, DbErr> {
        let now = Utc::now();
        entity::body_type::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            image_path: ActiveValue::Set(self.image_path),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a body type with default values.
pub async fn create_body_type(db: &DatabaseConnection) -> Result<entity::body_type::Model, DbErr> {
    BodyTypeFactory::new(db).build().await
}
