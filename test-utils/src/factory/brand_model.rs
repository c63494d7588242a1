use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test brand models belonging to an existing brand.
pub struct BrandModelFactory<'a> {
    db: &'a DatabaseConnection,
    brand_id: i32,
    body_type_id: Option<i32>,
    name: String,
}

impl<'a> BrandModelFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, brand_id: i32) -> Self {
        Self {
            db,
            brand_id,
            body_type_id: None,
            name: format!("Model {}", next_id()),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn body_type_id(mut self, body_type_id: Option<i32>) -> Self {
        self.body_type_id = body_type_id;
        self
    }

    pub async fn build(self) -> Result<entity::brand_model::Model, DbErr> {
        let now = Utc::now();
        entity::brand_model::ActiveModel {
            id: ActiveValue::NotSet,
            brand_id: ActiveValue::Set(self.brand_id),
            body_type_id: ActiveValue::Set(self.body_type_id),
            name: ActiveValue::Set(self.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a model with default values for the given brand.
pub async fn create_brand_model(
    db: &DatabaseConnection,
    brand_id: i32,
) -> Result<entity::brand_model::Model, DbErr> {
    BrandModelFactory::new(db, brand_id).build().await
}
