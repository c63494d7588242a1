//! Brand factory for creating test brand entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test brands with customizable fields.
///
/// Defaults are sourced from the brand fixture with a unique name per instance.
/// Only the brand row is inserted; use `category_tag::tag` to attach categories.
///
/// # Example
///
/// ```rust,ignore
/// let brand = BrandFactory::new(&db)
///     .name("Toyota")
///     .created_at(Utc::now() - Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct BrandFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::brand::Model,
}

impl<'a> BrandFactory<'a> {
    /// Creates a new BrandFactory with default values from fixture.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::brand::entity_builder()
            .name(format!("Brand {}", id))
            .build();

        Self { db, entity }
    }

    /// Sets the brand name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the logo path.
    pub fn logo_path(mut self, logo_path: Option<String>) -> Self {
        self.entity.logo_path = logo_path;
        self
    }

    /// Sets the creation timestamp, which drives newest-first ordering.
    pub fn created_at(mut self, created_at: chrono::DateTime<chrono::Utc>) -> Self {
        self.entity.created_at = created_at;
        self.entity.updated_at = created_at;
        self
    }

    /// Builds and inserts the brand entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::brand::Model)` - Created brand entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::brand::Model, DbErr> {
        entity::brand::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.entity.name),
            logo_path: ActiveValue::Set(self.entity.logo_path),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a brand with default values.
///
/// Shorthand for `BrandFactory::new(db).build().await`.
pub async fn create_brand(db: &DatabaseConnection) -> Result<entity::brand::Model, DbErr> {
    BrandFactory::new(db).build().await
}
