//! Listing factories for cars, motos, trucks and dealer stock.
//!
//! Listings are owned by users of the public marketplace, so every factory takes
//! an owner `user_id` (default `1`) and an initial `status` (default `pending`).

use crate::fixture;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test car listings.
///
/// # Example
///
/// ```rust,ignore
/// let car = CarFactory::new(&db).user_id(42).status("pending").build().await?;
/// ```
pub struct CarFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::car::Model,
}

impl<'a> CarFactory<'a> {
    /// Creates a new CarFactory with default values from fixture.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            entity: fixture::car::entity(),
        }
    }

    /// Sets the owner user ID.
    pub fn user_id(mut self, user_id: i64) -> Self {
        self.entity.user_id = user_id;
        self
    }

    /// Sets the moderation status label.
    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    /// Sets the asking price.
    pub fn price(mut self, price: i64) -> Self {
        self.entity.price = price;
        self
    }

    /// Sets the free-text description.
    pub fn description(mut self, description: Option<String>) -> Self {
        self.entity.description = description;
        self
    }

    /// Builds and inserts the car entity into the database.
    pub async fn build(self) -> Result<entity::car::Model, DbErr> {
        entity::car::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(self.entity.user_id),
            status: ActiveValue::Set(self.entity.status),
            brand_id: ActiveValue::Set(self.entity.brand_id),
            model_id: ActiveValue::Set(self.entity.model_id),
            year: ActiveValue::Set(self.entity.year),
            price: ActiveValue::Set(self.entity.price),
            vin: ActiveValue::Set(self.entity.vin),
            description: ActiveValue::Set(self.entity.description),
            created_at: ActiveValue::Set(self.entity.created_at),
            updated_at: ActiveValue::Set(self.entity.updated_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a pending car owned by `user_id`.
pub async fn create_car(
    db: &DatabaseConnection,
    user_id: i64,
) -> Result<entity::car::Model, DbErr> {
    CarFactory::new(db).user_id(user_id).build().await
}

/// Creates a moto listing with the given owner and status.
pub async fn create_moto(
    db: &DatabaseConnection,
    user_id: i64,
    status: &str,
) -> Result<entity::moto::Model, DbErr> {
    let now = Utc::now();
    entity::moto::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        status: ActiveValue::Set(status.to_string()),
        brand_id: ActiveValue::Set(None),
        model_id: ActiveValue::Set(None),
        year: ActiveValue::Set(2019),
        price: ActiveValue::Set(4_500),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}

/// Creates a truck listing with the given owner and status.
pub async fn create_truck(
    db: &DatabaseConnection,
    user_id: i64,
    status: &str,
) -> Result<entity::truck::Model, DbErr> {
    let now = Utc::now();
    entity::truck::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        status: ActiveValue::Set(status.to_string()),
        brand_id: ActiveValue::Set(None),
        model_id: ActiveValue::Set(None),
        year: ActiveValue::Set(2015),
        price: ActiveValue::Set(38_000),
        load_capacity: ActiveValue::Set(Some(12_000)),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}

/// Creates a dealer stock listing with the given owner and status.
pub async fn create_stock(
    db: &DatabaseConnection,
    user_id: i64,
    status: &str,
) -> Result<entity::stock::Model, DbErr> {
    let now = Utc::now();
    entity::stock::ActiveModel {
        id: ActiveValue::NotSet,
        user_id: ActiveValue::Set(user_id),
        status: ActiveValue::Set(status.to_string()),
        store_name: ActiveValue::Set("Ashgabat Motors".to_string()),
        phone_number: ActiveValue::Set("+99361000000".to_string()),
        email: ActiveValue::Set(None),
        address: ActiveValue::Set("Magtymguly ave. 1".to_string()),
        region_id: ActiveValue::Set(None),
        city_id: ActiveValue::Set(None),
        description: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_car_with_owner_and_status() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_listing_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let car = CarFactory::new(db)
            .user_id(7)
            .status("blocked")
            .build()
            .await?;

        assert_eq!(car.user_id, 7);
        assert_eq!(car.status, "blocked");

        Ok(())
    }
}
