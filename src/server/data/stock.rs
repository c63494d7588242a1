//! Dealer stock writes.
//!
//! Reads and status changes of stock entries go through the listing repository like
//! every other listing kind.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

use crate::server::model::listing::StockParams;

fn not_found(id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("stock {} not found", id))
}

pub struct StockRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StockRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: StockParams) -> Result<entity::stock::Model, DbErr> {
        let now = Utc::now();
        entity::stock::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(params.user_id),
            status: ActiveValue::Set(params.status.as_str().to_string()),
            store_name: ActiveValue::Set(params.store_name),
            phone_number: ActiveValue::Set(params.phone_number),
            email: ActiveValue::Set(params.email),
            address: ActiveValue::Set(params.address),
            region_id: ActiveValue::Set(params.region_id),
            city_id: ActiveValue::Set(params.city_id),
            description: ActiveValue::Set(params.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }

    /// Overwrites every column except the status and creation time.
    pub async fn update(
        &self,
        id: i32,
        params: StockParams,
    ) -> Result<entity::stock::Model, DbErr> {
        let existing = entity::stock::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| not_found(id))?;

        let mut stock: entity::stock::ActiveModel = existing.into();
        stock.user_id = ActiveValue::Set(params.user_id);
        stock.store_name = ActiveValue::Set(params.store_name);
        stock.phone_number = ActiveValue::Set(params.phone_number);
        stock.email = ActiveValue::Set(params.email);
        stock.address = ActiveValue::Set(params.address);
        stock.region_id = ActiveValue::Set(params.region_id);
        stock.city_id = ActiveValue::Set(params.city_id);
        stock.description = ActiveValue::Set(params.description);
        stock.updated_at = ActiveValue::Set(Utc::now());
        stock.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::stock::Entity::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}
