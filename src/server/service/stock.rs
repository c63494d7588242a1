use sea_orm::DatabaseConnection;

use crate::server::{data::stock::StockRepository, error::AppError, model::listing::StockParams};

pub struct StockService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StockService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: StockParams) -> Result<entity::stock::Model, AppError> {
        let stock = StockRepository::new(self.db).create(params).await?;

        tracing::info!(stock_id = stock.id, user_id = stock.user_id, "Created stock entry");

        Ok(stock)
    }

    pub async fn update(
        &self,
        id: i32,
        params: StockParams,
    ) -> Result<entity::stock::Model, AppError> {
        Ok(StockRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        StockRepository::new(self.db).delete(id).await?;

        tracing::info!(stock_id = id, "Deleted stock entry");

        Ok(())
    }
}
