use sea_orm::DatabaseConnection;

use crate::server::{
    data::slider::SliderRepository,
    error::AppError,
    model::{
        page::Page,
        slider::{SliderFilter, SliderParams},
    },
};

pub struct SliderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SliderService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SliderParams) -> Result<entity::slider::Model, AppError> {
        Ok(SliderRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<entity::slider::Model, AppError> {
        SliderRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Slider {} not found", id)))
    }

    pub async fn get_paginated(
        &self,
        filter: &SliderFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<entity::slider::Model>, AppError> {
        Ok(SliderRepository::new(self.db)
            .get_paginated(filter, page, per_page)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: SliderParams,
    ) -> Result<entity::slider::Model, AppError> {
        Ok(SliderRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(SliderRepository::new(self.db).delete(id).await?)
    }
}
