use sea_orm::DatabaseConnection;

use crate::server::{
    data::location::{CityRepository, RegionRepository},
    error::AppError,
    model::{
        location::{CityParams, RegionParams},
        page::Page,
    },
};

pub struct RegionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: RegionParams) -> Result<entity::region::Model, AppError> {
        Ok(RegionRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<entity::region::Model, AppError> {
        RegionRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Region {} not found", id)))
    }

    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<entity::region::Model>, AppError> {
        Ok(RegionRepository::new(self.db)
            .get_paginated(search, page, per_page)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: RegionParams,
    ) -> Result<entity::region::Model, AppError> {
        Ok(RegionRepository::new(self.db).update(id, params).await?)
    }

    /// Deletes the region together with its cities.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(RegionRepository::new(self.db).delete(id).await?)
    }
}

pub struct CityService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CityParams) -> Result<entity::city::Model, AppError> {
        Ok(CityRepository::new(self.db).create(params).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<entity::city::Model, AppError> {
        CityRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("City {} not found", id)))
    }

    pub async fn get_paginated(
        &self,
        region_id: Option<i32>,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<entity::city::Model>, AppError> {
        Ok(CityRepository::new(self.db)
            .get_paginated(region_id, search, page, per_page)
            .await?)
    }

    pub async fn update(
        &self,
        id: i32,
        params: CityParams,
    ) -> Result<entity::city::Model, AppError> {
        Ok(CityRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        Ok(CityRepository::new(self.db).delete(id).await?)
    }
}
