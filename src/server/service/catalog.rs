//! Brands, models and body types, each tagged with vehicle categories.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::catalog::{
        body_type::BodyTypeRepository, brand::BrandRepository,
        brand_model::BrandModelRepository,
    },
    error::AppError,
    model::{
        catalog::{
            BodyType, BodyTypeParams, Brand, BrandModel, BrandModelParams, BrandParams,
            CategoryQuery,
        },
        category::VehicleCategory,
        page::Page,
    },
};

pub struct BrandService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrandService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a brand with its categories; nothing is stored if any write fails.
    pub async fn create(&self, params: BrandParams) -> Result<Brand, AppError> {
        let brand = BrandRepository::new(self.db).create(params).await?;

        tracing::info!(brand_id = brand.id, "Brand created");

        Ok(brand)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Brand, AppError> {
        BrandRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Brand {} not found", id)))
    }

    pub async fn get_by_category(&self, query: &CategoryQuery) -> Result<Page<Brand>, AppError> {
        Ok(BrandRepository::new(self.db)
            .get_by_category_paginated(query)
            .await?)
    }

    /// Updates columns and replaces the whole category set in one transaction.
    pub async fn update(&self, id: i32, params: BrandParams) -> Result<Brand, AppError> {
        Ok(BrandRepository::new(self.db).update(id, params).await?)
    }

    /// Removes one category from a brand. Returns the number of removed rows (0 or 1).
    pub async fn delete_category(
        &self,
        id: i32,
        category: VehicleCategory,
    ) -> Result<u64, AppError> {
        Ok(BrandRepository::new(self.db)
            .delete_category(id, category)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        BrandRepository::new(self.db).delete(id).await?;

        tracing::info!(brand_id = id, "Brand deleted");

        Ok(())
    }
}

pub struct BrandModelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrandModelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: BrandModelParams) -> Result<BrandModel, AppError> {
        let model = BrandModelRepository::new(self.db).create(params).await?;

        tracing::info!(model_id = model.id, brand_id = model.brand_id, "Model created");

        Ok(model)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<BrandModel, AppError> {
        BrandModelRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Model {} not found", id)))
    }

    pub async fn get_by_category(
        &self,
        query: &CategoryQuery,
    ) -> Result<Page<BrandModel>, AppError> {
        Ok(BrandModelRepository::new(self.db)
            .get_by_category_paginated(query)
            .await?)
    }

    pub async fn update(&self, id: i32, params: BrandModelParams) -> Result<BrandModel, AppError> {
        Ok(BrandModelRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete_category(
        &self,
        id: i32,
        category: VehicleCategory,
    ) -> Result<u64, AppError> {
        Ok(BrandModelRepository::new(self.db)
            .delete_category(id, category)
            .await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        BrandModelRepository::new(self.db).delete(id).await?;

        tracing::info!(model_id = id, "Model deleted");

        Ok(())
    }
}

pub struct BodyTypeService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BodyTypeService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: BodyTypeParams) -> Result<BodyType, AppError> {
        let body_type = BodyTypeRepository::new(self.db).create(params).await?;

        tracing::info!(body_type_id = body_type.id, "Body type created");

        Ok(body_type)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<BodyType, AppError> {
        BodyTypeRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Body type {} not found", id)))
    }

    pub async fn get_by_category(
        &self,
        query: &CategoryQuery,
    ) -> Result<Page<BodyType>, AppError> {
        Ok(BodyTypeRepository::new(self.db)
            .get_by_category_paginated(query)
            .await?)
    }

    pub async fn update(&self, id: i32, params: BodyTypeParams) -> Result<BodyType, AppError> {
        Ok(BodyTypeRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete_category(
        &self,
        id: i32,
        category: VehicleCategory,
    ) -> Result<u64, AppError> {
        Ok(BodyTypeRepository::new(self.db)
            .delete_category(id, category)
            .await?)
    }

    /// Deletes a body type; models that used it keep existing without one.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        BodyTypeRepository::new(self.db).delete(id).await?;

        tracing::info!(body_type_id = id, "Body type deleted");

        Ok(())
    }
}
