use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DatabaseTransaction, DbErr, EntityTrait,
    TransactionTrait,
};

use crate::server::{
    data::{
        catalog::{delete_tagged, find_tagged, list_by_category, not_found},
        finish,
        tag::CategoryTagRepository,
    },
    model::{
        catalog::{BrandModel, BrandModelParams, CategoryQuery},
        category::{TaggableKind, VehicleCategory},
        page::Page,
    },
};

pub struct BrandModelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrandModelRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Rejects references to a missing brand or body type inside the transaction.
    async fn check_references(
        txn: &DatabaseTransaction,
        params: &BrandModelParams,
    ) -> Result<(), DbErr> {
        if entity::brand::Entity::find_by_id(params.brand_id)
            .one(txn)
            .await?
            .is_none()
        {
            return Err(not_found::<entity::brand::Entity>(params.brand_id));
        }

        if let Some(body_type_id) = params.body_type_id {
            if entity::body_type::Entity::find_by_id(body_type_id)
                .one(txn)
                .await?
                .is_none()
            {
                return Err(not_found::<entity::body_type::Entity>(body_type_id));
            }
        }

        Ok(())
    }

    /// Creates a model and its category tags in one transaction.
    pub async fn create(&self, params: BrandModelParams) -> Result<BrandModel, DbErr> {
        let txn = self.db.begin().await?;
        let result = Self::insert_with_tags(&txn, params).await;
        finish(txn, result).await
    }

    async fn insert_with_tags(
        txn: &DatabaseTransaction,
        params: BrandModelParams,
    ) -> Result<BrandModel, DbErr> {
        Self::check_references(txn, &params).await?;

        let now = Utc::now();
        let model = entity::brand_model::ActiveModel {
            id: ActiveValue::NotSet,
            brand_id: ActiveValue::Set(params.brand_id),
            body_type_id: ActiveValue::Set(params.body_type_id),
            name: ActiveValue::Set(params.name),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(txn)
        .await?;

        CategoryTagRepository::new(txn)
            .insert(TaggableKind::Model, model.id, &params.categories)
            .await?;

        Ok(BrandModel::from_entity(model, params.categories.sorted()))
    }

    /// Updates a model and replaces its category set in one transaction.
    pub async fn update(&self, id: i32, params: BrandModelParams) -> Result<BrandModel, DbErr> {
        let txn = self.db.begin().await?;
        let result = Self::update_with_tags(&txn, id, params).await;
        finish(txn, result).await
    }

    async fn update_with_tags(
        txn: &DatabaseTransaction,
        id: i32,
        params: BrandModelParams,
    ) -> Result<BrandModel, DbErr> {
        let existing = entity::brand_model::Entity::find_by_id(id)
            .one(txn)
            .await?
            .ok_or_else(|| not_found::<entity::brand_model::Entity>(id))?;

        Self::check_references(txn, &params).await?;

        let mut model: entity::brand_model::ActiveModel = existing.into();
        model.brand_id = ActiveValue::Set(params.brand_id);
        model.body_type_id = ActiveValue::Set(params.body_type_id);
        model.name = ActiveValue::Set(params.name);
        model.updated_at = ActiveValue::Set(Utc::now());
        let model = model.update(txn).await?;

        CategoryTagRepository::new(txn)
            .replace(TaggableKind::Model, id, &params.categories)
            .await?;

        Ok(BrandModel::from_entity(model, params.categories.sorted()))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<BrandModel>, DbErr> {
        let found = find_tagged::<entity::brand_model::Entity, _>(self.db, id).await?;

        Ok(found.map(|(model, categories)| BrandModel::from_entity(model, categories)))
    }

    pub async fn get_by_category_paginated(
        &self,
        query: &CategoryQuery,
    ) -> Result<Page<BrandModel>, DbErr> {
        let page = list_by_category::<entity::brand_model::Entity, _>(self.db, query).await?;

        Ok(page.map(|(model, categories)| BrandModel::from_entity(model, categories)))
    }

    pub async fn delete_category(&self, id: i32, category: VehicleCategory) -> Result<u64, DbErr> {
        CategoryTagRepository::new(self.db)
            .delete_one(TaggableKind::Model, id, category)
            .await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;
        let result = delete_tagged::<entity::brand_model::Entity, _>(&txn, id).await;
        finish(txn, result).await
    }
}
