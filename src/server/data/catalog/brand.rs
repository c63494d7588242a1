use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DatabaseTransaction, DbErr,
    EntityTrait, QueryFilter, QuerySelect, TransactionTrait,
};

use crate::server::{
    data::{
        catalog::{delete_tagged, find_tagged, list_by_category, not_found},
        finish,
        tag::CategoryTagRepository,
    },
    model::{
        catalog::{Brand, BrandParams, CategoryQuery},
        category::{TaggableKind, VehicleCategory},
        page::Page,
    },
};

pub struct BrandRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BrandRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a brand and its category tags in one transaction.
    ///
    /// If any tag insert fails, neither the brand nor any tag row is persisted.
    ///
    /// # Returns
    /// - `Ok(Brand)` - The created brand with its categories
    /// - `Err(DbErr)` - Database error; the transaction was rolled back
    pub async fn create(&self, params: BrandParams) -> Result<Brand, DbErr> {
        let txn = self.db.begin().await?;
        let result = Self::insert_with_tags(&txn, params).await;
        finish(txn, result).await
    }

    async fn insert_with_tags(
        txn: &DatabaseTransaction,
        params: BrandParams,
    ) -> Result<Brand, DbErr> {
        let now = Utc::now();
        let brand = entity::brand::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            logo_path: ActiveValue::Set(params.logo_path),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(txn)
        .await?;

        CategoryTagRepository::new(txn)
            .insert(TaggableKind::Brand, brand.id, &params.categories)
            .await?;

        Ok(Brand::from_entity(brand, params.categories.sorted()))
    }

    /// Updates a brand's columns and replaces its whole category set in one transaction.
    ///
    /// # Returns
    /// - `Ok(Brand)` - The updated brand with exactly the supplied categories
    /// - `Err(DbErr::RecordNotFound)` - No brand with this ID; nothing was changed
    /// - `Err(DbErr)` - Other database error; the transaction was rolled back
    pub async fn update(&self, id: i32, params: BrandParams) -> Result<Brand, DbErr> {
        let txn = self.db.begin().await?;
        let result = Self::update_with_tags(&txn, id, params).await;
        finish(txn, result).await
    }

    async fn update_with_tags(
        txn: &DatabaseTransaction,
        id: i32,
        params: BrandParams,
    ) -> Result<Brand, DbErr> {
        let existing = entity::brand::Entity::find_by_id(id)
            .one(txn)
            .await?
            .ok_or_else(|| not_found::<entity::brand::Entity>(id))?;

        let mut brand: entity::brand::ActiveModel = existing.into();
        brand.name = ActiveValue::Set(params.name);
        brand.logo_path = ActiveValue::Set(params.logo_path);
        brand.updated_at = ActiveValue::Set(Utc::now());
        let brand = brand.update(txn).await?;

        CategoryTagRepository::new(txn)
            .replace(TaggableKind::Brand, id, &params.categories)
            .await?;

        Ok(Brand::from_entity(brand, params.categories.sorted()))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Brand>, DbErr> {
        let found = find_tagged::<entity::brand::Entity, _>(self.db, id).await?;

        Ok(found.map(|(brand, categories)| Brand::from_entity(brand, categories)))
    }

    /// Gets brands tagged with a category, optionally filtered by name.
    pub async fn get_by_category_paginated(
        &self,
        query: &CategoryQuery,
    ) -> Result<Page<Brand>, DbErr> {
        let page = list_by_category::<entity::brand::Entity, _>(self.db, query).await?;

        Ok(page.map(|(brand, categories)| Brand::from_entity(brand, categories)))
    }

    /// Removes one category from a brand. Deleting an absent tag is a no-op.
    pub async fn delete_category(&self, id: i32, category: VehicleCategory) -> Result<u64, DbErr> {
        CategoryTagRepository::new(self.db)
            .delete_one(TaggableKind::Brand, id, category)
            .await
    }

    /// Deletes a brand, its models and every tag row they own in one transaction.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;
        let result = Self::delete_with_models(&txn, id).await;
        finish(txn, result).await
    }

    async fn delete_with_models(txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr> {
        let model_ids: Vec<i32> = entity::brand_model::Entity::find()
            .select_only()
            .column(entity::brand_model::Column::Id)
            .filter(entity::brand_model::Column::BrandId.eq(id))
            .into_tuple()
            .all(txn)
            .await?;

        CategoryTagRepository::new(txn)
            .delete_all_many(TaggableKind::Model, &model_ids)
            .await?;
        entity::brand_model::Entity::delete_many()
            .filter(entity::brand_model::Column::BrandId.eq(id))
            .exec(txn)
            .await?;

        delete_tagged::<entity::brand::Entity, _>(txn, id).await
    }
}
