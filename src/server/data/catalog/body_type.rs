use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    DatabaseTransaction, DbErr, EntityTrait, QueryFilter, TransactionTrait,
};

use crate::server::{
    data::{
        catalog::{delete_tagged, find_tagged, list_by_category, not_found},
        finish,
        tag::CategoryTagRepository,
    },
    model::{
        catalog::{BodyType, BodyTypeParams, CategoryQuery},
        category::{TaggableKind, VehicleCategory},
        page::Page,
    },
};

pub struct BodyTypeRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BodyTypeRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a body type and its category tags in one transaction.
    pub async fn create(&self, params: BodyTypeParams) -> Result<BodyType, DbErr> {
        let txn = self.db.begin().await?;
        let result = Self::insert_with_tags(&txn, params).await;
        finish(txn, result).await
    }

    async fn insert_with_tags(
        txn: &DatabaseTransaction,
        params: BodyTypeParams,
    ) -> Result<BodyType, DbErr> {
        let now = Utc::now();
        let body_type = entity::body_type::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            image_path: ActiveValue::Set(params.image_path),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(txn)
        .await?;

        CategoryTagRepository::new(txn)
            .insert(TaggableKind::BodyType, body_type.id, &params.categories)
            .await?;

        Ok(BodyType::from_entity(body_type, params.categories.sorted()))
    }

    /// Updates a body type and replaces its category set in one transaction.
    pub async fn update(&self, id: i32, params: BodyTypeParams) -> Result<BodyType, DbErr> {
        let txn = self.db.begin().await?;
        let result = Self::update_with_tags(&txn, id, params).await;
        finish(txn, result).await
    }

    async fn update_with_tags(
        txn: &DatabaseTransaction,
        id: i32,
        params: BodyTypeParams,
    ) -> Result<BodyType, DbErr> {
        let existing = entity::body_type::Entity::find_by_id(id)
            .one(txn)
            .await?
            .ok_or_else(|| not_found::<entity::body_type::Entity>(id))?;

        let mut body_type: entity::body_type::ActiveModel = existing.into();
        body_type.name = ActiveValue::Set(params.name);
        body_type.image_path = ActiveValue::Set(params.image_path);
        body_type.updated_at = ActiveValue::Set(Utc::now());
        let body_type = body_type.update(txn).await?;

        CategoryTagRepository::new(txn)
            .replace(TaggableKind::BodyType, id, &params.categories)
            .await?;

        Ok(BodyType::from_entity(body_type, params.categories.sorted()))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<BodyType>, DbErr> {
        let found = find_tagged::<entity::body_type::Entity, _>(self.db, id).await?;

        Ok(found.map(|(body_type, categories)| BodyType::from_entity(body_type, categories)))
    }

    pub async fn get_by_category_paginated(
        &self,
        query: &CategoryQuery,
    ) -> Result<Page<BodyType>, DbErr> {
        let page = list_by_category::<entity::body_type::Entity, _>(self.db, query).await?;

        Ok(page.map(|(body_type, categories)| BodyType::from_entity(body_type, categories)))
    }

    pub async fn delete_category(&self, id: i32, category: VehicleCategory) -> Result<u64, DbErr> {
        CategoryTagRepository::new(self.db)
            .delete_one(TaggableKind::BodyType, id, category)
            .await
    }

    /// Deletes a body type and its tags. Models using it keep existing without a body type.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;
        let result = Self::delete_detaching_models(&txn, id).await;
        finish(txn, result).await
    }

    async fn delete_detaching_models(txn: &DatabaseTransaction, id: i32) -> Result<(), DbErr> {
        entity::brand_model::Entity::update_many()
            .col_expr(
                entity::brand_model::Column::BodyTypeId,
                Expr::value(Option::<i32>::None),
            )
            .filter(entity::brand_model::Column::BodyTypeId.eq(id))
            .exec(txn)
            .await?;

        delete_tagged::<entity::body_type::Entity, _>(txn, id).await
    }
}
