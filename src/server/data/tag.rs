//! Category tag rows shared by brands, models and body types.
//!
//! The repository is generic over the connection so the catalog repositories can run it
//! inside their own transaction.

use std::collections::HashMap;

use entity::category_tag;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter,
};

use crate::server::model::category::{CategorySet, TaggableKind, VehicleCategory};

pub struct CategoryTagRepository<'a, C: ConnectionTrait> {
    conn: &'a C,
}

impl<'a, C: ConnectionTrait> CategoryTagRepository<'a, C> {
    pub fn new(conn: &'a C) -> Self {
        Self { conn }
    }

    /// Inserts one row per category for the entity.
    ///
    /// Fails on a row that already exists, so callers replacing a set must
    /// delete first.
    pub async fn insert(
        &self,
        kind: TaggableKind,
        entity_id: i32,
        categories: &CategorySet,
    ) -> Result<(), DbErr> {
        for category in categories.iter() {
            category_tag::ActiveModel {
                entity_kind: ActiveValue::Set(kind.as_str().to_string()),
                entity_id: ActiveValue::Set(entity_id),
                category: ActiveValue::Set(category.as_str().to_string()),
            }
            .insert(self.conn)
            .await?;
        }

        Ok(())
    }

    /// Replaces the entity's tag set: delete every existing row, then insert `categories`.
    ///
    /// Must run inside a transaction; between the two statements the entity has no tags.
    pub async fn replace(
        &self,
        kind: TaggableKind,
        entity_id: i32,
        categories: &CategorySet,
    ) -> Result<(), DbErr> {
        self.delete_all(kind, entity_id).await?;
        self.insert(kind, entity_id, categories).await
    }

    /// Deletes every tag row of one entity.
    pub async fn delete_all(&self, kind: TaggableKind, entity_id: i32) -> Result<u64, DbErr> {
        self.delete_all_many(kind, &[entity_id]).await
    }

    /// Deletes every tag row of several entities of the same kind.
    pub async fn delete_all_many(
        &self,
        kind: TaggableKind,
        entity_ids: &[i32],
    ) -> Result<u64, DbErr> {
        if entity_ids.is_empty() {
            return Ok(0);
        }

        let result = category_tag::Entity::delete_many()
            .filter(category_tag::Column::EntityKind.eq(kind.as_str()))
            .filter(category_tag::Column::EntityId.is_in(entity_ids.iter().copied()))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Deletes a single `(kind, id, category)` row.
    ///
    /// Returns the number of rows removed; 0 when the tag was already absent.
    pub async fn delete_one(
        &self,
        kind: TaggableKind,
        entity_id: i32,
        category: VehicleCategory,
    ) -> Result<u64, DbErr> {
        let result = category_tag::Entity::delete_many()
            .filter(category_tag::Column::EntityKind.eq(kind.as_str()))
            .filter(category_tag::Column::EntityId.eq(entity_id))
            .filter(category_tag::Column::Category.eq(category.as_str()))
            .exec(self.conn)
            .await?;

        Ok(result.rows_affected)
    }

    /// Gets the sorted category list of one entity.
    pub async fn categories_of(
        &self,
        kind: TaggableKind,
        entity_id: i32,
    ) -> Result<Vec<VehicleCategory>, DbErr> {
        let mut grouped = self.categories_for(kind, &[entity_id]).await?;

        Ok(grouped.remove(&entity_id).unwrap_or_default())
    }

    /// Gets sorted category lists for several entities in one query.
    ///
    /// Entities without tag rows are absent from the map.
    pub async fn categories_for(
        &self,
        kind: TaggableKind,
        entity_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<VehicleCategory>>, DbErr> {
        let mut grouped: HashMap<i32, Vec<VehicleCategory>> = HashMap::new();
        if entity_ids.is_empty() {
            return Ok(grouped);
        }

        let rows = category_tag::Entity::find()
            .filter(category_tag::Column::EntityKind.eq(kind.as_str()))
            .filter(category_tag::Column::EntityId.is_in(entity_ids.iter().copied()))
            .all(self.conn)
            .await?;

        for row in rows {
            let category = row.category.parse::<VehicleCategory>().map_err(|e| {
                DbErr::Custom(format!(
                    "Invalid stored category for {} {}: {}",
                    kind, row.entity_id, e
                ))
            })?;
            grouped.entry(row.entity_id).or_default().push(category);
        }

        for categories in grouped.values_mut() {
            categories.sort();
        }

        Ok(grouped)
    }
}
