//! Raw category tag rows.
//!
//! Bypasses the repositories so tests can seed arbitrary (including stale) tag state.

use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};

/// Inserts one tag row per label for the given entity.
///
/// # Arguments
/// - `db` - Database connection
/// - `entity_kind` - `brand`, `model` or `body_type`
/// - `entity_id` - ID of the tagged entity
/// - `categories` - Category labels to insert
pub async fn tag(
    db: &DatabaseConnection,
    entity_kind: &str,
    entity_id: i32,
    categories: &[&str],
) -> Result<(), DbErr> {
    if categories.is_empty() {
        return Ok(());
    }

    let rows = categories
        .iter()
        .map(|category| entity::category_tag::ActiveModel {
            entity_kind: ActiveValue::Set(entity_kind.to_string()),
            entity_id: ActiveValue::Set(entity_id),
            category: ActiveValue::Set(category.to_string()),
        });

    entity::category_tag::Entity::insert_many(rows)
        .exec_without_returning(db)
        .await?;

    Ok(())
}

/// Returns the category labels stored for an entity, sorted alphabetically.
pub async fn labels(
    db: &DatabaseConnection,
    entity_kind: &str,
    entity_id: i32,
) -> Result<Vec<String>, DbErr> {
    let rows = entity::category_tag::Entity::find()
        .filter(entity::category_tag::Column::EntityKind.eq(entity_kind))
        .filter(entity::category_tag::Column::EntityId.eq(entity_id))
        .order_by_asc(entity::category_tag::Column::Category)
        .all(db)
        .await?;

    Ok(rows.into_iter().map(|row| row.category).collect())
}
