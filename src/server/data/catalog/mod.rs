//! Transactional repositories for the tagged catalog: brands, models and body types.
//!
//! Every create and update writes the entity row and its full tag set in one
//! transaction. The shared read and delete paths are generic over [`TaggableTable`].

pub mod body_type;
pub mod brand;
pub mod brand_model;

use sea_orm::{
    sea_query::Query, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder,
};

use entity::category_tag;

use crate::server::{
    data::{contains_ignore_case, page_size, tag::CategoryTagRepository},
    model::{
        catalog::CategoryQuery,
        category::{TaggableKind, VehicleCategory},
        page::Page,
    },
};

/// A catalog table whose rows carry category tags.
pub trait TaggableTable: EntityTrait {
    const KIND: TaggableKind;

    fn id_column() -> Self::Column;
    fn name_column() -> Self::Column;
    fn created_at_column() -> Self::Column;
    fn model_id(model: &Self::Model) -> i32;
}

impl TaggableTable for entity::brand::Entity {
    const KIND: TaggableKind = TaggableKind::Brand;

    fn id_column() -> Self::Column {
        entity::brand::Column::Id
    }
    fn name_column() -> Self::Column {
        entity::brand::Column::Name
    }
    fn created_at_column() -> Self::Column {
        entity::brand::Column::CreatedAt
    }
    fn model_id(model: &Self::Model) -> i32 {
        model.id
    }
}

impl TaggableTable for entity::brand_model::Entity {
    const KIND: TaggableKind = TaggableKind::Model;

    fn id_column() -> Self::Column {
        entity::brand_model::Column::Id
    }
    fn name_column() -> Self::Column {
        entity::brand_model::Column::Name
    }
    fn created_at_column() -> Self::Column {
        entity::brand_model::Column::CreatedAt
    }
    fn model_id(model: &Self::Model) -> i32 {
        model.id
    }
}

impl TaggableTable for entity::body_type::Entity {
    const KIND: TaggableKind = TaggableKind::BodyType;

    fn id_column() -> Self::Column {
        entity::body_type::Column::Id
    }
    fn name_column() -> Self::Column {
        entity::body_type::Column::Name
    }
    fn created_at_column() -> Self::Column {
        entity::body_type::Column::CreatedAt
    }
    fn model_id(model: &Self::Model) -> i32 {
        model.id
    }
}

fn not_found<E: TaggableTable>(id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("{} {} not found", E::KIND, id))
}

/// Loads one entity together with its categories.
pub(crate) async fn find_tagged<E, C>(
    conn: &C,
    id: i32,
) -> Result<Option<(E::Model, Vec<VehicleCategory>)>, DbErr>
where
    E: TaggableTable,
    C: ConnectionTrait,
{
    let Some(model) = E::find().filter(E::id_column().eq(id)).one(conn).await? else {
        return Ok(None);
    };

    let categories = CategoryTagRepository::new(conn)
        .categories_of(E::KIND, id)
        .await?;

    Ok(Some((model, categories)))
}

/// Gets one page of entities tagged with `query.category`, newest first.
///
/// Each entity is returned with its full category set, gathered with a single
/// follow-up query over the page's IDs.
pub(crate) async fn list_by_category<E, C>(
    conn: &C,
    query: &CategoryQuery,
) -> Result<Page<(E::Model, Vec<VehicleCategory>)>, DbErr>
where
    E: TaggableTable,
    E::Model: Send + Sync,
    C: ConnectionTrait,
{
    let per_page = page_size(query.per_page);
    let tagged_ids = Query::select()
        .column(category_tag::Column::EntityId)
        .from(category_tag::Entity)
        .and_where(category_tag::Column::EntityKind.eq(E::KIND.as_str()))
        .and_where(category_tag::Column::Category.eq(query.category.as_str()))
        .to_owned();

    let mut select = E::find().filter(E::id_column().in_subquery(tagged_ids));
    if let Some(condition) = contains_ignore_case(E::name_column(), query.search.as_deref()) {
        select = select.filter(condition);
    }

    let paginator = select
        .order_by_desc(E::created_at_column())
        .order_by_desc(E::id_column())
        .paginate(conn, per_page);

    let total = paginator.num_items().await?;
    let models = paginator.fetch_page(query.page).await?;

    let ids: Vec<i32> = models.iter().map(E::model_id).collect();
    let mut categories = CategoryTagRepository::new(conn)
        .categories_for(E::KIND, &ids)
        .await?;

    let items = models
        .into_iter()
        .map(|model| {
            let tags = categories.remove(&E::model_id(&model)).unwrap_or_default();
            (model, tags)
        })
        .collect();

    Ok(Page {
        items,
        total,
        page: query.page,
        per_page,
    })
}

/// Deletes an entity row and its tag rows. Run inside a transaction.
pub(crate) async fn delete_tagged<E, C>(conn: &C, id: i32) -> Result<(), DbErr>
where
    E: TaggableTable,
    C: ConnectionTrait,
{
    CategoryTagRepository::new(conn)
        .delete_all(E::KIND, id)
        .await?;

    let result = E::delete_many()
        .filter(E::id_column().eq(id))
        .exec(conn)
        .await?;

    if result.rows_affected == 0 {
        return Err(not_found::<E>(id));
    }

    Ok(())
}
