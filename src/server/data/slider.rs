use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{contains_ignore_case, page_size},
    model::{
        page::Page,
        slider::{SliderFilter, SliderParams},
    },
};

fn not_found(id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("slider {} not found", id))
}

pub struct SliderRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SliderRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: SliderParams) -> Result<entity::slider::Model, DbErr> {
        entity::slider::ActiveModel {
            id: ActiveValue::NotSet,
            title: ActiveValue::Set(params.title),
            image_path: ActiveValue::Set(params.image_path),
            platform: ActiveValue::Set(params.platform),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::slider::Model>, DbErr> {
        entity::slider::Entity::find_by_id(id).one(self.db).await
    }

    /// Gets sliders newest first, optionally limited to one platform and filtered by title.
    pub async fn get_paginated(
        &self,
        filter: &SliderFilter,
        page: u64,
        per_page: u64,
    ) -> Result<Page<entity::slider::Model>, DbErr> {
        use entity::slider::Column;

        let per_page = page_size(per_page);
        let mut select = entity::slider::Entity::find();
        if let Some(platform) = filter.platform.as_deref() {
            select = select.filter(Column::Platform.eq(platform));
        }
        if let Some(condition) = contains_ignore_case(Column::Title, filter.search.as_deref()) {
            select = select.filter(condition);
        }

        let paginator = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page).await?;

        Ok(Page {
            items,
            total,
            page,
            per_page,
        })
    }

    pub async fn update(
        &self,
        id: i32,
        params: SliderParams,
    ) -> Result<entity::slider::Model, DbErr> {
        let existing = self.get_by_id(id).await?.ok_or_else(|| not_found(id))?;

        let mut slider: entity::slider::ActiveModel = existing.into();
        slider.title = ActiveValue::Set(params.title);
        slider.image_path = ActiveValue::Set(params.image_path);
        slider.platform = ActiveValue::Set(params.platform);
        slider.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::slider::Entity::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }
}
