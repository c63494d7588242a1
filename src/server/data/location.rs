use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{contains_ignore_case, page_size},
    model::{
        location::{CityParams, RegionParams},
        page::Page,
    },
};

fn region_not_found(id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("region {} not found", id))
}

fn city_not_found(id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("city {} not found", id))
}

/// Matches `search` against any of the three language columns.
fn any_name_contains<C: ColumnTrait>(columns: [C; 3], search: Option<&str>) -> Option<Condition> {
    let mut condition = Condition::any();
    for column in columns {
        condition = condition.add(contains_ignore_case(column, search)?);
    }
    Some(condition)
}

pub struct RegionRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RegionRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: RegionParams) -> Result<entity::region::Model, DbErr> {
        entity::region::ActiveModel {
            id: ActiveValue::NotSet,
            name_tm: ActiveValue::Set(params.name_tm),
            name_en: ActiveValue::Set(params.name_en),
            name_ru: ActiveValue::Set(params.name_ru),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::region::Model>, DbErr> {
        entity::region::Entity::find_by_id(id).one(self.db).await
    }

    /// Gets regions ordered by ID, optionally filtered by any of their names.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<entity::region::Model>, DbErr> {
        use entity::region::Column;

        let mut select = entity::region::Entity::find();
        if let Some(condition) =
            any_name_contains([Column::NameTm, Column::NameEn, Column::NameRu], search)
        {
            select = select.filter(condition);
        }

        let per_page = page_size(per_page);
        let paginator = select.order_by_asc(Column::Id).paginate(self.db, per_page);
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
        params: RegionParams,
    ) -> Result<entity::region::Model, DbErr> {
        let existing = self.get_by_id(id).await?.ok_or_else(|| region_not_found(id))?;

        let mut region: entity::region::ActiveModel = existing.into();
        region.name_tm = ActiveValue::Set(params.name_tm);
        region.name_en = ActiveValue::Set(params.name_en);
        region.name_ru = ActiveValue::Set(params.name_ru);
        region.update(self.db).await
    }

    /// Deletes a region and its cities.
    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        entity::city::Entity::delete_many()
            .filter(entity::city::Column::RegionId.eq(id))
            .exec(self.db)
            .await?;

        let result = entity::region::Entity::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected == 0 {
            return Err(region_not_found(id));
        }

        Ok(())
    }
}

pub struct CityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> CityRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn ensure_region(&self, region_id: i32) -> Result<(), DbErr> {
        entity::region::Entity::find_by_id(region_id)
            .one(self.db)
            .await?
            .map(|_| ())
            .ok_or_else(|| region_not_found(region_id))
    }

    pub async fn create(&self, params: CityParams) -> Result<entity::city::Model, DbErr> {
        self.ensure_region(params.region_id).await?;

        entity::city::ActiveModel {
            id: ActiveValue::NotSet,
            region_id: ActiveValue::Set(params.region_id),
            name_tm: ActiveValue::Set(params.name_tm),
            name_en: ActiveValue::Set(params.name_en),
            name_ru: ActiveValue::Set(params.name_ru),
        }
        .insert(self.db)
        .await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<entity::city::Model>, DbErr> {
        entity::city::Entity::find_by_id(id).one(self.db).await
    }

    /// Gets cities ordered by ID, optionally limited to one region and filtered by name.
    pub async fn get_paginated(
        &self,
        region_id: Option<i32>,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<entity::city::Model>, DbErr> {
        use entity::city::Column;

        let mut select = entity::city::Entity::find();
        if let Some(region_id) = region_id {
            select = select.filter(Column::RegionId.eq(region_id));
        }
        if let Some(condition) =
            any_name_contains([Column::NameTm, Column::NameEn, Column::NameRu], search)
        {
            select = select.filter(condition);
        }

        let per_page = page_size(per_page);
        let paginator = select.order_by_asc(Column::Id).paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let items = paginator.fetch_page(page).await?;

        Ok(Page {
            items,
            total,
            page,
            per_page,
        })
    }

    pub async fn update(&self, id: i32, params: CityParams) -> Result<entity::city::Model, DbErr> {
        let existing = self.get_by_id(id).await?.ok_or_else(|| city_not_found(id))?;
        self.ensure_region(params.region_id).await?;

        let mut city: entity::city::ActiveModel = existing.into();
        city.region_id = ActiveValue::Set(params.region_id);
        city.name_tm = ActiveValue::Set(params.name_tm);
        city.name_en = ActiveValue::Set(params.name_en);
        city.name_ru = ActiveValue::Set(params.name_ru);
        city.update(self.db).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::city::Entity::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected == 0 {
            return Err(city_not_found(id));
        }

        Ok(())
    }
}
