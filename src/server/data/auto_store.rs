use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    data::{contains_ignore_case, page_size},
    model::{
        auto_store::{AutoStore, AutoStoreParams},
        page::Page,
    },
};

fn not_found(id: i32) -> DbErr {
    DbErr::RecordNotFound(format!("auto store {} not found", id))
}

pub struct AutoStoreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AutoStoreRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: AutoStoreParams) -> Result<AutoStore, DbErr> {
        let now = Utc::now();
        let store = entity::auto_store::ActiveModel {
            id: ActiveValue::NotSet,
            user_id: ActiveValue::Set(params.user_id),
            images: ActiveValue::Set(params.images_json()),
            store_name: ActiveValue::Set(params.store_name),
            phone_number: ActiveValue::Set(params.phone_number),
            email: ActiveValue::Set(params.email),
            address: ActiveValue::Set(params.address),
            logo_path: ActiveValue::Set(params.logo_path),
            region_id: ActiveValue::Set(params.region_id),
            city_id: ActiveValue::Set(params.city_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await?;

        self.with_locations(store).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<AutoStore>, DbErr> {
        match entity::auto_store::Entity::find_by_id(id).one(self.db).await? {
            Some(store) => Ok(Some(self.with_locations(store).await?)),
            None => Ok(None),
        }
    }

    /// Gets stores newest first, optionally filtered by store name.
    ///
    /// Regions and cities for the whole page are loaded with one query each.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<AutoStore>, DbErr> {
        use entity::auto_store::Column;

        let per_page = page_size(per_page);
        let mut select = entity::auto_store::Entity::find();
        if let Some(condition) = contains_ignore_case(Column::StoreName, search) {
            select = select.filter(condition);
        }

        let paginator = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .paginate(self.db, per_page);
        let total = paginator.num_items().await?;
        let stores = paginator.fetch_page(page).await?;

        let region_ids: Vec<i32> = stores.iter().filter_map(|s| s.region_id).collect();
        let city_ids: Vec<i32> = stores.iter().filter_map(|s| s.city_id).collect();
        let regions = self.regions_by_id(region_ids).await?;
        let cities = self.cities_by_id(city_ids).await?;

        let items = stores
            .into_iter()
            .map(|store| {
                let region = store.region_id.and_then(|id| regions.get(&id).cloned());
                let city = store.city_id.and_then(|id| cities.get(&id).cloned());
                AutoStore::from_entity(store, region, city)
            })
            .collect();

        Ok(Page {
            items,
            total,
            page,
            per_page,
        })
    }

    pub async fn update(&self, id: i32, params: AutoStoreParams) -> Result<AutoStore, DbErr> {
        let existing = entity::auto_store::Entity::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or_else(|| not_found(id))?;

        let mut store: entity::auto_store::ActiveModel = existing.into();
        store.images = ActiveValue::Set(params.images_json());
        store.user_id = ActiveValue::Set(params.user_id);
        store.store_name = ActiveValue::Set(params.store_name);
        store.phone_number = ActiveValue::Set(params.phone_number);
        store.email = ActiveValue::Set(params.email);
        store.address = ActiveValue::Set(params.address);
        store.logo_path = ActiveValue::Set(params.logo_path);
        store.region_id = ActiveValue::Set(params.region_id);
        store.city_id = ActiveValue::Set(params.city_id);
        store.updated_at = ActiveValue::Set(Utc::now());
        let store = store.update(self.db).await?;

        self.with_locations(store).await
    }

    pub async fn delete(&self, id: i32) -> Result<(), DbErr> {
        let result = entity::auto_store::Entity::delete_by_id(id)
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            return Err(not_found(id));
        }

        Ok(())
    }

    async fn with_locations(&self, store: entity::auto_store::Model) -> Result<AutoStore, DbErr> {
        let region = match store.region_id {
            Some(id) => entity::region::Entity::find_by_id(id).one(self.db).await?,
            None => None,
        };
        let city = match store.city_id {
            Some(id) => entity::city::Entity::find_by_id(id).one(self.db).await?,
            None => None,
        };

        Ok(AutoStore::from_entity(store, region, city))
    }

    async fn regions_by_id(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::region::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let regions = entity::region::Entity::find()
            .filter(entity::region::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(regions.into_iter().map(|r| (r.id, r)).collect())
    }

    async fn cities_by_id(
        &self,
        ids: Vec<i32>,
    ) -> Result<HashMap<i32, entity::city::Model>, DbErr> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let cities = entity::city::Entity::find()
            .filter(entity::city::Column::Id.is_in(ids))
            .all(self.db)
            .await?;

        Ok(cities.into_iter().map(|c| (c.id, c)).collect())
    }
}
