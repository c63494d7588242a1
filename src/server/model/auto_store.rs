use sea_orm::prelude::Json;

use crate::{
    model::auto_store::{AutoStoreDto, PaginatedAutoStoresDto, SaveAutoStoreDto},
    server::model::{
        location::{city_dto, region_dto},
        page::Page,
    },
};

#[derive(Debug, Clone)]
pub struct AutoStoreParams {
    pub user_id: i64,
    pub store_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub address: Option<String>,
    pub logo_path: Option<String>,
    pub images: Vec<String>,
    pub region_id: Option<i32>,
    pub city_id: Option<i32>,
}

impl AutoStoreParams {
    pub fn images_json(&self) -> Json {
        Json::from(self.images.clone())
    }
}

impl From<SaveAutoStoreDto> for AutoStoreParams {
    fn from(dto: SaveAutoStoreDto) -> Self {
        Self {
            user_id: dto.user_id,
            store_name: dto.store_name,
            phone_number: dto.phone_number,
            email: dto.email,
            address: dto.address,
            logo_path: dto.logo_path,
            images: dto.images,
            region_id: dto.region_id,
            city_id: dto.city_id,
        }
    }
}

/// A store with its location rows and, once resolved, its owner's name.
#[derive(Debug, Clone, PartialEq)]
pub struct AutoStore {
    pub store: entity::auto_store::Model,
    pub region: Option<entity::region::Model>,
    pub city: Option<entity::city::Model>,
    pub owner_name: Option<String>,
}

impl AutoStore {
    pub fn from_entity(
        store: entity::auto_store::Model,
        region: Option<entity::region::Model>,
        city: Option<entity::city::Model>,
    ) -> Self {
        Self {
            store,
            region,
            city,
            owner_name: None,
        }
    }

    /// Image paths stored as a JSON array. Non-string entries are skipped.
    pub fn images(&self) -> Vec<String> {
        self.store
            .images
            .as_array()
            .map(|images| {
                images
                    .iter()
                    .filter_map(|image| image.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn into_dto(self) -> AutoStoreDto {
        let images = self.images();
        let store = self.store;

        AutoStoreDto {
            id: store.id,
            user_id: store.user_id,
            owner_name: self.owner_name,
            store_name: store.store_name,
            phone_number: store.phone_number,
            email: store.email,
            address: store.address,
            logo_path: store.logo_path,
            images,
            region: self.region.map(region_dto),
            city: self.city.map(city_dto),
            created_at: store.created_at,
            updated_at: store.updated_at,
        }
    }
}

impl Page<AutoStore> {
    pub fn into_dto(self) -> PaginatedAutoStoresDto {
        let total_pages = self.total_pages();
        PaginatedAutoStoresDto {
            auto_stores: self.items.into_iter().map(AutoStore::into_dto).collect(),
            total: self.total,
            page: self.page + 1,
            per_page: self.per_page,
            total_pages,
        }
    }
}
