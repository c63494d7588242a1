use std::collections::HashMap;

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{
        auto_store::AutoStoreRepository,
        location::{CityRepository, RegionRepository},
    },
    error::AppError,
    model::{
        auto_store::{AutoStore, AutoStoreParams},
        page::Page,
    },
    service::user_directory::UserDirectory,
};

pub struct AutoStoreService<'a> {
    db: &'a DatabaseConnection,
    directory: &'a dyn UserDirectory,
}

impl<'a> AutoStoreService<'a> {
    pub fn new(db: &'a DatabaseConnection, directory: &'a dyn UserDirectory) -> Self {
        Self { db, directory }
    }

    pub async fn create(&self, params: AutoStoreParams) -> Result<AutoStore, AppError> {
        self.check_location(params.region_id, params.city_id).await?;

        let store = AutoStoreRepository::new(self.db).create(params).await?;

        tracing::info!(
            auto_store_id = store.store.id,
            user_id = store.store.user_id,
            "Created auto store"
        );

        Ok(store)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<AutoStore, AppError> {
        let store = AutoStoreRepository::new(self.db)
            .get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Auto store {} not found", id)))?;

        let mut stores = vec![store];
        self.resolve_owners(&mut stores).await;

        Ok(stores.remove(0))
    }

    /// Gets one page of stores with owner names filled in from the user service.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<AutoStore>, AppError> {
        let mut result = AutoStoreRepository::new(self.db)
            .get_paginated(search, page, per_page)
            .await?;

        self.resolve_owners(&mut result.items).await;

        Ok(result)
    }

    pub async fn update(&self, id: i32, params: AutoStoreParams) -> Result<AutoStore, AppError> {
        self.check_location(params.region_id, params.city_id).await?;

        Ok(AutoStoreRepository::new(self.db).update(id, params).await?)
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        AutoStoreRepository::new(self.db).delete(id).await?;

        tracing::info!(auto_store_id = id, "Deleted auto store");

        Ok(())
    }

    /// Both ids must exist and the city must lie in the region when both are given.
    async fn check_location(
        &self,
        region_id: Option<i32>,
        city_id: Option<i32>,
    ) -> Result<(), AppError> {
        if let Some(region_id) = region_id {
            RegionRepository::new(self.db)
                .get_by_id(region_id)
                .await?
                .ok_or_else(|| AppError::BadRequest(format!("Unknown region {}", region_id)))?;
        }

        if let Some(city_id) = city_id {
            let city = CityRepository::new(self.db)
                .get_by_id(city_id)
                .await?
                .ok_or_else(|| AppError::BadRequest(format!("Unknown city {}", city_id)))?;

            if let Some(region_id) = region_id {
                if city.region_id != region_id {
                    return Err(AppError::BadRequest(format!(
                        "City {} is not in region {}",
                        city_id, region_id
                    )));
                }
            }
        }

        Ok(())
    }

    /// Owner names are informational; a user service failure leaves them empty.
    async fn resolve_owners(&self, stores: &mut [AutoStore]) {
        let mut ids: Vec<i64> = stores.iter().map(|s| s.store.user_id).collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return;
        }

        let users = match self.directory.users_by_ids(ids).await {
            Ok(users) => users,
            Err(err) => {
                tracing::warn!("Failed to resolve auto store owners: {}", err);
                return;
            }
        };

        let names: HashMap<i64, String> = users
            .into_iter()
            .filter_map(|user| user.full_name.map(|name| (user.id, name)))
            .collect();
        for store in stores.iter_mut() {
            store.owner_name = names.get(&store.store.user_id).cloned();
        }
    }
}

#[cfg(test)]
mod tests {
    use test_utils::{builder::TestBuilder, factory};

    use super::*;
    use crate::server::service::user_directory::{
        DirectoryError, MarketplaceUser, MockUserDirectory,
    };

    fn params(region_id: Option<i32>, city_id: Option<i32>) -> AutoStoreParams {
        AutoStoreParams {
            user_id: 5,
            store_name: "Garaj".to_string(),
            phone_number: "+99365000000".to_string(),
            email: None,
            address: None,
            logo_path: None,
            images: Vec::new(),
            region_id,
            city_id,
        }
    }

    fn user(id: i64, full_name: &str) -> MarketplaceUser {
        MarketplaceUser {
            id,
            full_name: Some(full_name.to_string()),
            email: None,
            phone_number: None,
            avatar: None,
        }
    }

    #[tokio::test]
    async fn fills_owner_names_once_per_user() {
        let test = TestBuilder::new().with_store_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        factory::auto_store::create_auto_store(db, 7).await.unwrap();
        factory::auto_store::create_auto_store(db, 7).await.unwrap();
        factory::auto_store::create_auto_store(db, 9).await.unwrap();

        let mut directory = MockUserDirectory::new();
        directory
            .expect_users_by_ids()
            .withf(|ids| ids == &vec![7, 9])
            .times(1)
            .returning(|_| Ok(vec![user(7, "Aman Ataýew")]));

        let page = AutoStoreService::new(db, &directory)
            .get_paginated(None, 0, 10)
            .await
            .unwrap();

        assert_eq!(page.total, 3);
        for store in &page.items {
            match store.store.user_id {
                7 => assert_eq!(store.owner_name.as_deref(), Some("Aman Ataýew")),
                _ => assert_eq!(store.owner_name, None),
            }
        }
    }

    #[tokio::test]
    async fn directory_failure_leaves_owner_empty() {
        let test = TestBuilder::new().with_store_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let store = factory::auto_store::create_auto_store(db, 7).await.unwrap();

        let mut directory = MockUserDirectory::new();
        directory.expect_users_by_ids().returning(|_| {
            Err(DirectoryError::UnexpectedStatus(
                reqwest::StatusCode::BAD_GATEWAY,
            ))
        });

        let found = AutoStoreService::new(db, &directory)
            .get_by_id(store.id)
            .await
            .unwrap();

        assert_eq!(found.store.id, store.id);
        assert_eq!(found.owner_name, None);
    }

    #[tokio::test]
    async fn rejects_city_outside_region() {
        let test = TestBuilder::new().with_store_tables().build().await.unwrap();
        let db = test.db.as_ref().unwrap();
        let region = factory::location::create_region(db).await.unwrap();
        let other = factory::location::create_region(db).await.unwrap();
        let city = factory::location::create_city(db, other.id).await.unwrap();

        let directory = MockUserDirectory::new();
        let service = AutoStoreService::new(db, &directory);

        let err = service
            .create(params(Some(region.id), Some(city.id)))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let err = service.create(params(None, Some(999))).await.unwrap_err();
        assert!(matches!(err, AppError::BadRequest(_)));

        let created = service
            .create(params(Some(other.id), Some(city.id)))
            .await
            .unwrap();
        assert_eq!(created.city.map(|c| c.id), Some(city.id));
    }
}
