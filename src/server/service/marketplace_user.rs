//! Read-only view of marketplace accounts, proxied from the user service.

use crate::server::{
    error::AppError,
    model::page::Page,
    service::user_directory::{MarketplaceUser, UserDirectory},
};

pub struct MarketplaceUserService<'a> {
    directory: &'a dyn UserDirectory,
}

impl<'a> MarketplaceUserService<'a> {
    pub fn new(directory: &'a dyn UserDirectory) -> Self {
        Self { directory }
    }

    /// Gets one zero-based page of accounts matching `search`.
    pub async fn get_paginated(
        &self,
        search: Option<&str>,
        page: u64,
        per_page: u64,
    ) -> Result<Page<MarketplaceUser>, AppError> {
        let search = search
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string);

        let result = self
            .directory
            .list_users(page + 1, per_page, search)
            .await?;

        Ok(Page {
            items: result.users,
            total: result.count,
            page,
            per_page,
        })
    }
}

#[cfg(test)]
mod tests {
    use mockall::predicate::eq;

    use super::*;
    use crate::server::service::user_directory::{
        DirectoryError, MockUserDirectory, UserPage,
    };

    #[tokio::test]
    async fn asks_for_one_based_page_and_keeps_total() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_list_users()
            .with(eq(3), eq(20), eq(Some("ayna".to_string())))
            .times(1)
            .returning(|_, _, _| {
                Ok(UserPage {
                    users: Vec::new(),
                    count: 45,
                })
            });

        let page = MarketplaceUserService::new(&directory)
            .get_paginated(Some(" ayna "), 2, 20)
            .await
            .unwrap();

        assert_eq!(page.page, 2);
        assert_eq!(page.total, 45);
        assert_eq!(page.total_pages(), 3);
    }

    #[tokio::test]
    async fn blank_search_is_dropped() {
        let mut directory = MockUserDirectory::new();
        directory
            .expect_list_users()
            .with(eq(1), eq(10), eq(None))
            .returning(|_, _, _| Ok(UserPage::default()));

        let page = MarketplaceUserService::new(&directory)
            .get_paginated(Some("   "), 0, 10)
            .await
            .unwrap();

        assert!(page.items.is_empty());
    }

    #[tokio::test]
    async fn directory_failure_is_bad_gateway() {
        let mut directory = MockUserDirectory::new();
        directory.expect_list_users().returning(|_, _, _| {
            Err(DirectoryError::UnexpectedStatus(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ))
        });

        let err = MarketplaceUserService::new(&directory)
            .get_paginated(None, 0, 10)
            .await
            .unwrap_err();

        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_GATEWAY);
    }
}
