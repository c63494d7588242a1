//! Client for the external user service, which owns marketplace accounts.
//!
//! The admin back office never stores push tokens. A token is fetched from the user
//! service at the moment a notification is about to be sent and dropped right after.
//! Account listings and owner names are read from the same service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    /// The user service has no record of the user.
    #[error("User {0} not found in user service")]
    NotFound(i64),

    #[error("User service request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("User service responded with {0}")]
    UnexpectedStatus(StatusCode),

    /// The user exists but has no registered device.
    #[error("User {0} has no delivery token")]
    EmptyToken(i64),
}

/// A marketplace account as reported by the user service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MarketplaceUser {
    pub id: i64,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub avatar: Option<String>,
}

/// One page of marketplace accounts plus the total match count.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserPage {
    pub users: Vec<MarketplaceUser>,
    pub count: u64,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Resolves a user's push delivery token.
    async fn delivery_token(&self, user_id: i64) -> Result<String, DirectoryError>;

    /// Lists accounts matching `search` by name, email or phone. `page` is one-based.
    async fn list_users(
        &self,
        page: u64,
        limit: u64,
        search: Option<String>,
    ) -> Result<UserPage, DirectoryError>;

    /// Gets the accounts with the given IDs. Unknown IDs are left out.
    async fn users_by_ids(&self, ids: Vec<i64>) -> Result<Vec<MarketplaceUser>, DirectoryError>;
}

#[derive(Deserialize)]
struct Envelope<T> {
    #[serde(rename = "Data")]
    data: T,
}

#[derive(Deserialize)]
struct TokenPayload {
    token: String,
}

#[derive(Deserialize)]
struct UserListPayload {
    users: Option<Vec<MarketplaceUser>>,
    #[serde(default)]
    count: u64,
}

#[derive(Serialize)]
struct UserIdsRequest<'a> {
    ids: &'a [i64],
}

/// [`UserDirectory`] over the user service's HTTP API.
///
/// - `GET {base_url}/users/{user_id}/push-token`
/// - `GET {base_url}/users/get-users?page&limit&search`
/// - `POST {base_url}/users/get-by-ids`
///
/// Every response wraps its payload in `{"Data": ...}`.
#[derive(Clone)]
pub struct HttpUserDirectory {
    client: reqwest::Client,
    base_url: String,
}

impl HttpUserDirectory {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn token_url(&self, user_id: i64) -> String {
        format!("{}/users/{}/push-token", self.base_url, user_id)
    }

    fn url(&self, path: &str) -> String {
        format!("{}/users/{}", self.base_url, path)
    }
}

fn ensure_success(response: &reqwest::Response) -> Result<(), DirectoryError> {
    let status = response.status();
    if !status.is_success() {
        return Err(DirectoryError::UnexpectedStatus(status));
    }

    Ok(())
}

#[async_trait]
impl UserDirectory for HttpUserDirectory {
    async fn delivery_token(&self, user_id: i64) -> Result<String, DirectoryError> {
        let response = self.client.get(self.token_url(user_id)).send().await?;

        match response.status() {
            StatusCode::NOT_FOUND => return Err(DirectoryError::NotFound(user_id)),
            status if !status.is_success() => return Err(DirectoryError::UnexpectedStatus(status)),
            _ => {}
        }

        let envelope: Envelope<TokenPayload> = response.json().await?;
        let token = envelope.data.token.trim().to_string();
        if token.is_empty() {
            return Err(DirectoryError::EmptyToken(user_id));
        }

        Ok(token)
    }

    async fn list_users(
        &self,
        page: u64,
        limit: u64,
        search: Option<String>,
    ) -> Result<UserPage, DirectoryError> {
        let page = page.to_string();
        let limit = limit.to_string();
        let search = search.unwrap_or_default();
        let response = self
            .client
            .get(self.url("get-users"))
            .query(&[("page", &page), ("limit", &limit), ("search", &search)])
            .send()
            .await?;
        ensure_success(&response)?;

        let envelope: Envelope<UserListPayload> = response.json().await?;

        Ok(UserPage {
            users: envelope.data.users.unwrap_or_default(),
            count: envelope.data.count,
        })
    }

    async fn users_by_ids(&self, ids: Vec<i64>) -> Result<Vec<MarketplaceUser>, DirectoryError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let response = self
            .client
            .post(self.url("get-by-ids"))
            .json(&UserIdsRequest { ids: &ids })
            .send()
            .await?;
        ensure_success(&response)?;

        let envelope: Envelope<Option<Vec<MarketplaceUser>>> = response.json().await?;

        Ok(envelope.data.unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{body_json, method, path, query_param},
        Mock, MockServer, ResponseTemplate,
    };

    fn directory(server: &MockServer) -> HttpUserDirectory {
        HttpUserDirectory::new(&server.uri(), Duration::from_secs(2)).unwrap()
    }

    #[test]
    fn trims_trailing_slash() {
        let directory =
            HttpUserDirectory::new("http://users.local/", Duration::from_secs(1)).unwrap();
        assert_eq!(
            directory.token_url(7),
            "http://users.local/users/7/push-token"
        );
    }

    #[tokio::test]
    async fn returns_token_from_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/42/push-token"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "Data": { "token": "device-abc" } })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let token = directory(&server).delivery_token(42).await.unwrap();

        assert_eq!(token, "device-abc");
    }

    #[tokio::test]
    async fn maps_404_to_not_found() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/5/push-token"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = directory(&server).delivery_token(5).await;

        assert!(matches!(result, Err(DirectoryError::NotFound(5))));
    }

    #[tokio::test]
    async fn maps_server_error_to_unexpected_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let result = directory(&server).delivery_token(5).await;

        assert!(matches!(
            result,
            Err(DirectoryError::UnexpectedStatus(StatusCode::SERVICE_UNAVAILABLE))
        ));
    }

    #[tokio::test]
    async fn rejects_blank_token() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "Data": { "token": "  " } })),
            )
            .mount(&server)
            .await;

        let result = directory(&server).delivery_token(9).await;

        assert!(matches!(result, Err(DirectoryError::EmptyToken(9))));
    }

    #[tokio::test]
    async fn rejects_malformed_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = directory(&server).delivery_token(9).await;

        assert!(matches!(result, Err(DirectoryError::Transport(_))));
    }

    #[tokio::test]
    async fn lists_users_with_query_and_count() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/get-users"))
            .and(query_param("page", "2"))
            .and(query_param("limit", "5"))
            .and(query_param("search", "merdan"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Data": {
                    "users": [
                        { "id": 3, "full_name": "Merdan A.", "email": null,
                          "phone_number": "+99361111111", "avatar": null }
                    ],
                    "count": 6
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let page = directory(&server)
            .list_users(2, 5, Some("merdan".to_string()))
            .await
            .unwrap();

        assert_eq!(page.count, 6);
        assert_eq!(page.users.len(), 1);
        assert_eq!(page.users[0].full_name.as_deref(), Some("Merdan A."));
    }

    #[tokio::test]
    async fn null_user_list_is_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/get-users"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({ "Data": { "users": null, "count": 0 } })),
            )
            .mount(&server)
            .await;

        let page = directory(&server).list_users(1, 10, None).await.unwrap();

        assert_eq!(page, UserPage::default());
    }

    #[tokio::test]
    async fn fetches_users_by_ids() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/users/get-by-ids"))
            .and(body_json(serde_json::json!({ "ids": [4, 9] })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "Data": [
                    { "id": 4, "full_name": "Aýna", "email": null,
                      "phone_number": null, "avatar": null }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let users = directory(&server).users_by_ids(vec![4, 9]).await.unwrap();

        assert_eq!(users.len(), 1);
        assert_eq!(users[0].id, 4);
    }

    #[tokio::test]
    async fn skips_request_for_no_ids() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let users = directory(&server).users_by_ids(Vec::new()).await.unwrap();

        assert!(users.is_empty());
    }

    #[tokio::test]
    async fn user_list_failure_is_unexpected_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/users/get-users"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = directory(&server).list_users(1, 10, None).await;

        assert!(matches!(
            result,
            Err(DirectoryError::UnexpectedStatus(StatusCode::INTERNAL_SERVER_ERROR))
        ));
    }
}
