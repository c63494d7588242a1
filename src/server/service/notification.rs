//! Fire-and-forget push notifications through the push gateway.
//!
//! Dispatch runs on its own task. Its outcome is logged and never reaches the caller,
//! so a slow or failing gateway cannot delay or fail a status change.

use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::server::model::listing::NotificationRequest;

#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("Push gateway request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Push gateway responded with {0}")]
    UnexpectedStatus(StatusCode),
}

/// Client for `POST {push_service_url}/push/send-push`.
#[derive(Clone)]
pub struct NotificationDispatcher {
    client: reqwest::Client,
    endpoint: String,
}

impl NotificationDispatcher {
    pub fn new(push_service_url: &str, timeout: Duration) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        Ok(Self {
            client,
            endpoint: format!("{}/push/send-push", push_service_url.trim_end_matches('/')),
        })
    }

    /// Sends one notification and waits for the gateway's answer.
    ///
    /// Only 200 and 201 count as delivered.
    pub async fn send(&self, request: &NotificationRequest) -> Result<(), DispatchError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await?;

        match response.status() {
            StatusCode::OK | StatusCode::CREATED => Ok(()),
            status => Err(DispatchError::UnexpectedStatus(status)),
        }
    }

    /// Sends `request` on a background task.
    ///
    /// Failures are logged at warn level. The token is never logged. The returned
    /// handle may be dropped; the task keeps running.
    pub fn dispatch(&self, request: NotificationRequest) -> JoinHandle<()> {
        let dispatcher = self.clone();

        tokio::spawn(
            async move {
                match dispatcher.send(&request).await {
                    Ok(()) => tracing::debug!("Push notification delivered"),
                    Err(e) => tracing::warn!(error = %e, "Push notification failed"),
                }
            }
            .in_current_span(),
        )
    }
}
