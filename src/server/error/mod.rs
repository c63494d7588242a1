//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into appropriate HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse` for automatic error handling in API endpoints.

pub mod config;

use std::collections::BTreeMap;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use thiserror::Error;
use validator::ValidationErrors;

use crate::{
    model::api::{ErrorDto, StatusTransitionErrorDto, ValidationErrorDto},
    server::{
        error::config::ConfigError, model::category::CategoryError,
        service::user_directory::DirectoryError,
    },
};

/// Synchronous step of a listing status change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionStep {
    UpdateStatus,
    OwnerLookup,
    TokenLookup,
}

impl TransitionStep {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::UpdateStatus => "update_status",
            Self::OwnerLookup => "owner_lookup",
            Self::TokenLookup => "token_lookup",
        }
    }
}

impl std::fmt::Display for TransitionStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Most variants use `#[from]` for automatic
/// error conversion.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// `DbErr::RecordNotFound` results in 404 Not Found, everything else in
    /// 500 Internal Server Error with details logged server-side.
    #[error(transparent)]
    DbErr(#[from] DbErr),

    /// Request body failed field validation. Results in 400 with a field map.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Category label outside the vocabulary or an empty category list.
    #[error(transparent)]
    Category(#[from] CategoryError),

    /// Delivery token lookup against the user service failed.
    #[error(transparent)]
    Directory(#[from] DirectoryError),

    /// Password hashing failed.
    #[error(transparent)]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// HTTP client construction or request error from reqwest.
    #[error(transparent)]
    ReqwestErr(#[from] reqwest::Error),

    /// I/O error, e.g. binding the listen socket.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A listing status change failed at `step`.
    ///
    /// Steps before `step` are not undone: a failed owner or token lookup leaves the
    /// new status committed. The response status is taken from `source`.
    #[error("Listing status change failed at {step}: {source}")]
    StatusTransition {
        step: TransitionStep,
        #[source]
        source: Box<AppError>,
    },

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Wraps `err` as the failure of a status-change step.
    pub fn at_step(step: TransitionStep, err: impl Into<AppError>) -> Self {
        Self::StatusTransition {
            step,
            source: Box::new(err.into()),
        }
    }

    /// HTTP status this error maps to.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::DbErr(DbErr::RecordNotFound(_)) | Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) | Self::Category(_) | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::Directory(DirectoryError::NotFound(_)) => StatusCode::NOT_FOUND,
            Self::Directory(_) => StatusCode::BAD_GATEWAY,
            Self::StatusTransition { source, .. } => source.status_code(),
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the client. Server-side details are logged instead.
    fn public_message(&self) -> String {
        match self.status_code() {
            StatusCode::INTERNAL_SERVER_ERROR => {
                tracing::error!("{}", self);
                "Internal server error".to_string()
            }
            StatusCode::BAD_GATEWAY => {
                tracing::warn!("{}", self);
                "Upstream service unavailable".to_string()
            }
            _ => match self {
                Self::StatusTransition { source, .. } => source.public_message(),
                other => other.to_string(),
            },
        }
    }
}

fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|err| {
                    err.message
                        .as_ref()
                        .map(|message| message.to_string())
                        .unwrap_or_else(|| err.code.to_string())
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For validation, category and `BadRequest` errors
/// - 404 Not Found - For `NotFound` and `DbErr::RecordNotFound`
/// - 502 Bad Gateway - For user service failures
/// - 500 Internal Server Error - For all other error types, with a generic message
/// - Status of the source error for `StatusTransition`, with the failing step in the body
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Validation(errors) => (
                status,
                Json(ValidationErrorDto {
                    error: "Validation failed".to_string(),
                    fields: field_messages(errors),
                }),
            )
                .into_response(),
            Self::StatusTransition { step, .. } => (
                status,
                Json(StatusTransitionErrorDto {
                    error: self.public_message(),
                    step: step.as_str().to_string(),
                }),
            )
                .into_response(),
            _ => (
                status,
                Json(ErrorDto {
                    error: self.public_message(),
                }),
            )
                .into_response(),
        }
    }
}
