use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Field-level validation failures keyed by field name.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    pub fields: BTreeMap<String, Vec<String>>,
}

/// Failure of one synchronous step of a listing status change.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusTransitionErrorDto {
    pub error: String,
    /// `update_status`, `owner_lookup` or `token_lookup`.
    pub step: String,
}

/// Response for delete endpoints that report how many rows they removed.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedDto {
    pub deleted: u64,
}
