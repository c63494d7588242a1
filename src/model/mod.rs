//! JSON request and response DTOs exposed by the HTTP API.

pub mod api;
pub mod auto_store;
pub mod catalog;
pub mod listing;
pub mod location;
pub mod settings;
pub mod slider;
pub mod user;
