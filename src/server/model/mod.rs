//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entity models into these types at the data layer
//! boundary; controllers convert them into DTOs from `crate::model`.

pub mod auto_store;
pub mod catalog;
pub mod category;
pub mod listing;
pub mod location;
pub mod page;
pub mod settings;
pub mod slider;
pub mod user;
