//! Test fixtures providing reusable test data without database insertion.
//!
//! Fixtures create in-memory entity models for unit tests, mocked repository
//! responses and factory defaults. Unlike factories, they do NOT touch the database.

pub mod brand;
pub mod car;

pub use brand::{entity as brand_entity, entity_builder as brand_entity_builder};
pub use car::entity as car_entity;
