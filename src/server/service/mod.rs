//! Business logic between controllers and repositories.
//!
//! Services borrow the database connection (and, for listing moderation, the
//! outbound clients) for the duration of a request.

pub mod auto_store;
pub mod catalog;
pub mod listing;
pub mod listing_status;
pub mod location;
pub mod marketplace_user;
pub mod notification;
pub mod settings;
pub mod slider;
pub mod stock;
pub mod user_directory;
