//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Each entity has a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let brand = factory::brand::create_brand(&db).await?;
//!     factory::category_tag::tag(&db, "brand", brand.id, &["auto", "truck"]).await?;
//!
//!     let car = factory::listing::CarFactory::new(&db)
//!         .user_id(42)
//!         .status("pending")
//!         .build()
//!         .await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Available Factories
//!
//! - `auto_store` - Dealer stores without a location
//! - `brand`, `body_type`, `brand_model` - Tagged catalog entities
//! - `category_tag` - Raw tag rows for any catalog entity
//! - `listing` - Car, moto, truck and dealer stock listings
//! - `location` - Regions and cities
//! - `settings` - Roles and admin users
//! - `slider` - Home page sliders

pub mod auto_store;
pub mod body_type;
pub mod brand;
pub mod brand_model;
pub mod category_tag;
pub mod helpers;
pub mod listing;
pub mod location;
pub mod settings;
pub mod slider;

pub use brand::create_brand;
pub use listing::create_car;
