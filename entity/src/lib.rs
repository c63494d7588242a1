//! SeaORM entity definitions for the vehicle marketplace back office.
//!
//! Catalog entities (brands, models, body types) carry category tags through the
//! polymorphic `category_tag` table. Listing entities (cars, motos, trucks, dealer
//! stock) are written by the public marketplace and only read or status-updated here,
//! apart from dealer stock which the back office may also create and edit.

pub mod prelude;

pub mod admin_user;
pub mod auto_store;
pub mod body_type;
pub mod brand;
pub mod brand_model;
pub mod car;
pub mod category_tag;
pub mod city;
pub mod moto;
pub mod region;
pub mod role;
pub mod slider;
pub mod stock;
pub mod truck;
