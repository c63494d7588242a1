mod auto_store;
mod body_type;
mod brand;
mod brand_model;
mod listing;
mod location;
mod settings;
mod slider;
mod stock;
mod tag;
