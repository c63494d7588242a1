use crate::server::{
    data::catalog::brand::BrandRepository,
    model::{
        catalog::{BrandParams, CategoryQuery},
        category::{CategorySet, VehicleCategory},
    },
};
use chrono::{Duration, Utc};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod delete_category;
mod get_by_category_paginated;
mod update;

fn params(name: &str, categories: &[&str]) -> BrandParams {
    BrandParams {
        name: name.to_string(),
        logo_path: None,
        categories: CategorySet::parse(categories).unwrap(),
    }
}
