use crate::server::{
    data::catalog::brand_model::BrandModelRepository,
    model::{
        catalog::{BrandModelParams, CategoryQuery},
        category::{CategorySet, VehicleCategory},
    },
};
use entity::prelude::*;
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod update;

fn params(brand_id: i32, body_type_id: Option<i32>, categories: &[&str]) -> BrandModelParams {
    BrandModelParams {
        brand_id,
        body_type_id,
        name: "Corolla".to_string(),
        categories: CategorySet::parse(categories).unwrap(),
    }
}
