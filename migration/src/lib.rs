pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_brand_table;
mod m20260105_000002_create_body_type_table;
mod m20260105_000003_create_brand_model_table;
mod m20260105_000004_create_category_tag_table;
mod m20260105_000005_create_region_table;
mod m20260105_000006_create_city_table;
mod m20260105_000007_create_slider_table;
mod m20260105_000008_create_role_table;
mod m20260105_000009_create_admin_user_table;
mod m20260106_000010_create_car_table;
mod m20260106_000011_create_moto_table;
mod m20260106_000012_create_truck_table;
mod m20260106_000013_create_stock_table;
mod m20260107_000014_create_auto_store_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_brand_table::Migration),
            Box::new(m20260105_000002_create_body_type_table::Migration),
            Box::new(m20260105_000003_create_brand_model_table::Migration),
            Box::new(m20260105_000004_create_category_tag_table::Migration),
            Box::new(m20260105_000005_create_region_table::Migration),
            Box::new(m20260105_000006_create_city_table::Migration),
            Box::new(m20260105_000007_create_slider_table::Migration),
            Box::new(m20260105_000008_create_role_table::Migration),
            Box::new(m20260105_000009_create_admin_user_table::Migration),
            Box::new(m20260106_000010_create_car_table::Migration),
            Box::new(m20260106_000011_create_moto_table::Migration),
            Box::new(m20260106_000012_create_truck_table::Migration),
            Box::new(m20260106_000013_create_stock_table::Migration),
            Box::new(m20260107_000014_create_auto_store_table::Migration),
        ]
    }
}
