use sea_orm::entity::prelude::*;

/// Dealer storefront listing.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "stock")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub user_id: i64,
    pub status: String,
    pub store_name: String,
    pub phone_number: String,
    pub email: Option<String>,
    pub address: String,
    pub region_id: Option<i32>,
    pub city_id: Option<i32>,
    pub description: Option<String>,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
