use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Stock::Table)
                    .if_not_exists()
                    .col(pk_auto(Stock::Id))
                    .col(big_integer(Stock::UserId))
                    .col(string(Stock::Status).default("pending"))
                    .col(string(Stock::StoreName))
                    .col(string(Stock::PhoneNumber))
                    .col(string_null(Stock::Email))
                    .col(string(Stock::Address))
                    .col(integer_null(Stock::RegionId))
                    .col(integer_null(Stock::CityId))
                    .col(text_null(Stock::Description))
                    .col(timestamp_with_time_zone(Stock::CreatedAt))
                    .col(timestamp_with_time_zone(Stock::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Stock::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Stock {
    Table,
    Id,
    UserId,
    Status,
    StoreName,
    PhoneNumber,
    Email,
    Address,
    RegionId,
    CityId,
    Description,
    CreatedAt,
    UpdatedAt,
}
