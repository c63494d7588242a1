use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Car::Table)
                    .if_not_exists()
                    .col(pk_auto(Car::Id))
                    .col(big_integer(Car::UserId))
                    .col(string(Car::Status).default("pending"))
                    .col(integer_null(Car::BrandId))
                    .col(integer_null(Car::ModelId))
                    .col(integer(Car::Year))
                    .col(big_integer(Car::Price))
                    .col(string_null(Car::Vin))
                    .col(text_null(Car::Description))
                    .col(timestamp_with_time_zone(Car::CreatedAt))
                    .col(timestamp_with_time_zone(Car::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Car::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Car {
    Table,
    Id,
    UserId,
    Status,
    BrandId,
    ModelId,
    Year,
    Price,
    Vin,
    Description,
    CreatedAt,
    UpdatedAt,
}
