use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Truck::Table)
                    .if_not_exists()
                    .col(pk_auto(Truck::Id))
                    .col(big_integer(Truck::UserId))
                    .col(string(Truck::Status).default("pending"))
                    .col(integer_null(Truck::BrandId))
                    .col(integer_null(Truck::ModelId))
                    .col(integer(Truck::Year))
                    .col(big_integer(Truck::Price))
                    .col(integer_null(Truck::LoadCapacity))
                    .col(text_null(Truck::Description))
                    .col(timestamp_with_time_zone(Truck::CreatedAt))
                    .col(timestamp_with_time_zone(Truck::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Truck::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Truck {
    Table,
    Id,
    UserId,
    Status,
    BrandId,
    ModelId,
    Year,
    Price,
    LoadCapacity,
    Description,
    CreatedAt,
    UpdatedAt,
}
