use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Moto::Table)
                    .if_not_exists()
                    .col(pk_auto(Moto::Id))
                    .col(big_integer(Moto::UserId))
                    .col(string(Moto::Status).default("pending"))
                    .col(integer_null(Moto::BrandId))
                    .col(integer_null(Moto::ModelId))
                    .col(integer(Moto::Year))
                    .col(big_integer(Moto::Price))
                    .col(text_null(Moto::Description))
                    .col(timestamp_with_time_zone(Moto::CreatedAt))
                    .col(timestamp_with_time_zone(Moto::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Moto::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Moto {
    Table,
    Id,
    UserId,
    Status,
    BrandId,
    ModelId,
    Year,
    Price,
    Description,
    CreatedAt,
    UpdatedAt,
}
