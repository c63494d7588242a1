use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Brand::Table)
                    .if_not_exists()
                    .col(pk_auto(Brand::Id))
                    .col(string(Brand::Name))
                    .col(string_null(Brand::LogoPath))
                    .col(timestamp_with_time_zone(Brand::CreatedAt))
                    .col(timestamp_with_time_zone(Brand::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Brand::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Brand {
    Table,
    Id,
    Name,
    LogoPath,
    CreatedAt,
    UpdatedAt,
}
