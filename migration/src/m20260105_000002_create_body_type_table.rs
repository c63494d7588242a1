use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BodyType::Table)
                    .if_not_exists()
                    .col(pk_auto(BodyType::Id))
                    .col(string(BodyType::Name))
                    .col(string_null(BodyType::ImagePath))
                    .col(timestamp_with_time_zone(BodyType::CreatedAt))
                    .col(timestamp_with_time_zone(BodyType::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BodyType::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BodyType {
    Table,
    Id,
    Name,
    ImagePath,
    CreatedAt,
    UpdatedAt,
}
