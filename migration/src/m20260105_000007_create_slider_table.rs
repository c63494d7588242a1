use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Slider::Table)
                    .if_not_exists()
                    .col(pk_auto(Slider::Id))
                    .col(string(Slider::Title))
                    .col(string(Slider::ImagePath))
                    .col(string(Slider::Platform))
                    .col(timestamp_with_time_zone(Slider::CreatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Slider::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Slider {
    Table,
    Id,
    Title,
    ImagePath,
    Platform,
    CreatedAt,
}
