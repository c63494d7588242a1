use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000005_create_region_table::Region;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(City::Table)
                    .if_not_exists()
                    .col(pk_auto(City::Id))
                    .col(integer(City::RegionId))
                    .col(string(City::NameTm))
                    .col(string(City::NameEn))
                    .col(string(City::NameRu))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_city_region_id")
                            .from(City::Table, City::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(City::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum City {
    Table,
    Id,
    RegionId,
    NameTm,
    NameEn,
    NameRu,
}
