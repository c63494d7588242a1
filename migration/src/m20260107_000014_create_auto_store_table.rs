use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000005_create_region_table::Region, m20260105_000006_create_city_table::City,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AutoStore::Table)
                    .if_not_exists()
                    .col(pk_auto(AutoStore::Id))
                    .col(big_integer(AutoStore::UserId))
                    .col(string(AutoStore::StoreName))
                    .col(string(AutoStore::PhoneNumber))
                    .col(string_null(AutoStore::Email))
                    .col(string_null(AutoStore::Address))
                    .col(string_null(AutoStore::LogoPath))
                    .col(json_binary(AutoStore::Images))
                    .col(integer_null(AutoStore::RegionId))
                    .col(integer_null(AutoStore::CityId))
                    .col(timestamp_with_time_zone(AutoStore::CreatedAt))
                    .col(timestamp_with_time_zone(AutoStore::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auto_store_region_id")
                            .from(AutoStore::Table, AutoStore::RegionId)
                            .to(Region::Table, Region::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_auto_store_city_id")
                            .from(AutoStore::Table, AutoStore::CityId)
                            .to(City::Table, City::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AutoStore::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AutoStore {
    Table,
    Id,
    UserId,
    StoreName,
    PhoneNumber,
    Email,
    Address,
    LogoPath,
    Images,
    RegionId,
    CityId,
    CreatedAt,
    UpdatedAt,
}
