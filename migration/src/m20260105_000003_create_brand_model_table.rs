use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20260105_000001_create_brand_table::Brand, m20260105_000002_create_body_type_table::BodyType,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BrandModel::Table)
                    .if_not_exists()
                    .col(pk_auto(BrandModel::Id))
                    .col(integer(BrandModel::BrandId))
                    .col(integer_null(BrandModel::BodyTypeId))
                    .col(string(BrandModel::Name))
                    .col(timestamp_with_time_zone(BrandModel::CreatedAt))
                    .col(timestamp_with_time_zone(BrandModel::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_brand_model_brand_id")
                            .from(BrandModel::Table, BrandModel::BrandId)
                            .to(Brand::Table, Brand::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_brand_model_body_type_id")
                            .from(BrandModel::Table, BrandModel::BodyTypeId)
                            .to(BodyType::Table, BodyType::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BrandModel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BrandModel {
    Table,
    Id,
    BrandId,
    BodyTypeId,
    Name,
    CreatedAt,
    UpdatedAt,
}
