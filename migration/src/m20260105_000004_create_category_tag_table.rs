use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CategoryTag::Table)
                    .if_not_exists()
                    .col(string(CategoryTag::EntityKind))
                    .col(integer(CategoryTag::EntityId))
                    .col(string(CategoryTag::Category))
                    .primary_key(
                        Index::create()
                            .col(CategoryTag::EntityKind)
                            .col(CategoryTag::EntityId)
                            .col(CategoryTag::Category),
                    )
                    .to_owned(),
            )
            .await?;

        // Listing by category filters on (kind, category) before joining back by id.
        manager
            .create_index(
                Index::create()
                    .name("idx_category_tag_kind_category")
                    .table(CategoryTag::Table)
                    .col(CategoryTag::EntityKind)
                    .col(CategoryTag::Category)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CategoryTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CategoryTag {
    Table,
    EntityKind,
    EntityId,
    Category,
}
