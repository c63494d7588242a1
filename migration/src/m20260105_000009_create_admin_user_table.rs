use sea_orm_migration::{prelude::*, schema::*};

use super::m20260105_000008_create_role_table::Role;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminUser::Id))
                    .col(string(AdminUser::Username))
                    .col(string_uniq(AdminUser::Login))
                    .col(string(AdminUser::PasswordHash))
                    .col(integer(AdminUser::RoleId))
                    .col(timestamp_with_time_zone(AdminUser::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_admin_user_role_id")
                            .from(AdminUser::Table, AdminUser::RoleId)
                            .to(Role::Table, Role::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdminUser {
    Table,
    Id,
    Username,
    Login,
    PasswordHash,
    RoleId,
    CreatedAt,
}
