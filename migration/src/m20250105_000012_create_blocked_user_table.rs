use sea_orm_migration::{prelude::*, schema::*};

use super::m20250105_000002_create_user_table::UserData;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BlockedUser::Table)
                    .if_not_exists()
                    .col(integer(BlockedUser::IdUser))
                    .col(integer(BlockedUser::IdUserBlocked))
                    .col(string_null(BlockedUser::Comment))
                    .col(timestamp(BlockedUser::BlockedAt).default(Expr::current_timestamp()))
                    .primary_key(
                        Index::create()
                            .col(BlockedUser::IdUser)
                            .col(BlockedUser::IdUserBlocked),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blocked_user_id_user")
                            .from(BlockedUser::Table, BlockedUser::IdUser)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_blocked_user_id_user_blocked")
                            .from(BlockedUser::Table, BlockedUser::IdUserBlocked)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BlockedUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum BlockedUser {
    Table,
    IdUser,
    IdUserBlocked,
    Comment,
    BlockedAt,
}
