use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250105_000002_create_user_table::UserData, m20250105_000016_create_group_table::UserGroup,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GroupUserMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(GroupUserMessage::Id))
                    .col(integer(GroupUserMessage::IdGroup))
                    .col(integer(GroupUserMessage::IdUser))
                    .col(string(GroupUserMessage::Content))
                    .col(timestamp(GroupUserMessage::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_user_message_id_group")
                            .from(GroupUserMessage::Table, GroupUserMessage::IdGroup)
                            .to(UserGroup::Table, UserGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_user_message_id_user")
                            .from(GroupUserMessage::Table, GroupUserMessage::IdUser)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_group_user_message_id_group")
                    .table(GroupUserMessage::Table)
                    .col(GroupUserMessage::IdGroup)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_group_user_message_id_group")
                    .table(GroupUserMessage::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(GroupUserMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupUserMessage {
    Table,
    Id,
    IdGroup,
    IdUser,
    Content,
    CreatedAt,
}
