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
                    .table(Friend::Table)
                    .if_not_exists()
                    .col(integer(Friend::IdUser))
                    .col(integer(Friend::IdUserFriend))
                    .primary_key(Index::create().col(Friend::IdUser).col(Friend::IdUserFriend))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_id_user")
                            .from(Friend::Table, Friend::IdUser)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_friend_id_user_friend")
                            .from(Friend::Table, Friend::IdUserFriend)
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
            .drop_table(Table::drop().table(Friend::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Friend {
    Table,
    IdUser,
    IdUserFriend,
}
