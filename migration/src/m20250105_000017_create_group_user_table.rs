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
                    .table(GroupUser::Table)
                    .if_not_exists()
                    .col(integer(GroupUser::IdGroup))
                    .col(integer(GroupUser::IdUser))
                    .primary_key(Index::create().col(GroupUser::IdGroup).col(GroupUser::IdUser))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_user_id_group")
                            .from(GroupUser::Table, GroupUser::IdGroup)
                            .to(UserGroup::Table, UserGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_group_user_id_user")
                            .from(GroupUser::Table, GroupUser::IdUser)
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
            .drop_table(Table::drop().table(GroupUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GroupUser {
    Table,
    IdGroup,
    IdUser,
}
