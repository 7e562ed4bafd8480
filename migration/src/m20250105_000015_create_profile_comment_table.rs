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
                    .table(ProfileComment::Table)
                    .if_not_exists()
                    .col(pk_auto(ProfileComment::Id))
                    .col(integer(ProfileComment::IdUser))
                    .col(integer(ProfileComment::IdUserComment))
                    .col(string(ProfileComment::Description))
                    .col(timestamp(ProfileComment::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_comment_id_user")
                            .from(ProfileComment::Table, ProfileComment::IdUser)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profile_comment_id_user_comment")
                            .from(ProfileComment::Table, ProfileComment::IdUserComment)
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
            .drop_table(Table::drop().table(ProfileComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ProfileComment {
    Table,
    Id,
    IdUser,
    IdUserComment,
    Description,
    CreatedAt,
}
