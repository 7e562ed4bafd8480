use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250105_000002_create_user_table::UserData, m20250105_000003_create_post_table::Post};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LikePost::Table)
                    .if_not_exists()
                    .col(integer(LikePost::IdUser))
                    .col(integer(LikePost::IdPost))
                    .primary_key(Index::create().col(LikePost::IdUser).col(LikePost::IdPost))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_post_id_user")
                            .from(LikePost::Table, LikePost::IdUser)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_post_id_post")
                            .from(LikePost::Table, LikePost::IdPost)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LikePost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LikePost {
    Table,
    IdUser,
    IdPost,
}
