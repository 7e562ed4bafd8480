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
                    .table(CommentPost::Table)
                    .if_not_exists()
                    .col(pk_auto(CommentPost::Id))
                    .col(integer(CommentPost::IdUser))
                    .col(integer(CommentPost::IdPost))
                    .col(string(CommentPost::Description))
                    .col(timestamp(CommentPost::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_post_id_user")
                            .from(CommentPost::Table, CommentPost::IdUser)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_post_id_post")
                            .from(CommentPost::Table, CommentPost::IdPost)
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
            .drop_table(Table::drop().table(CommentPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommentPost {
    Table,
    Id,
    IdUser,
    IdPost,
    Description,
    CreatedAt,
}
