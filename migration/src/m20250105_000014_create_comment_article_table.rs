use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250105_000002_create_user_table::UserData, m20250105_000004_create_article_table::Article};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CommentArticle::Table)
                    .if_not_exists()
                    .col(pk_auto(CommentArticle::Id))
                    .col(integer(CommentArticle::IdUser))
                    .col(integer(CommentArticle::IdArticle))
                    .col(string(CommentArticle::Description))
                    .col(timestamp(CommentArticle::CreatedAt).default(Expr::current_timestamp()))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_article_id_user")
                            .from(CommentArticle::Table, CommentArticle::IdUser)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_comment_article_id_article")
                            .from(CommentArticle::Table, CommentArticle::IdArticle)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CommentArticle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum CommentArticle {
    Table,
    Id,
    IdUser,
    IdArticle,
    Description,
    CreatedAt,
}
