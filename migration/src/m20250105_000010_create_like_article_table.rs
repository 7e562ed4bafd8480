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
                    .table(LikeArticle::Table)
                    .if_not_exists()
                    .col(integer(LikeArticle::IdUser))
                    .col(integer(LikeArticle::IdArticle))
                    .primary_key(Index::create().col(LikeArticle::IdUser).col(LikeArticle::IdArticle))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_article_id_user")
                            .from(LikeArticle::Table, LikeArticle::IdUser)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_like_article_id_article")
                            .from(LikeArticle::Table, LikeArticle::IdArticle)
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
            .drop_table(Table::drop().table(LikeArticle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LikeArticle {
    Table,
    IdUser,
    IdArticle,
}
