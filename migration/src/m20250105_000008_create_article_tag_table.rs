use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250105_000004_create_article_table::Article, m20250105_000005_create_tag_table::Tag};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ArticleTag::Table)
                    .if_not_exists()
                    .col(integer(ArticleTag::IdArticle))
                    .col(integer(ArticleTag::IdTag))
                    .primary_key(Index::create().col(ArticleTag::IdArticle).col(ArticleTag::IdTag))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_tag_id_article")
                            .from(ArticleTag::Table, ArticleTag::IdArticle)
                            .to(Article::Table, Article::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_tag_id_tag")
                            .from(ArticleTag::Table, ArticleTag::IdTag)
                            .to(Tag::Table, Tag::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ArticleTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ArticleTag {
    Table,
    IdArticle,
    IdTag,
}
