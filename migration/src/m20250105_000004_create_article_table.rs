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
                    .table(Article::Table)
                    .if_not_exists()
                    .col(pk_auto(Article::Id))
                    .col(integer(Article::IdUser))
                    .col(string(Article::Title))
                    .col(text(Article::Content))
                    .col(timestamp(Article::CreatedAt).default(Expr::current_timestamp()))
                    .col(boolean(Article::Highlight).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_article_id_user")
                            .from(Article::Table, Article::IdUser)
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
                    .name("idx_article_created_at")
                    .table(Article::Table)
                    .col(Article::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_article_created_at")
                    .table(Article::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Article::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Article {
    Table,
    Id,
    IdUser,
    Title,
    Content,
    CreatedAt,
    Highlight,
}
