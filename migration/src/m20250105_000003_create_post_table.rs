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
                    .table(Post::Table)
                    .if_not_exists()
                    .col(pk_auto(Post::Id))
                    .col(integer(Post::IdUser))
                    .col(text(Post::Content))
                    .col(timestamp(Post::CreatedAt).default(Expr::current_timestamp()))
                    .col(boolean(Post::Highlight).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_id_user")
                            .from(Post::Table, Post::IdUser)
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
                    .name("idx_post_created_at")
                    .table(Post::Table)
                    .col(Post::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("idx_post_created_at")
                    .table(Post::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Post::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Post {
    Table,
    Id,
    IdUser,
    Content,
    CreatedAt,
    Highlight,
}
