use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250105_000003_create_post_table::Post, m20250105_000005_create_tag_table::Tag};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PostTag::Table)
                    .if_not_exists()
                    .col(integer(PostTag::IdPost))
                    .col(integer(PostTag::IdTag))
                    .primary_key(Index::create().col(PostTag::IdPost).col(PostTag::IdTag))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_tag_id_post")
                            .from(PostTag::Table, PostTag::IdPost)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_post_tag_id_tag")
                            .from(PostTag::Table, PostTag::IdTag)
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
            .drop_table(Table::drop().table(PostTag::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PostTag {
    Table,
    IdPost,
    IdTag,
}
