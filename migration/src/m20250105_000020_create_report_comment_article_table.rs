use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250105_000002_create_user_table::UserData, m20250105_000006_create_reason_table::Reason,
    m20250105_000014_create_comment_article_table::CommentArticle,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReportCommentArticle::Table)
                    .if_not_exists()
                    .col(integer(ReportCommentArticle::IdUser))
                    .col(integer(ReportCommentArticle::IdComment))
                    .col(integer(ReportCommentArticle::IdReason))
                    .col(string(ReportCommentArticle::Description))
                    .col(timestamp(ReportCommentArticle::ReportedAt).default(Expr::current_timestamp()))
                    .col(boolean(ReportCommentArticle::Viewed).default(false))
                    .primary_key(
                        Index::create()
                            .col(ReportCommentArticle::IdUser)
                            .col(ReportCommentArticle::IdComment)
                            .col(ReportCommentArticle::IdReason),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_comment_article_id_user")
                            .from(ReportCommentArticle::Table, ReportCommentArticle::IdUser)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_comment_article_id_comment")
                            .from(ReportCommentArticle::Table, ReportCommentArticle::IdComment)
                            .to(CommentArticle::Table, CommentArticle::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_comment_article_id_reason")
                            .from(ReportCommentArticle::Table, ReportCommentArticle::IdReason)
                            .to(Reason::Table, Reason::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ReportCommentArticle::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReportCommentArticle {
    Table,
    IdUser,
    IdComment,
    IdReason,
    Description,
    ReportedAt,
    Viewed,
}
