use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250105_000002_create_user_table::UserData, m20250105_000006_create_reason_table::Reason,
    m20250105_000013_create_comment_post_table::CommentPost,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReportCommentPost::Table)
                    .if_not_exists()
                    .col(integer(ReportCommentPost::IdUser))
                    .col(integer(ReportCommentPost::IdComment))
                    .col(integer(ReportCommentPost::IdReason))
                    .col(string(ReportCommentPost::Description))
                    .col(timestamp(ReportCommentPost::ReportedAt).default(Expr::current_timestamp()))
                    .col(boolean(ReportCommentPost::Viewed).default(false))
                    .primary_key(
                        Index::create()
                            .col(ReportCommentPost::IdUser)
                            .col(ReportCommentPost::IdComment)
                            .col(ReportCommentPost::IdReason),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_comment_post_id_user")
                            .from(ReportCommentPost::Table, ReportCommentPost::IdUser)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_comment_post_id_comment")
                            .from(ReportCommentPost::Table, ReportCommentPost::IdComment)
                            .to(CommentPost::Table, CommentPost::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_comment_post_id_reason")
                            .from(ReportCommentPost::Table, ReportCommentPost::IdReason)
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
            .drop_table(Table::drop().table(ReportCommentPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReportCommentPost {
    Table,
    IdUser,
    IdComment,
    IdReason,
    Description,
    ReportedAt,
    Viewed,
}
