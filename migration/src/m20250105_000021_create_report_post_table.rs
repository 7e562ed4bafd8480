use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250105_000002_create_user_table::UserData, m20250105_000006_create_reason_table::Reason,
    m20250105_000003_create_post_table::Post,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReportPost::Table)
                    .if_not_exists()
                    .col(integer(ReportPost::IdUser))
                    .col(integer(ReportPost::IdPost))
                    .col(integer(ReportPost::IdReason))
                    .col(string(ReportPost::Description))
                    .col(timestamp(ReportPost::ReportedAt).default(Expr::current_timestamp()))
                    .col(boolean(ReportPost::Viewed).default(false))
                    .primary_key(
                        Index::create()
                            .col(ReportPost::IdUser)
                            .col(ReportPost::IdPost)
                            .col(ReportPost::IdReason),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_post_id_user")
                            .from(ReportPost::Table, ReportPost::IdUser)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_post_id_post")
                            .from(ReportPost::Table, ReportPost::IdPost)
                            .to(Post::Table, Post::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_post_id_reason")
                            .from(ReportPost::Table, ReportPost::IdReason)
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
            .drop_table(Table::drop().table(ReportPost::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReportPost {
    Table,
    IdUser,
    IdPost,
    IdReason,
    Description,
    ReportedAt,
    Viewed,
}
