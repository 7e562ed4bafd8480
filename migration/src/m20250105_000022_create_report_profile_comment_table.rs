use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250105_000002_create_user_table::UserData, m20250105_000006_create_reason_table::Reason,
    m20250105_000015_create_profile_comment_table::ProfileComment,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReportProfileComment::Table)
                    .if_not_exists()
                    .col(integer(ReportProfileComment::IdUser))
                    .col(integer(ReportProfileComment::IdProfileComment))
                    .col(integer(ReportProfileComment::IdReason))
                    .col(string(ReportProfileComment::Description))
                    .col(timestamp(ReportProfileComment::ReportedAt).default(Expr::current_timestamp()))
                    .col(boolean(ReportProfileComment::Viewed).default(false))
                    .primary_key(
                        Index::create()
                            .col(ReportProfileComment::IdUser)
                            .col(ReportProfileComment::IdProfileComment)
                            .col(ReportProfileComment::IdReason),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_profile_comment_id_user")
                            .from(ReportProfileComment::Table, ReportProfileComment::IdUser)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_profile_comment_id_profile_comment")
                            .from(ReportProfileComment::Table, ReportProfileComment::IdProfileComment)
                            .to(ProfileComment::Table, ProfileComment::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_profile_comment_id_reason")
                            .from(ReportProfileComment::Table, ReportProfileComment::IdReason)
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
            .drop_table(Table::drop().table(ReportProfileComment::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReportProfileComment {
    Table,
    IdUser,
    IdProfileComment,
    IdReason,
    Description,
    ReportedAt,
    Viewed,
}
