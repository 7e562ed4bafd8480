use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250105_000002_create_user_table::UserData, m20250105_000006_create_reason_table::Reason,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ReportUser::Table)
                    .if_not_exists()
                    .col(pk_auto(ReportUser::Id))
                    .col(integer(ReportUser::IdUserReported))
                    .col(integer(ReportUser::IdUserReporting))
                    .col(integer(ReportUser::IdReason))
                    .col(string(ReportUser::Description))
                    .col(timestamp(ReportUser::ReportedAt).default(Expr::current_timestamp()))
                    .col(boolean(ReportUser::Viewed).default(false))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_user_id_user_reported")
                            .from(ReportUser::Table, ReportUser::IdUserReported)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_user_id_user_reporting")
                            .from(ReportUser::Table, ReportUser::IdUserReporting)
                            .to(UserData::Table, UserData::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_report_user_id_reason")
                            .from(ReportUser::Table, ReportUser::IdReason)
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
            .drop_table(Table::drop().table(ReportUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ReportUser {
    Table,
    Id,
    IdUserReported,
    IdUserReporting,
    IdReason,
    Description,
    ReportedAt,
    Viewed,
}
