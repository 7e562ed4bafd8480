use sea_orm_migration::{prelude::*, schema::*};

use super::m20250105_000001_create_rank_table::Rank;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserData::Table)
                    .if_not_exists()
                    .col(pk_auto(UserData::Id))
                    .col(integer(UserData::IdRank))
                    .col(string_uniq(UserData::Nick))
                    .col(string(UserData::Password))
                    .col(string(UserData::Email))
                    .col(string_null(UserData::PhoneNumber))
                    .col(timestamp(UserData::CreatedAt).default(Expr::current_timestamp()))
                    .col(ColumnDef::new(UserData::Photo).blob().null())
                    .col(string_null(UserData::PhotoType))
                    .col(string_null(UserData::SteamLink))
                    .col(string_null(UserData::DiscordLink))
                    .col(string_null(UserData::XboxLink))
                    .col(string_null(UserData::PsLink))
                    .col(string_null(UserData::EpicLink))
                    .col(string_null(UserData::RefreshToken))
                    .col(timestamp_null(UserData::RefreshTokenExp))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_data_id_rank")
                            .from(UserData::Table, UserData::IdRank)
                            .to(Rank::Table, Rank::Id)
                            .on_delete(ForeignKeyAction::Restrict)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserData::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UserData {
    Table,
    Id,
    IdRank,
    Nick,
    Password,
    Email,
    PhoneNumber,
    CreatedAt,
    Photo,
    PhotoType,
    SteamLink,
    DiscordLink,
    XboxLink,
    PsLink,
    EpicLink,
    RefreshToken,
    RefreshTokenExp,
}
