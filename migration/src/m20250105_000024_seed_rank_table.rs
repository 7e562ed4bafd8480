use sea_orm_migration::prelude::*;

use super::m20250105_000001_create_rank_table::Rank;

/// Default ranks, ordered from the lowest level. New accounts receive the lowest one.
const DEFAULT_RANKS: [(&str, i32); 5] = [
    ("Blocked", 0),
    ("User", 1),
    ("Redactor", 2),
    ("Moderator", 3),
    ("Admin", 4),
];

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let mut insert = Query::insert();
        insert
            .into_table(Rank::Table)
            .columns([Rank::Name, Rank::RankLevel]);

        for (name, level) in DEFAULT_RANKS {
            insert.values_panic([name.into(), level.into()]);
        }

        manager.exec_stmt(insert).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let names: Vec<&str> = DEFAULT_RANKS.iter().map(|(name, _)| *name).collect();

        manager
            .exec_stmt(
                Query::delete()
                    .from_table(Rank::Table)
                    .and_where(Expr::col(Rank::Name).is_in(names))
                    .to_owned(),
            )
            .await
    }
}
