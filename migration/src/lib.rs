pub use sea_orm_migration::prelude::*;

mod m20250105_000001_create_rank_table;
mod m20250105_000002_create_user_table;
mod m20250105_000003_create_post_table;
mod m20250105_000004_create_article_table;
mod m20250105_000005_create_tag_table;
mod m20250105_000006_create_reason_table;
mod m20250105_000007_create_post_tag_table;
mod m20250105_000008_create_article_tag_table;
mod m20250105_000009_create_like_post_table;
mod m20250105_000010_create_like_article_table;
mod m20250105_000011_create_friend_table;
mod m20250105_000012_create_blocked_user_table;
mod m20250105_000013_create_comment_post_table;
mod m20250105_000014_create_comment_article_table;
mod m20250105_000015_create_profile_comment_table;
mod m20250105_000016_create_group_table;
mod m20250105_000017_create_group_user_table;
mod m20250105_000018_create_group_user_message_table;
mod m20250105_000019_create_report_comment_post_table;
mod m20250105_000020_create_report_comment_article_table;
mod m20250105_000021_create_report_post_table;
mod m20250105_000022_create_report_profile_comment_table;
mod m20250105_000023_create_report_user_table;
mod m20250105_000024_seed_rank_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20250105_000001_create_rank_table::Migration),
            Box::new(m20250105_000002_create_user_table::Migration),
            Box::new(m20250105_000003_create_post_table::Migration),
            Box::new(m20250105_000004_create_article_table::Migration),
            Box::new(m20250105_000005_create_tag_table::Migration),
            Box::new(m20250105_000006_create_reason_table::Migration),
            Box::new(m20250105_000007_create_post_tag_table::Migration),
            Box::new(m20250105_000008_create_article_tag_table::Migration),
            Box::new(m20250105_000009_create_like_post_table::Migration),
            Box::new(m20250105_000010_create_like_article_table::Migration),
            Box::new(m20250105_000011_create_friend_table::Migration),
            Box::new(m20250105_000012_create_blocked_user_table::Migration),
            Box::new(m20250105_000013_create_comment_post_table::Migration),
            Box::new(m20250105_000014_create_comment_article_table::Migration),
            Box::new(m20250105_000015_create_profile_comment_table::Migration),
            Box::new(m20250105_000016_create_group_table::Migration),
            Box::new(m20250105_000017_create_group_user_table::Migration),
            Box::new(m20250105_000018_create_group_user_message_table::Migration),
            Box::new(m20250105_000019_create_report_comment_post_table::Migration),
            Box::new(m20250105_000020_create_report_comment_article_table::Migration),
            Box::new(m20250105_000021_create_report_post_table::Migration),
            Box::new(m20250105_000022_create_report_profile_comment_table::Migration),
            Box::new(m20250105_000023_create_report_user_table::Migration),
            Box::new(m20250105_000024_seed_rank_table::Migration),
        ]
    }
}
