//! Factories for comments attached to posts and articles.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment by `id_user` under `id_post`.
pub async fn create_post_comment(
    db: &DatabaseConnection,
    id_user: i32,
    id_post: i32,
) -> Result<entity::comment_post::Model, DbErr> {
    entity::comment_post::ActiveModel {
        id_user: ActiveValue::Set(id_user),
        id_post: ActiveValue::Set(id_post),
        description: ActiveValue::Set(format!("Comment {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}

/// Creates a comment by `id_user` under `id_article`.
pub async fn create_article_comment(
    db: &DatabaseConnection,
    id_user: i32,
    id_article: i32,
) -> Result<entity::comment_article::Model, DbErr> {
    entity::comment_article::ActiveModel {
        id_user: ActiveValue::Set(id_user),
        id_article: ActiveValue::Set(id_article),
        description: ActiveValue::Set(format!("Comment {}", next_id())),
        created_at: ActiveValue::Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await
}
