//! Profile comment factory.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates a comment written by `id_author` on the profile of `id_profile`.
pub async fn create_profile_comment(
    db: &DatabaseConnection,
    id_author: i32,
    id_profile: i32,
) -> Result<entity::profile_comment::Model, DbErr> {
    create_profile_comment_at(db, id_author, id_profile, Utc::now()).await
}

/// Same as [`create_profile_comment`] with an explicit creation time.
pub async fn create_profile_comment_at(
    db: &DatabaseConnection,
    id_author: i32,
    id_profile: i32,
    created_at: DateTime<Utc>,
) -> Result<entity::profile_comment::Model, DbErr> {
    entity::profile_comment::ActiveModel {
        id_user: ActiveValue::Set(id_author),
        id_user_comment: ActiveValue::Set(id_profile),
        description: ActiveValue::Set(format!("Profile comment {}", next_id())),
        created_at: ActiveValue::Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await
}
