//! Post factory for creating test post entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test posts with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let post = PostFactory::new(&db, user.id)
///     .content("Hello")
///     .created_at(Utc::now() - Duration::days(1))
///     .build()
///     .await?;
/// ```
pub struct PostFactory<'a> {
    db: &'a DatabaseConnection,
    id_user: i32,
    content: String,
    created_at: DateTime<Utc>,
    highlight: bool,
}

impl<'a> PostFactory<'a> {
    /// Creates a new PostFactory for the given author.
    ///
    /// Defaults:
    /// - content: `"Post content {id}"`
    /// - created_at: now
    /// - highlight: `false`
    pub fn new(db: &'a DatabaseConnection, id_user: i32) -> Self {
        Self {
            db,
            id_user,
            content: format!("Post content {}", next_id()),
            created_at: Utc::now(),
            highlight: false,
        }
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = highlight;
        self
    }

    /// Builds and inserts the post entity into the database.
    pub async fn build(self) -> Result<entity::post::Model, DbErr> {
        entity::post::ActiveModel {
            id_user: ActiveValue::Set(self.id_user),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(self.created_at),
            highlight: ActiveValue::Set(self.highlight),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a post by `id_user` with default values.
pub async fn create_post(db: &DatabaseConnection, id_user: i32) -> Result<entity::post::Model, DbErr> {
    PostFactory::new(db, id_user).build().await
}

/// Records a like of `id_user` on `id_post`.
pub async fn like_post(
    db: &DatabaseConnection,
    id_user: i32,
    id_post: i32,
) -> Result<entity::like_post::Model, DbErr> {
    entity::like_post::ActiveModel {
        id_user: ActiveValue::Set(id_user),
        id_post: ActiveValue::Set(id_post),
    }
    .insert(db)
    .await
}
