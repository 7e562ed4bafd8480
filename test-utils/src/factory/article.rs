//! Article factory for creating test article entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test articles with customizable fields.
pub struct ArticleFactory<'a> {
    db: &'a DatabaseConnection,
    id_user: i32,
    title: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl<'a> ArticleFactory<'a> {
    /// Creates a new ArticleFactory for the given author.
    ///
    /// Defaults:
    /// - title: `"Article {id}"`
    /// - content: `"Article content {id}"`
    /// - created_at: now
    pub fn new(db: &'a DatabaseConnection, id_user: i32) -> Self {
        let id = next_id();
        Self {
            db,
            id_user,
            title: format!("Article {}", id),
            content: format!("Article content {}", id),
            created_at: Utc::now(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the article entity into the database.
    pub async fn build(self) -> Result<entity::article::Model, DbErr> {
        entity::article::ActiveModel {
            id_user: ActiveValue::Set(self.id_user),
            title: ActiveValue::Set(self.title),
            content: ActiveValue::Set(self.content),
            created_at: ActiveValue::Set(self.created_at),
            highlight: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an article by `id_user` with default values.
pub async fn create_article(
    db: &DatabaseConnection,
    id_user: i32,
) -> Result<entity::article::Model, DbErr> {
    ArticleFactory::new(db, id_user).build().await
}

/// Records a like of `id_user` on `id_article`.
pub async fn like_article(
    db: &DatabaseConnection,
    id_user: i32,
    id_article: i32,
) -> Result<entity::like_article::Model, DbErr> {
    entity::like_article::ActiveModel {
        id_user: ActiveValue::Set(id_user),
        id_article: ActiveValue::Set(id_article),
    }
    .insert(db)
    .await
}
