use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::{comment::ArticleCommentDto, post::TagDto};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDto {
    pub id_article: i32,
    pub id_user: i32,
    pub nick: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub highlight: bool,
    pub likes: u64,
    pub comments_count: u64,
    pub tags: Vec<TagDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleDetailsDto {
    #[serde(flatten)]
    pub article: ArticleDto,
    pub comments: Vec<ArticleCommentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleQtyDto {
    pub articles: Vec<ArticleDto>,
    pub is_next: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct NewArticleDto {
    pub id_user: i32,
    #[validate(length(min = 1, max = 30, message = "Title must be at most 30 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 200, message = "Content must be at most 200 characters"))]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct PutArticleDto {
    pub id_article: i32,
    #[validate(length(min = 1, max = 30, message = "Title must be at most 30 characters"))]
    pub title: String,
    #[validate(length(min = 1, max = 200, message = "Content must be at most 200 characters"))]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
