use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostCommentDto {
    pub id_comment: i32,
    pub id_user: i32,
    pub id_post: i32,
    pub nick: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct NewPostCommentDto {
    pub id_user: i32,
    pub id_post: i32,
    #[validate(length(min = 1, max = 200, message = "Comment must be at most 200 characters"))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct PutPostCommentDto {
    pub id_comment: i32,
    pub id_user: i32,
    pub id_post: i32,
    #[validate(length(min = 1, max = 200, message = "Comment must be at most 200 characters"))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ArticleCommentDto {
    pub id_comment: i32,
    pub id_user: i32,
    pub id_article: i32,
    pub nick: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct NewArticleCommentDto {
    pub id_user: i32,
    pub id_article: i32,
    #[validate(length(min = 1, max = 200, message = "Comment must be at most 200 characters"))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct PutArticleCommentDto {
    pub id_comment: i32,
    pub id_user: i32,
    pub id_article: i32,
    #[validate(length(min = 1, max = 200, message = "Comment must be at most 200 characters"))]
    pub description: String,
}
