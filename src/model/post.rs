use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::comment::PostCommentDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TagDto {
    pub id_tag: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDto {
    pub id_post: i32,
    pub id_user: i32,
    pub nick: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub highlight: bool,
    pub likes: u64,
    pub comments_count: u64,
    pub tags: Vec<TagDto>,
}

/// A single post together with its comments, oldest first.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostDetailsDto {
    #[serde(flatten)]
    pub post: PostDto,
    pub comments: Vec<PostCommentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct PostQtyDto {
    pub posts: Vec<PostDto>,
    /// Whether more posts exist past the requested quantity.
    pub is_next: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct NewPostDto {
    pub id_user: i32,
    #[validate(length(min = 1, max = 200, message = "Content must be at most 200 characters"))]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct PutPostDto {
    pub id_post: i32,
    #[validate(length(min = 1, max = 200, message = "Content must be at most 200 characters"))]
    pub content: String,
    #[serde(default)]
    pub tags: Vec<String>,
}
