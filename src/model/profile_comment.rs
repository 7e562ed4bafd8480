use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Comment left on a user's profile, with its author's display data.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ProfileCommentDto {
    pub id_profile_comment: i32,
    pub id_user: i32,
    pub id_user_comment: i32,
    pub nick: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub photo_type: Option<String>,
    pub base64_photo: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct NewProfileCommentDto {
    /// Author of the comment.
    pub id_user: i32,
    /// Owner of the commented profile.
    pub id_user_comment: i32,
    #[validate(length(min = 1, max = 200, message = "Comment must be at most 200 characters"))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct PutProfileCommentDto {
    pub id_profile_comment: i32,
    #[validate(length(min = 1, max = 200, message = "Comment must be at most 200 characters"))]
    pub description: String,
}
