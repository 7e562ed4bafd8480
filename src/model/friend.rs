use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FriendDto {
    pub id_user: i32,
    pub nick: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BlockedUserDto {
    pub id_user: i32,
    pub nick: String,
    pub comment: Option<String>,
    pub blocked_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
pub struct BlockUserDto {
    #[validate(length(max = 200, message = "Comment must be at most 200 characters"))]
    pub comment: Option<String>,
}
