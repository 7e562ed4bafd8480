use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::friend::FriendDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupDto {
    pub id_group: i32,
    pub id_user_creator: i32,
    pub group_name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub members_count: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupDetailsDto {
    #[serde(flatten)]
    pub group: GroupDto,
    pub members: Vec<FriendDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct NewGroupDto {
    pub id_user_creator: i32,
    #[validate(length(min = 1, max = 30, message = "Group name must be at most 30 characters"))]
    pub group_name: String,
    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct PutGroupDto {
    pub id_group: i32,
    #[validate(length(min = 1, max = 30, message = "Group name must be at most 30 characters"))]
    pub group_name: String,
    #[validate(length(max = 200, message = "Description must be at most 200 characters"))]
    pub description: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct GroupMessageDto {
    pub id_message: i32,
    pub id_group: i32,
    pub id_user: i32,
    pub nick: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct NewGroupMessageDto {
    pub id_user: i32,
    #[validate(length(min = 1, max = 200, message = "Message must be at most 200 characters"))]
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct PutGroupMessageDto {
    pub id_message: i32,
    #[validate(length(min = 1, max = 200, message = "Message must be at most 200 characters"))]
    pub content: String,
}
