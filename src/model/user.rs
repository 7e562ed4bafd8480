use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

use crate::model::link::LinksDto;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id_user: i32,
    pub nick: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub rank_name: String,
    pub links: LinksDto,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct AddUserDto {
    #[validate(length(min = 5, max = 30, message = "Nick must be between 5 and 30 characters"))]
    pub nick: String,
    #[validate(length(
        min = 5,
        max = 30,
        message = "Password must be between 5 and 30 characters"
    ))]
    pub password: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 5, max = 20, message = "Invalid phone number"))]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct PutUserDto {
    pub id_user: i32,
    #[validate(length(min = 5, max = 30, message = "Nick must be between 5 and 30 characters"))]
    pub nick: String,
    #[validate(email(message = "Invalid email address"))]
    pub email: String,
    #[validate(length(min = 5, max = 20, message = "Invalid phone number"))]
    pub phone_number: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UserRankDto {
    pub id_user: i32,
    pub id_rank: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChangePasswordDto {
    pub id_user: i32,
    pub old_password: String,
    #[validate(length(
        min = 5,
        max = 30,
        message = "Password must be between 5 and 30 characters"
    ))]
    pub new_password: String,
}

/// Password reset performed by an administrator, without the old password.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct ChangePasswordShortDto {
    pub id_user: i32,
    #[validate(length(
        min = 5,
        max = 30,
        message = "Password must be between 5 and 30 characters"
    ))]
    pub new_password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct CheckNickDto {
    #[validate(length(min = 1, max = 30, message = "Nick must be at most 30 characters"))]
    pub nick: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ExistNickDto {
    pub exists: bool,
}

/// Profile photo carried as base64 text together with its content type.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UserPhotoDto {
    #[validate(length(min = 1, max = 100, message = "Invalid photo type"))]
    pub photo_type: String,
    #[validate(length(min = 1, message = "Photo data is required"))]
    pub base64_photo: String,
}
