use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LoginRequestDto {
    #[validate(length(min = 1, max = 30, message = "Nick is required"))]
    pub nick: String,
    #[validate(length(min = 1, max = 30, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct RefreshTokenDto {
    #[validate(length(min = 1, message = "Refresh token is required"))]
    pub refresh_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TokenResponseDto {
    pub id_user: i32,
    pub nick: String,
    pub rank_name: String,
    pub token: String,
    pub refresh_token: String,
}
