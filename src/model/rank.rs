use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RankDto {
    pub id_rank: i32,
    pub name: String,
    pub rank_level: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct AddRankDto {
    #[validate(length(min = 1, max = 30, message = "Rank name must be at most 30 characters"))]
    pub name: String,
    #[validate(range(min = 0, message = "Rank level cannot be negative"))]
    pub rank_level: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct PutRankDto {
    pub id_rank: i32,
    #[validate(length(min = 1, max = 30, message = "Rank name must be at most 30 characters"))]
    pub name: String,
    #[validate(range(min = 0, message = "Rank level cannot be negative"))]
    pub rank_level: i32,
}
