use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct LinksDto {
    pub steam: Option<String>,
    pub discord: Option<String>,
    pub xbox: Option<String>,
    pub ps: Option<String>,
    pub epic: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct LinkDto {
    pub id_user: i32,
    #[validate(length(min = 1, max = 100, message = "Link must be at most 100 characters"))]
    pub link: String,
}
