use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

/// Confirmation body for toggles and other operations without a resource to return.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl MessageDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// One failed field constraint of a request body.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ViolationDto {
    pub field: String,
    pub message: String,
}

/// Body returned when a request fails validation.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ValidationErrorDto {
    pub error: String,
    pub violations: Vec<ViolationDto>,
}

/// Answer of an existence check such as "does this user like this post".
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ExistsDto {
    pub exists: bool,
}
