use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReasonDto {
    pub id_reason: i32,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct NewReasonDto {
    #[validate(length(min = 2, max = 50, message = "Reason must be between 2 and 50 characters"))]
    pub name: String,
}

/// Report filed by `id_user` against a comment, post or profile comment.
///
/// `id_target` is the id of the reported comment, post or profile comment,
/// depending on the endpoint the report was read from.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportDto {
    pub id_user: i32,
    pub id_target: i32,
    pub id_reason: i32,
    pub reason: String,
    pub description: String,
    pub reported_at: DateTime<Utc>,
    pub viewed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct NewReportDto {
    pub id_user: i32,
    pub id_target: i32,
    pub id_reason: i32,
    #[validate(length(
        min = 2,
        max = 200,
        message = "Description must be between 2 and 200 characters"
    ))]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct UpdateReportDto {
    #[validate(length(
        min = 2,
        max = 200,
        message = "Description must be between 2 and 200 characters"
    ))]
    pub description: String,
    pub viewed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReportUserDto {
    pub id_report: i32,
    pub id_user_reported: i32,
    pub id_user_reporting: i32,
    pub id_reason: i32,
    pub reason: String,
    pub description: String,
    pub reported_at: DateTime<Utc>,
    pub viewed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
pub struct NewReportUserDto {
    pub id_user_reported: i32,
    pub id_user_reporting: i32,
    pub id_reason: i32,
    #[validate(length(
        min = 2,
        max = 200,
        message = "Description must be between 2 and 200 characters"
    ))]
    pub description: String,
}
