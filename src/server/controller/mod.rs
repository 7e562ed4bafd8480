//! HTTP request handlers.
//!
//! Handlers authenticate the caller with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! validate the request body, call a repository or service and convert the
//! result into a DTO. `None` from the data layer becomes 404.

pub mod article;
pub mod auth;
pub mod comment;
pub mod friend;
pub mod group;
pub mod like;
pub mod link;
pub mod post;
pub mod profile_comment;
pub mod rank;
pub mod reason;
pub mod report;
pub mod tag;
pub mod user;

use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::{
    model::api::MessageDto,
    server::{
        error::AppError,
        model::outcome::{AddOutcome, RemoveOutcome},
    },
};

/// Query of the quantity listings of posts and articles.
#[derive(Deserialize)]
pub struct QtyParams {
    pub qty: i64,
    /// Only entries created before this instant are listed; defaults to now
    #[serde(default)]
    pub time: Option<DateTime<Utc>>,
}

/// Maps the result of adding a relation onto a response.
///
/// # Returns
/// - `Ok(MessageDto)` - Relation created
/// - `Err(AppError::BadRequest)` - Relation already existed
/// - `Err(AppError::NotFound)` - One of the related rows is missing
pub fn added(outcome: AddOutcome, what: &str) -> Result<Json<MessageDto>, AppError> {
    match outcome {
        AddOutcome::Created => Ok(Json(MessageDto::new(format!("{} added", what)))),
        AddOutcome::AlreadyExists => Err(AppError::BadRequest(format!("{} already exists", what))),
        AddOutcome::NotFound => Err(AppError::NotFound(format!("{} target not found", what))),
    }
}

/// Maps the result of removing a relation onto a response.
pub fn removed(outcome: RemoveOutcome, what: &str) -> Result<Json<MessageDto>, AppError> {
    match outcome {
        RemoveOutcome::Removed => Ok(Json(MessageDto::new(format!("{} removed", what)))),
        RemoveOutcome::Absent => Err(AppError::BadRequest(format!("{} does not exist", what))),
        RemoveOutcome::NotFound => Err(AppError::NotFound(format!("{} target not found", what))),
    }
}
