use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Business-rule violations raised by repositories.
///
/// Every variant is a client error: the request was well-formed but conflicts
/// with the current state of the data.
#[derive(Error, Debug, PartialEq)]
pub enum DomainError {
    /// A unique name (user nick, rank name, group name) is already taken.
    #[error("{0}")]
    SameName(String),

    /// A listing quantity is below the allowed floor.
    #[error("{0}")]
    WrongNumber(String),

    /// The row is still referenced by other rows and cannot be deleted.
    #[error("{0}")]
    Reference(String),

    /// A user tried to target themselves, or a group creator tried to leave their group.
    #[error("{0}")]
    UserCreator(String),

    /// The relation being added already exists (for example a repeated report).
    #[error("{0}")]
    Duplicate(String),
}

/// Converts domain errors into 400 Bad Request responses carrying the message.
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
