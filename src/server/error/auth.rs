use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// The request carries no `Authorization: Bearer` header.
    #[error("Missing bearer token")]
    MissingToken,

    /// The bearer token is malformed, has a bad signature, or is expired.
    #[error("Invalid bearer token: {0}")]
    InvalidToken(#[source] jsonwebtoken::errors::Error),

    /// The token is valid but its subject no longer exists.
    #[error("User {0} from token not found in database")]
    UserNotInDatabase(i32),

    /// The user is authenticated but not allowed to perform the action.
    ///
    /// # Fields
    /// - Id of the acting user
    /// - Description of the denied action, logged server-side only
    #[error("User {0} denied access: {1}")]
    AccessDenied(i32, String),

    /// Login with an unknown nick or a wrong password.
    #[error("Invalid nick or password")]
    InvalidCredentials,

    /// Refresh token unknown, already rotated, or expired.
    #[error("Invalid or expired refresh token")]
    InvalidRefreshToken,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to appropriate HTTP status codes and user-friendly error messages:
/// - `MissingToken` / `InvalidToken` / `UserNotInDatabase` → 401 Unauthorized
/// - `AccessDenied` → 403 Forbidden
/// - `InvalidCredentials` / `InvalidRefreshToken` → 403 Forbidden
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::MissingToken | Self::InvalidToken(_) | Self::UserNotInDatabase(_) => {
                (StatusCode::UNAUTHORIZED, "Authentication required")
            }
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                "You don't have permission to perform this action",
            ),
            Self::InvalidCredentials => (StatusCode::FORBIDDEN, "Invalid nick or password"),
            Self::InvalidRefreshToken => {
                (StatusCode::FORBIDDEN, "Invalid or expired refresh token")
            }
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
