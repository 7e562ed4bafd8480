//! Error hierarchy of the backend.
//!
//! Repositories, services and handlers all return [`AppError`]. Its `IntoResponse`
//! implementation decides the status code, so handlers only propagate with `?`.
//! Client errors carry their message in an [`ErrorDto`]; server errors are logged and
//! answered with a fixed message.

pub mod auth;
pub mod config;
pub mod domain;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::{ErrorDto, ValidationErrorDto},
    server::{
        error::{auth::AuthError, config::ConfigError, domain::DomainError, internal::InternalError},
        util::validation::violations,
    },
};

#[derive(Error, Debug)]
pub enum AppError {
    /// Missing or malformed environment at startup.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Missing, invalid or insufficient credentials. Mapped by `AuthError` to 401 or 403.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// Request conflicts with stored data, such as a taken nick. Always 400.
    #[error(transparent)]
    DomainErr(#[from] DomainError),

    /// Request body broke its field constraints. 400 with one violation per rule.
    #[error(transparent)]
    ValidationErr(#[from] validator::ValidationErrors),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Hashing or token signing failed.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Binding or serving the listener failed.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// A referenced row does not exist. 404 with the message.
    #[error("{0}")]
    NotFound(String),

    /// Request is well-formed but makes no sense, such as liking a post twice. 400 with the message.
    #[error("{0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::DomainErr(err) => err.into_response(),
            Self::ValidationErr(errors) => (
                StatusCode::BAD_REQUEST,
                Json(ValidationErrorDto {
                    error: "Request validation failed".to_string(),
                    violations: violations(&errors),
                }),
            )
                .into_response(),
            Self::NotFound(msg) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto { error: msg })).into_response()
            }
            Self::BadRequest(msg) => {
                (StatusCode::BAD_REQUEST, Json(ErrorDto { error: msg })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Logs the wrapped error and answers 500 without exposing its details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}
