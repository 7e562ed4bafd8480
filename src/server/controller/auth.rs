use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    model::{
        api::ErrorDto,
        auth::{LoginRequestDto, RefreshTokenDto, TokenResponseDto},
    },
    server::{
        error::AppError, service::user::UserService, state::AppState,
        util::validation::validate_request,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Log in with nick and password.
///
/// Issues a short-lived access token and a refresh token. The refresh token
/// replaces any token issued to the user before.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Access and refresh token
/// - `400 Bad Request` - Invalid request body
/// - `403 Forbidden` - Unknown nick or wrong password
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Logged in", body = TokenResponseDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 403, description = "Invalid nick or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequestDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_request(&payload)?;

    let tokens = UserService::new(&state.db, &state.tokens)
        .login(&payload.nick, &payload.password)
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}

/// Exchange a refresh token for a new token pair.
///
/// # Access Control
/// - Public; the refresh token is the credential
///
/// # Returns
/// - `200 OK` - New access and refresh token
/// - `403 Forbidden` - Refresh token unknown, already used or expired
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = AUTH_TAG,
    request_body = RefreshTokenDto,
    responses(
        (status = 200, description = "Token refreshed", body = TokenResponseDto),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 403, description = "Invalid or expired refresh token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn refresh(
    State(state): State<AppState>,
    Json(payload): Json<RefreshTokenDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_request(&payload)?;

    let tokens = UserService::new(&state.db, &state.tokens)
        .refresh(&payload.refresh_token)
        .await?;

    Ok((StatusCode::OK, Json(tokens.into_dto())))
}
