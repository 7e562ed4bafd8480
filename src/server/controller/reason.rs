use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        report::{NewReasonDto, ReasonDto},
    },
    server::{
        data::reason::ReasonRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
        util::validation::validate_request,
    },
};

/// Tag for grouping report reason endpoints in OpenAPI documentation
pub static REASON_TAG: &str = "reason";

/// Get all report reasons.
///
/// Readable by anyone so reporters can pick a reason.
#[utoipa::path(
    get,
    path = "/api/reasons",
    tag = REASON_TAG,
    responses(
        (status = 200, description = "All reasons", body = Vec<ReasonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_reasons(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let reasons = ReasonRepository::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(reasons.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Add a report reason.
///
/// # Access Control
/// - `Staff`
#[utoipa::path(
    post,
    path = "/api/reasons",
    tag = REASON_TAG,
    request_body = NewReasonDto,
    responses(
        (status = 201, description = "Reason created", body = ReasonDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_reason(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewReasonDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    validate_request(&payload)?;

    let reason = ReasonRepository::new(&state.db).create(payload.name).await?;

    Ok((StatusCode::CREATED, Json(reason.into_dto())))
}

/// Delete a report reason and every report citing it.
///
/// # Access Control
/// - `Staff`
///
/// # Returns
/// - `204 No Content` - Reason deleted
/// - `404 Not Found` - Reason not found
#[utoipa::path(
    delete,
    path = "/api/reasons/{id}",
    tag = REASON_TAG,
    params(("id" = i32, Path, description = "Reason id")),
    responses(
        (status = 204, description = "Reason deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not staff", body = ErrorDto),
        (status = 404, description = "Reason not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_reason(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Staff])
        .await?;

    match ReasonRepository::new(&state.db).delete(id).await? {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound("Reason not found".to_string())),
    }
}
