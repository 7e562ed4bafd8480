use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        profile_comment::{NewProfileCommentDto, ProfileCommentDto, PutProfileCommentDto},
    },
    server::{
        data::profile_comment::ProfileCommentRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
        util::{
            authorizer::ensure_self_or_admin,
            validation::{ensure_same_id, validate_request},
        },
    },
};

/// Tag for grouping profile comment endpoints in OpenAPI documentation
pub static PROFILE_COMMENT_TAG: &str = "profile-comment";

fn comment_not_found() -> AppError {
    AppError::NotFound("Profile comment not found".to_string())
}

/// Get the comments left on a user's profile, newest first.
///
/// Each comment carries its author's nick and profile photo.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Comments on the profile
/// - `404 Not Found` - User not found
#[utoipa::path(
    get,
    path = "/api/users/{id}/profile-comments",
    tag = PROFILE_COMMENT_TAG,
    params(("id" = i32, Path, description = "Profile owner id")),
    responses(
        (status = 200, description = "Comments on the profile", body = Vec<ProfileCommentDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_profile_comments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match ProfileCommentRepository::new(&state.db)
        .get_by_profile(id)
        .await?
    {
        Some(comments) => Ok((
            StatusCode::OK,
            Json(comments.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
        )),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Leave a comment on a user's profile.
///
/// # Access Control
/// - `Member` - Commenting as oneself, or an admin
#[utoipa::path(
    post,
    path = "/api/profile-comments",
    tag = PROFILE_COMMENT_TAG,
    request_body = NewProfileCommentDto,
    responses(
        (status = 201, description = "Comment created", body = ProfileCommentDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Author or profile owner not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_profile_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewProfileCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    validate_request(&payload)?;
    ensure_self_or_admin(&actor, payload.id_user)?;

    match ProfileCommentRepository::new(&state.db)
        .create(payload.id_user, payload.id_user_comment, payload.description)
        .await?
    {
        Some(comment) => Ok((StatusCode::CREATED, Json(comment.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Edit a profile comment.
///
/// # Access Control
/// - `Member` - The author or an admin
#[utoipa::path(
    put,
    path = "/api/profile-comments/{id}",
    tag = PROFILE_COMMENT_TAG,
    params(("id" = i32, Path, description = "Profile comment id")),
    request_body = PutProfileCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = ProfileCommentDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_profile_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PutProfileCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    ensure_same_id(id, payload.id_profile_comment)?;
    validate_request(&payload)?;

    match ProfileCommentRepository::new(&state.db)
        .update(id, payload.description, &actor)
        .await?
    {
        Some(comment) => Ok((StatusCode::OK, Json(comment.into_dto()))),
        None => Err(comment_not_found()),
    }
}

/// Delete a profile comment and its reports.
///
/// # Access Control
/// - `Member` - The author, the profile owner, an admin or a moderator
#[utoipa::path(
    delete,
    path = "/api/profile-comments/{id}",
    tag = PROFILE_COMMENT_TAG,
    params(("id" = i32, Path, description = "Profile comment id")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_profile_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    match ProfileCommentRepository::new(&state.db)
        .delete(id, &actor)
        .await?
    {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(comment_not_found()),
    }
}
