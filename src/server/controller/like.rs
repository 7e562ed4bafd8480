//! Likes on posts and articles.
//!
//! Adding an existing like or removing an absent one is answered with 400.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::api::{ErrorDto, ExistsDto, MessageDto},
    server::{
        controller::{added, removed},
        data::{like_article::ArticleLikeRepository, like_post::PostLikeRepository},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
    },
};

/// Tag for grouping like endpoints in OpenAPI documentation
pub static LIKE_TAG: &str = "like";

/// Like a post.
///
/// # Access Control
/// - `Member` - Liking as oneself, or an admin
///
/// # Returns
/// - `200 OK` - Like added
/// - `400 Bad Request` - The user already likes the post
/// - `403 Forbidden` - Liking as another user
/// - `404 Not Found` - User or post not found
#[utoipa::path(
    post,
    path = "/api/likes/posts/{id_user}/{id_post}",
    tag = LIKE_TAG,
    params(
        ("id_user" = i32, Path, description = "User id"),
        ("id_post" = i32, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Like added", body = MessageDto),
        (status = 400, description = "Already liked", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User or post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn like_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id_user, id_post)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    let outcome = PostLikeRepository::new(&state.db)
        .add(id_user, id_post, &actor)
        .await?;

    added(outcome, "Like")
}

/// Remove a like from a post.
#[utoipa::path(
    delete,
    path = "/api/likes/posts/{id_user}/{id_post}",
    tag = LIKE_TAG,
    params(
        ("id_user" = i32, Path, description = "User id"),
        ("id_post" = i32, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Like removed", body = MessageDto),
        (status = 400, description = "Not liked", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User or post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlike_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id_user, id_post)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    let outcome = PostLikeRepository::new(&state.db)
        .remove(id_user, id_post, &actor)
        .await?;

    removed(outcome, "Like")
}

/// Check whether a user likes a post.
#[utoipa::path(
    get,
    path = "/api/likes/posts/{id_user}/{id_post}",
    tag = LIKE_TAG,
    params(
        ("id_user" = i32, Path, description = "User id"),
        ("id_post" = i32, Path, description = "Post id")
    ),
    responses(
        (status = 200, description = "Whether the like exists", body = ExistsDto),
        (status = 404, description = "User or post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn post_like_exists(
    State(state): State<AppState>,
    Path((id_user, id_post)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    match PostLikeRepository::new(&state.db)
        .exists(id_user, id_post)
        .await?
    {
        Some(exists) => Ok((StatusCode::OK, Json(ExistsDto { exists }))),
        None => Err(AppError::NotFound("User or post not found".to_string())),
    }
}

#[utoipa::path(
    post,
    path = "/api/likes/articles/{id_user}/{id_article}",
    tag = LIKE_TAG,
    params(
        ("id_user" = i32, Path, description = "User id"),
        ("id_article" = i32, Path, description = "Article id")
    ),
    responses(
        (status = 200, description = "Like added", body = MessageDto),
        (status = 400, description = "Already liked", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User or article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn like_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id_user, id_article)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    let outcome = ArticleLikeRepository::new(&state.db)
        .add(id_user, id_article, &actor)
        .await?;

    added(outcome, "Like")
}

#[utoipa::path(
    delete,
    path = "/api/likes/articles/{id_user}/{id_article}",
    tag = LIKE_TAG,
    params(
        ("id_user" = i32, Path, description = "User id"),
        ("id_article" = i32, Path, description = "Article id")
    ),
    responses(
        (status = 200, description = "Like removed", body = MessageDto),
        (status = 400, description = "Not liked", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User or article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unlike_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id_user, id_article)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    let outcome = ArticleLikeRepository::new(&state.db)
        .remove(id_user, id_article, &actor)
        .await?;

    removed(outcome, "Like")
}

#[utoipa::path(
    get,
    path = "/api/likes/articles/{id_user}/{id_article}",
    tag = LIKE_TAG,
    params(
        ("id_user" = i32, Path, description = "User id"),
        ("id_article" = i32, Path, description = "Article id")
    ),
    responses(
        (status = 200, description = "Whether the like exists", body = ExistsDto),
        (status = 404, description = "User or article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn article_like_exists(
    State(state): State<AppState>,
    Path((id_user, id_article)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    match ArticleLikeRepository::new(&state.db)
        .exists(id_user, id_article)
        .await?
    {
        Some(exists) => Ok((StatusCode::OK, Json(ExistsDto { exists }))),
        None => Err(AppError::NotFound("User or article not found".to_string())),
    }
}
