//! Comments on posts and articles.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        comment::{
            ArticleCommentDto, NewArticleCommentDto, NewPostCommentDto, PostCommentDto,
            PutArticleCommentDto, PutPostCommentDto,
        },
    },
    server::{
        data::{comment_article::ArticleCommentRepository, comment_post::PostCommentRepository},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::comment::{CreateCommentParams, UpdateCommentParams},
        state::AppState,
        util::{
            authorizer::ensure_self_or_admin,
            validation::{ensure_same_id, validate_request},
        },
    },
};

/// Tag for grouping comment endpoints in OpenAPI documentation
pub static COMMENT_TAG: &str = "comment";

fn comment_not_found() -> AppError {
    AppError::NotFound("Comment not found".to_string())
}

/// Get the comments of a post, oldest first.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Comments with author nicks
/// - `404 Not Found` - Post not found
#[utoipa::path(
    get,
    path = "/api/posts/{id}/comments",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "Comments of the post", body = Vec<PostCommentDto>),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post_comments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match PostCommentRepository::new(&state.db).get_by_post(id).await? {
        Some(comments) => Ok((
            StatusCode::OK,
            Json(comments.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
        )),
        None => Err(AppError::NotFound("Post not found".to_string())),
    }
}

/// Comment on a post.
///
/// # Access Control
/// - `Member` - Commenting as oneself, or an admin
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Author, post and comment text
///
/// # Returns
/// - `201 Created` - The created comment
/// - `400 Bad Request` - Invalid body
/// - `403 Forbidden` - Commenting as another user
/// - `404 Not Found` - Author or post not found
#[utoipa::path(
    post,
    path = "/api/post-comments",
    tag = COMMENT_TAG,
    request_body = NewPostCommentDto,
    responses(
        (status = 201, description = "Comment created", body = PostCommentDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Author or post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_post_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewPostCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    validate_request(&payload)?;
    ensure_self_or_admin(&actor, payload.id_user)?;

    match PostCommentRepository::new(&state.db)
        .create(CreateCommentParams::from_post_dto(payload))
        .await?
    {
        Some(comment) => Ok((StatusCode::CREATED, Json(comment.into_dto()))),
        None => Err(AppError::NotFound("User or post not found".to_string())),
    }
}

/// Edit a post comment.
///
/// The comment is matched on its id together with the author and post in the body.
///
/// # Access Control
/// - `Member` - The author or an admin
#[utoipa::path(
    put,
    path = "/api/post-comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    request_body = PutPostCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = PostCommentDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_post_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PutPostCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    ensure_same_id(id, payload.id_comment)?;
    validate_request(&payload)?;

    match PostCommentRepository::new(&state.db)
        .update(UpdateCommentParams::from_post_dto(payload), &actor)
        .await?
    {
        Some(comment) => Ok((StatusCode::OK, Json(comment.into_dto()))),
        None => Err(comment_not_found()),
    }
}

/// Delete a post comment and its reports.
///
/// # Access Control
/// - `Member` - The author, the post's author, an admin or a moderator
#[utoipa::path(
    delete,
    path = "/api/post-comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    match PostCommentRepository::new(&state.db).delete(id, &actor).await? {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(comment_not_found()),
    }
}

#[utoipa::path(
    get,
    path = "/api/articles/{id}/comments",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "Comments of the article", body = Vec<ArticleCommentDto>),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article_comments(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match ArticleCommentRepository::new(&state.db)
        .get_by_article(id)
        .await?
    {
        Some(comments) => Ok((
            StatusCode::OK,
            Json(comments.into_iter().map(|c| c.into_dto()).collect::<Vec<_>>()),
        )),
        None => Err(AppError::NotFound("Article not found".to_string())),
    }
}

/// Comment on an article as oneself.
#[utoipa::path(
    post,
    path = "/api/article-comments",
    tag = COMMENT_TAG,
    request_body = NewArticleCommentDto,
    responses(
        (status = 201, description = "Comment created", body = ArticleCommentDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Author or article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_article_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewArticleCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    validate_request(&payload)?;
    ensure_self_or_admin(&actor, payload.id_user)?;

    match ArticleCommentRepository::new(&state.db)
        .create(CreateCommentParams::from_article_dto(payload))
        .await?
    {
        Some(comment) => Ok((StatusCode::CREATED, Json(comment.into_dto()))),
        None => Err(AppError::NotFound("User or article not found".to_string())),
    }
}

#[utoipa::path(
    put,
    path = "/api/article-comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    request_body = PutArticleCommentDto,
    responses(
        (status = 200, description = "Comment updated", body = ArticleCommentDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_article_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PutArticleCommentDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    ensure_same_id(id, payload.id_comment)?;
    validate_request(&payload)?;

    match ArticleCommentRepository::new(&state.db)
        .update(UpdateCommentParams::from_article_dto(payload), &actor)
        .await?
    {
        Some(comment) => Ok((StatusCode::OK, Json(comment.into_dto()))),
        None => Err(comment_not_found()),
    }
}

#[utoipa::path(
    delete,
    path = "/api/article-comments/{id}",
    tag = COMMENT_TAG,
    params(("id" = i32, Path, description = "Comment id")),
    responses(
        (status = 204, description = "Comment deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Comment not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article_comment(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    match ArticleCommentRepository::new(&state.db)
        .delete(id, &actor)
        .await?
    {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(comment_not_found()),
    }
}
