use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        post::{NewPostDto, PostDetailsDto, PostDto, PostQtyDto, PutPostDto},
    },
    server::{
        controller::QtyParams,
        data::post::PostRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            listing::ListingOrder,
            post::{CreatePostParams, Post, UpdatePostParams},
        },
        state::AppState,
        util::{
            authorizer::ensure_self_or_admin,
            validation::{ensure_same_id, validate_request},
        },
    },
};

/// Tag for grouping post endpoints in OpenAPI documentation
pub static POST_TAG: &str = "post";

fn post_not_found() -> AppError {
    AppError::NotFound("Post not found".to_string())
}

fn into_dtos(posts: Vec<Post>) -> Vec<PostDto> {
    posts.into_iter().map(Post::into_dto).collect()
}

/// Get all posts in insertion order.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = POST_TAG,
    responses(
        (status = 200, description = "All posts", body = Vec<PostDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let posts = PostRepository::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(posts))))
}

/// Get a post with its comments.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Post with tags, counts and comments
/// - `404 Not Found` - No post with this id
#[utoipa::path(
    get,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 200, description = "The post", body = PostDetailsDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_post(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match PostRepository::new(&state.db).get_by_id(id).await? {
        Some(post) => Ok((StatusCode::OK, Json(post.into_dto()))),
        None => Err(post_not_found()),
    }
}

/// Get the posts of one user, newest first.
#[utoipa::path(
    get,
    path = "/api/posts/user/{id_user}",
    tag = POST_TAG,
    params(("id_user" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "Posts of the user", body = Vec<PostDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_posts(
    State(state): State<AppState>,
    Path(id_user): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match PostRepository::new(&state.db).get_by_user(id_user).await? {
        Some(posts) => Ok((StatusCode::OK, Json(into_dtos(posts)))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Get the first `qty` posts in insertion order.
///
/// # Arguments
/// - `params` - Quantity to return, at least 5
///
/// # Returns
/// - `200 OK` - Page of posts and whether more follow
/// - `400 Bad Request` - Quantity below 5
/// - `404 Not Found` - There are no posts
#[utoipa::path(
    get,
    path = "/api/posts/qty",
    tag = POST_TAG,
    params(("qty" = i64, Query, description = "Number of posts, at least 5")),
    responses(
        (status = 200, description = "Page of posts", body = PostQtyDto),
        (status = 400, description = "Quantity below the minimum", body = ErrorDto),
        (status = 404, description = "No posts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_qty_posts(
    State(state): State<AppState>,
    Query(params): Query<QtyParams>,
) -> Result<impl IntoResponse, AppError> {
    match PostRepository::new(&state.db).get_qty(params.qty).await? {
        Some(page) => Ok((StatusCode::OK, Json(page.into_dto()))),
        None => Err(AppError::NotFound("No posts".to_string())),
    }
}

/// Get the first `qty` posts created before `time` in the given order.
///
/// # Arguments
/// - `order` - One of `most-likes`, `least-likes`, `most-comments`, `newest`, `oldest`
/// - `params` - Quantity, at least 5, and optional cutoff time
///
/// # Returns
/// - `200 OK` - Page of posts and whether more follow
/// - `400 Bad Request` - Quantity below 5 or unknown order
/// - `404 Not Found` - There are no posts
#[utoipa::path(
    get,
    path = "/api/posts/qty/{order}",
    tag = POST_TAG,
    params(
        ("order" = String, Path, description = "most-likes, least-likes, most-comments, newest or oldest"),
        ("qty" = i64, Query, description = "Number of posts, at least 5"),
        ("time" = Option<String>, Query, description = "RFC 3339 cutoff (default: now)")
    ),
    responses(
        (status = 200, description = "Page of posts", body = PostQtyDto),
        (status = 400, description = "Quantity below the minimum", body = ErrorDto),
        (status = 404, description = "No posts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_qty_sorted_posts(
    State(state): State<AppState>,
    Path(order): Path<ListingOrder>,
    Query(params): Query<QtyParams>,
) -> Result<impl IntoResponse, AppError> {
    match PostRepository::new(&state.db)
        .get_qty_sorted(order, params.qty, params.time)
        .await?
    {
        Some(page) => Ok((StatusCode::OK, Json(page.into_dto()))),
        None => Err(AppError::NotFound("No posts".to_string())),
    }
}

/// Get the three most liked posts.
#[utoipa::path(
    get,
    path = "/api/posts/top",
    tag = POST_TAG,
    responses(
        (status = 200, description = "Most liked posts", body = Vec<PostDto>),
        (status = 404, description = "No posts", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_posts(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    match PostRepository::new(&state.db).get_top().await? {
        Some(posts) => Ok((StatusCode::OK, Json(into_dtos(posts)))),
        None => Err(AppError::NotFound("No posts".to_string())),
    }
}

/// Get every post in the given order.
#[utoipa::path(
    get,
    path = "/api/posts/sorted/{order}",
    tag = POST_TAG,
    params(("order" = String, Path, description = "most-likes, least-likes, most-comments, newest or oldest")),
    responses(
        (status = 200, description = "Sorted posts", body = Vec<PostDto>),
        (status = 400, description = "Unknown order", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sorted_posts(
    State(state): State<AppState>,
    Path(order): Path<ListingOrder>,
) -> Result<impl IntoResponse, AppError> {
    let posts = PostRepository::new(&state.db).get_sorted(order).await?;

    Ok((StatusCode::OK, Json(into_dtos(posts))))
}

/// Create a post.
///
/// Tags that do not exist yet are created.
///
/// # Access Control
/// - `Member` - Posting as oneself, or an admin
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Author, content and tag names
///
/// # Returns
/// - `201 Created` - The created post
/// - `400 Bad Request` - Invalid body
/// - `403 Forbidden` - Posting as another user
/// - `404 Not Found` - Author not found
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = POST_TAG,
    request_body = NewPostDto,
    responses(
        (status = 201, description = "Post created", body = PostDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    validate_request(&payload)?;
    ensure_self_or_admin(&actor, payload.id_user)?;

    match PostRepository::new(&state.db)
        .create(CreatePostParams::from_dto(payload))
        .await?
    {
        Some(post) => Ok((StatusCode::CREATED, Json(post.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Replace the content and tags of a post.
///
/// # Access Control
/// - `Member` - The author or an admin
#[utoipa::path(
    put,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id")),
    request_body = PutPostDto,
    responses(
        (status = 200, description = "Post updated", body = PostDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PutPostDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    ensure_same_id(id, payload.id_post)?;
    validate_request(&payload)?;

    match PostRepository::new(&state.db)
        .update(UpdatePostParams::from_dto(payload), &actor)
        .await?
    {
        Some(post) => Ok((StatusCode::OK, Json(post.into_dto()))),
        None => Err(post_not_found()),
    }
}

/// Delete a post with its likes, comments and reports.
///
/// # Access Control
/// - `Member` - The author, an admin or a moderator
#[utoipa::path(
    delete,
    path = "/api/posts/{id}",
    tag = POST_TAG,
    params(("id" = i32, Path, description = "Post id")),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Post not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    match PostRepository::new(&state.db).delete(id, &actor).await? {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(post_not_found()),
    }
}

/// Remove one tag from a post.
#[utoipa::path(
    delete,
    path = "/api/posts/{id}/tags/{id_tag}",
    tag = POST_TAG,
    params(
        ("id" = i32, Path, description = "Post id"),
        ("id_tag" = i32, Path, description = "Tag id")
    ),
    responses(
        (status = 204, description = "Tag removed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Post or tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_post_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, id_tag)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    match PostRepository::new(&state.db)
        .remove_tag(id, id_tag, &actor)
        .await?
    {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound("Post or tag not found".to_string())),
    }
}
