use axum::{
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        article::{ArticleDetailsDto, ArticleDto, ArticleQtyDto, NewArticleDto, PutArticleDto},
    },
    server::{
        controller::QtyParams,
        data::article::ArticleRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            article::{Article, CreateArticleParams, UpdateArticleParams},
            listing::ListingOrder,
        },
        state::AppState,
        util::{
            authorizer::ensure_self_or_admin,
            validation::{ensure_same_id, validate_request},
        },
    },
};

/// Tag for grouping article endpoints in OpenAPI documentation
pub static ARTICLE_TAG: &str = "article";

fn article_not_found() -> AppError {
    AppError::NotFound("Article not found".to_string())
}

fn into_dtos(articles: Vec<Article>) -> Vec<ArticleDto> {
    articles.into_iter().map(Article::into_dto).collect()
}

/// Get all articles in insertion order.
#[utoipa::path(
    get,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    responses(
        (status = 200, description = "All articles", body = Vec<ArticleDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_articles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let articles = ArticleRepository::new(&state.db).get_all().await?;

    Ok((StatusCode::OK, Json(into_dtos(articles))))
}

/// Get an article with its comments.
///
/// # Access Control
/// - Public
///
/// # Returns
/// - `200 OK` - Article with tags, counts and comments
/// - `404 Not Found` - No article with this id
#[utoipa::path(
    get,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 200, description = "The article", body = ArticleDetailsDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_article(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match ArticleRepository::new(&state.db).get_by_id(id).await? {
        Some(article) => Ok((StatusCode::OK, Json(article.into_dto()))),
        None => Err(article_not_found()),
    }
}

/// Get the articles of one user, newest first.
#[utoipa::path(
    get,
    path = "/api/articles/user/{id_user}",
    tag = ARTICLE_TAG,
    params(("id_user" = i32, Path, description = "Author id")),
    responses(
        (status = 200, description = "Articles of the user", body = Vec<ArticleDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_articles(
    State(state): State<AppState>,
    Path(id_user): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match ArticleRepository::new(&state.db).get_by_user(id_user).await? {
        Some(articles) => Ok((StatusCode::OK, Json(into_dtos(articles)))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Get the first `qty` articles in insertion order.
///
/// # Arguments
/// - `params` - Quantity to return, at least 5
///
/// # Returns
/// - `200 OK` - Page of articles and whether more follow
/// - `400 Bad Request` - Quantity below 5
/// - `404 Not Found` - There are no articles
#[utoipa::path(
    get,
    path = "/api/articles/qty",
    tag = ARTICLE_TAG,
    params(("qty" = i64, Query, description = "Number of articles, at least 5")),
    responses(
        (status = 200, description = "Page of articles", body = ArticleQtyDto),
        (status = 400, description = "Quantity below the minimum", body = ErrorDto),
        (status = 404, description = "No articles", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_qty_articles(
    State(state): State<AppState>,
    Query(params): Query<QtyParams>,
) -> Result<impl IntoResponse, AppError> {
    match ArticleRepository::new(&state.db).get_qty(params.qty).await? {
        Some(page) => Ok((StatusCode::OK, Json(page.into_dto()))),
        None => Err(AppError::NotFound("No articles".to_string())),
    }
}

/// Get the first `qty` articles created before `time` in the given order.
///
/// # Arguments
/// - `order` - One of `most-likes`, `least-likes`, `most-comments`, `newest`, `oldest`
/// - `params` - Quantity, at least 5, and optional cutoff time
///
/// # Returns
/// - `200 OK` - Page of articles and whether more follow
/// - `400 Bad Request` - Quantity below 5 or unknown order
/// - `404 Not Found` - There are no articles
#[utoipa::path(
    get,
    path = "/api/articles/qty/{order}",
    tag = ARTICLE_TAG,
    params(
        ("order" = String, Path, description = "most-likes, least-likes, most-comments, newest or oldest"),
        ("qty" = i64, Query, description = "Number of articles, at least 5"),
        ("time" = Option<String>, Query, description = "RFC 3339 cutoff (default: now)")
    ),
    responses(
        (status = 200, description = "Page of articles", body = ArticleQtyDto),
        (status = 400, description = "Quantity below the minimum", body = ErrorDto),
        (status = 404, description = "No articles", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_qty_sorted_articles(
    State(state): State<AppState>,
    Path(order): Path<ListingOrder>,
    Query(params): Query<QtyParams>,
) -> Result<impl IntoResponse, AppError> {
    match ArticleRepository::new(&state.db)
        .get_qty_sorted(order, params.qty, params.time)
        .await?
    {
        Some(page) => Ok((StatusCode::OK, Json(page.into_dto()))),
        None => Err(AppError::NotFound("No articles".to_string())),
    }
}

/// Get the three most liked articles.
#[utoipa::path(
    get,
    path = "/api/articles/top",
    tag = ARTICLE_TAG,
    responses(
        (status = 200, description = "Most liked articles", body = Vec<ArticleDto>),
        (status = 404, description = "No articles", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_top_articles(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    match ArticleRepository::new(&state.db).get_top().await? {
        Some(articles) => Ok((StatusCode::OK, Json(into_dtos(articles)))),
        None => Err(AppError::NotFound("No articles".to_string())),
    }
}

/// Get every article in the given order.
#[utoipa::path(
    get,
    path = "/api/articles/sorted/{order}",
    tag = ARTICLE_TAG,
    params(("order" = String, Path, description = "most-likes, least-likes, most-comments, newest or oldest")),
    responses(
        (status = 200, description = "Sorted articles", body = Vec<ArticleDto>),
        (status = 400, description = "Unknown order", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_sorted_articles(
    State(state): State<AppState>,
    Path(order): Path<ListingOrder>,
) -> Result<impl IntoResponse, AppError> {
    let articles = ArticleRepository::new(&state.db).get_sorted(order).await?;

    Ok((StatusCode::OK, Json(into_dtos(articles))))
}

/// Create an article.
///
/// Tags that do not exist yet are created.
///
/// # Access Control
/// - `Redaction` - Publishing as oneself, or an admin
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Author, title, content and tag names
///
/// # Returns
/// - `201 Created` - The created article
/// - `400 Bad Request` - Invalid body
/// - `403 Forbidden` - Publishing as another user
/// - `404 Not Found` - Author not found
#[utoipa::path(
    post,
    path = "/api/articles",
    tag = ARTICLE_TAG,
    request_body = NewArticleDto,
    responses(
        (status = 201, description = "Article created", body = ArticleDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Author not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Redaction])
        .await?;

    validate_request(&payload)?;
    ensure_self_or_admin(&actor, payload.id_user)?;

    match ArticleRepository::new(&state.db)
        .create(CreateArticleParams::from_dto(payload))
        .await?
    {
        Some(article) => Ok((StatusCode::CREATED, Json(article.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Replace the title, content and tags of an article.
///
/// # Access Control
/// - `Member` - The author or an admin
#[utoipa::path(
    put,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    request_body = PutArticleDto,
    responses(
        (status = 200, description = "Article updated", body = ArticleDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PutArticleDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    ensure_same_id(id, payload.id_article)?;
    validate_request(&payload)?;

    match ArticleRepository::new(&state.db)
        .update(UpdateArticleParams::from_dto(payload), &actor)
        .await?
    {
        Some(article) => Ok((StatusCode::OK, Json(article.into_dto()))),
        None => Err(article_not_found()),
    }
}

/// Delete an article with its likes, comments and reports.
///
/// # Access Control
/// - `Member` - The author, an admin or a moderator
#[utoipa::path(
    delete,
    path = "/api/articles/{id}",
    tag = ARTICLE_TAG,
    params(("id" = i32, Path, description = "Article id")),
    responses(
        (status = 204, description = "Article deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Article not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    match ArticleRepository::new(&state.db).delete(id, &actor).await? {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(article_not_found()),
    }
}

/// Remove one tag from an article.
#[utoipa::path(
    delete,
    path = "/api/articles/{id}/tags/{id_tag}",
    tag = ARTICLE_TAG,
    params(
        ("id" = i32, Path, description = "Article id"),
        ("id_tag" = i32, Path, description = "Tag id")
    ),
    responses(
        (status = 204, description = "Tag removed"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Article or tag not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_article_tag(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, id_tag)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    match ArticleRepository::new(&state.db)
        .remove_tag(id, id_tag, &actor)
        .await?
    {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound("Article or tag not found".to_string())),
    }
}
