use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        rank::{AddRankDto, PutRankDto, RankDto},
    },
    server::{
        data::rank::RankRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::rank::RankParams,
        state::AppState,
        util::validation::{ensure_same_id, validate_request},
    },
};

/// Tag for grouping rank endpoints in OpenAPI documentation
pub static RANK_TAG: &str = "rank";

/// Get all ranks ordered by level.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/ranks",
    tag = RANK_TAG,
    responses(
        (status = 200, description = "All ranks", body = Vec<RankDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_ranks(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let ranks = RankRepository::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(ranks.into_iter().map(|r| r.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Create a new rank.
///
/// # Access Control
/// - `Admin`
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Rank name and level
///
/// # Returns
/// - `201 Created` - The created rank
/// - `400 Bad Request` - Invalid body or a rank with this name exists
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not an admin
#[utoipa::path(
    post,
    path = "/api/ranks",
    tag = RANK_TAG,
    request_body = AddRankDto,
    responses(
        (status = 201, description = "Rank created", body = RankDto),
        (status = 400, description = "Invalid body or duplicate name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_rank(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<AddRankDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    validate_request(&payload)?;

    let rank = RankRepository::new(&state.db)
        .create(RankParams::from_add_dto(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(rank.into_dto())))
}

/// Rename or re-level a rank.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The updated rank
/// - `400 Bad Request` - Ids differ or another rank has the name
/// - `404 Not Found` - Rank not found
#[utoipa::path(
    put,
    path = "/api/ranks/{id}",
    tag = RANK_TAG,
    params(("id" = i32, Path, description = "Rank id")),
    request_body = PutRankDto,
    responses(
        (status = 200, description = "Rank updated", body = RankDto),
        (status = 400, description = "Invalid request or duplicate name", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Rank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_rank(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PutRankDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    ensure_same_id(id, payload.id_rank)?;
    validate_request(&payload)?;

    match RankRepository::new(&state.db)
        .update(id, RankParams::from_put_dto(payload))
        .await?
    {
        Some(rank) => Ok((StatusCode::OK, Json(rank.into_dto()))),
        None => Err(AppError::NotFound("Rank not found".to_string())),
    }
}

/// Delete a rank that no user holds.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `204 No Content` - Rank deleted
/// - `400 Bad Request` - Some user still has this rank
/// - `404 Not Found` - Rank not found
#[utoipa::path(
    delete,
    path = "/api/ranks/{id}",
    tag = RANK_TAG,
    params(("id" = i32, Path, description = "Rank id")),
    responses(
        (status = 204, description = "Rank deleted"),
        (status = 400, description = "Rank still in use", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "Rank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_rank(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    match RankRepository::new(&state.db).delete(id).await? {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(AppError::NotFound("Rank not found".to_string())),
    }
}
