use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        link::{LinkDto, LinksDto},
    },
    server::{
        data::link::LinkRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::link::LinkPlatform,
        state::AppState,
        util::validation::{ensure_same_id, validate_request},
    },
};

/// Tag for grouping profile link endpoints in OpenAPI documentation
pub static LINK_TAG: &str = "link";

/// Get the platform links of a user.
#[utoipa::path(
    get,
    path = "/api/users/{id}/links",
    tag = LINK_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Links of the user", body = LinksDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_links(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match LinkRepository::new(&state.db).get(id).await? {
        Some(links) => Ok((StatusCode::OK, Json(links.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Set one platform link of a user.
///
/// # Access Control
/// - `Member` - The user or an admin
///
/// # Arguments
/// - `platform` - One of `steam`, `discord`, `xbox`, `ps`, `epic`
/// - `payload` - User id, which must match the route, and the link
///
/// # Returns
/// - `200 OK` - All links after the change
/// - `400 Bad Request` - Invalid body, unknown platform or ids differ
/// - `404 Not Found` - User not found
#[utoipa::path(
    put,
    path = "/api/users/{id}/links/{platform}",
    tag = LINK_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("platform" = String, Path, description = "steam, discord, xbox, ps or epic")
    ),
    request_body = LinkDto,
    responses(
        (status = 200, description = "Link set", body = LinksDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_link(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, platform)): Path<(i32, LinkPlatform)>,
    Json(payload): Json<LinkDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    ensure_same_id(id, payload.id_user)?;
    validate_request(&payload)?;

    match LinkRepository::new(&state.db)
        .set(id, platform, Some(payload.link), &actor)
        .await?
    {
        Some(links) => Ok((StatusCode::OK, Json(links.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Remove one platform link of a user.
#[utoipa::path(
    delete,
    path = "/api/users/{id}/links/{platform}",
    tag = LINK_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("platform" = String, Path, description = "steam, discord, xbox, ps or epic")
    ),
    responses(
        (status = 200, description = "Link removed", body = LinksDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_link(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, platform)): Path<(i32, LinkPlatform)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    match LinkRepository::new(&state.db)
        .set(id, platform, None, &actor)
        .await?
    {
        Some(links) => Ok((StatusCode::OK, Json(links.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}
