//! Friends and blocked users.
//!
//! Friendships are stored in both directions. Blocking a friend ends the friendship.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        friend::{BlockUserDto, BlockedUserDto, FriendDto},
    },
    server::{
        controller::{added, removed},
        data::{blocked::BlockedUserRepository, friend::FriendRepository},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        state::AppState,
        util::{authorizer::ensure_self_or_admin, validation::validate_request},
    },
};

/// Tag for grouping friend and block endpoints in OpenAPI documentation
pub static FRIEND_TAG: &str = "friend";

/// Get the friends of a user.
#[utoipa::path(
    get,
    path = "/api/users/{id}/friends",
    tag = FRIEND_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Friends of the user", body = Vec<FriendDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_friends(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match FriendRepository::new(&state.db).get_friends(id).await? {
        Some(friends) => Ok((
            StatusCode::OK,
            Json(friends.into_iter().map(|f| f.into_dto()).collect::<Vec<_>>()),
        )),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Befriend another user.
///
/// # Access Control
/// - `Member` - The user or an admin
///
/// # Returns
/// - `200 OK` - Friendship added
/// - `400 Bad Request` - Already friends, or befriending oneself
/// - `404 Not Found` - Either user not found
#[utoipa::path(
    post,
    path = "/api/users/{id}/friends/{id_friend}",
    tag = FRIEND_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("id_friend" = i32, Path, description = "Id of the new friend")
    ),
    responses(
        (status = 200, description = "Friend added", body = MessageDto),
        (status = 400, description = "Already friends or self", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_friend(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, id_friend)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    let outcome = FriendRepository::new(&state.db)
        .add(id, id_friend, &actor)
        .await?;

    added(outcome, "Friend")
}

/// End a friendship in both directions.
#[utoipa::path(
    delete,
    path = "/api/users/{id}/friends/{id_friend}",
    tag = FRIEND_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("id_friend" = i32, Path, description = "Id of the friend")
    ),
    responses(
        (status = 200, description = "Friend removed", body = MessageDto),
        (status = 400, description = "Not friends", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn remove_friend(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, id_friend)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    let outcome = FriendRepository::new(&state.db)
        .remove(id, id_friend, &actor)
        .await?;

    removed(outcome, "Friend")
}

/// Get the users a user has blocked, most recent first.
///
/// # Access Control
/// - `Member` - The user or an admin
#[utoipa::path(
    get,
    path = "/api/users/{id}/blocked",
    tag = FRIEND_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Blocked users", body = Vec<BlockedUserDto>),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_blocked(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    ensure_self_or_admin(&actor, id)?;

    match BlockedUserRepository::new(&state.db).get_blocked(id).await? {
        Some(blocked) => Ok((
            StatusCode::OK,
            Json(blocked.into_iter().map(|b| b.into_dto()).collect::<Vec<_>>()),
        )),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Block another user with an optional comment.
///
/// # Access Control
/// - `Member` - The user or an admin
///
/// # Arguments
/// - `id` - User doing the blocking
/// - `id_blocked` - User being blocked
/// - `payload` - Optional private comment on the block
///
/// # Returns
/// - `200 OK` - User blocked; any friendship between the two is removed
/// - `400 Bad Request` - Already blocked, or blocking oneself
/// - `404 Not Found` - Either user not found
#[utoipa::path(
    post,
    path = "/api/users/{id}/blocked/{id_blocked}",
    tag = FRIEND_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("id_blocked" = i32, Path, description = "Id of the user to block")
    ),
    request_body = BlockUserDto,
    responses(
        (status = 200, description = "User blocked", body = MessageDto),
        (status = 400, description = "Already blocked or self", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn block_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, id_blocked)): Path<(i32, i32)>,
    Json(payload): Json<BlockUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    validate_request(&payload)?;

    let outcome = BlockedUserRepository::new(&state.db)
        .block(id, id_blocked, payload.comment, &actor)
        .await?;

    added(outcome, "Block")
}

#[utoipa::path(
    delete,
    path = "/api/users/{id}/blocked/{id_blocked}",
    tag = FRIEND_TAG,
    params(
        ("id" = i32, Path, description = "User id"),
        ("id_blocked" = i32, Path, description = "Id of the blocked user")
    ),
    responses(
        (status = 200, description = "User unblocked", body = MessageDto),
        (status = 400, description = "Not blocked", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unblock_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, id_blocked)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    let outcome = BlockedUserRepository::new(&state.db)
        .unblock(id, id_blocked, &actor)
        .await?;

    removed(outcome, "Block")
}
