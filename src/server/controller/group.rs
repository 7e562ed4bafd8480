//! Groups, memberships and group messages.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, ExistsDto, MessageDto},
        group::{
            GroupDetailsDto, GroupDto, GroupMessageDto, NewGroupDto, NewGroupMessageDto,
            PutGroupDto, PutGroupMessageDto,
        },
    },
    server::{
        controller::{added, removed},
        data::{group::GroupRepository, group_message::GroupMessageRepository},
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::group::{CreateGroupParams, UpdateGroupParams},
        state::AppState,
        util::validation::{ensure_same_id, validate_request},
    },
};

/// Tag for grouping group endpoints in OpenAPI documentation
pub static GROUP_TAG: &str = "group";

fn group_not_found() -> AppError {
    AppError::NotFound("Group not found".to_string())
}

fn message_not_found() -> AppError {
    AppError::NotFound("Message not found".to_string())
}

/// Get all groups with their member counts.
#[utoipa::path(
    get,
    path = "/api/groups",
    tag = GROUP_TAG,
    responses(
        (status = 200, description = "All groups", body = Vec<GroupDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_groups(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let groups = GroupRepository::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(groups.into_iter().map(|g| g.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a group with its members.
#[utoipa::path(
    get,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "The group", body = GroupDetailsDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match GroupRepository::new(&state.db).get(id).await? {
        Some(group) => Ok((StatusCode::OK, Json(group.into_dto()))),
        None => Err(group_not_found()),
    }
}

/// Get the groups a user belongs to.
#[utoipa::path(
    get,
    path = "/api/users/{id}/groups",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "Groups of the user", body = Vec<GroupDto>),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_groups(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match GroupRepository::new(&state.db).get_user_groups(id).await? {
        Some(groups) => Ok((
            StatusCode::OK,
            Json(groups.into_iter().map(|g| g.into_dto()).collect::<Vec<_>>()),
        )),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Create a group.
///
/// The creator becomes the group's first member and can never leave it.
///
/// # Access Control
/// - `Member` - Creating as oneself, or an admin
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `headers` - Request headers carrying the bearer token
/// - `payload` - Creator, unique name and optional description
///
/// # Returns
/// - `201 Created` - The created group
/// - `400 Bad Request` - Invalid body or name taken
/// - `403 Forbidden` - Creating for another user
/// - `404 Not Found` - Creator not found
#[utoipa::path(
    post,
    path = "/api/groups",
    tag = GROUP_TAG,
    request_body = NewGroupDto,
    responses(
        (status = 201, description = "Group created", body = GroupDto),
        (status = 400, description = "Invalid body or name taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Creator not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Json(payload): Json<NewGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    validate_request(&payload)?;

    match GroupRepository::new(&state.db)
        .create(CreateGroupParams::from_dto(payload), &actor)
        .await?
    {
        Some(group) => Ok((StatusCode::CREATED, Json(group.into_dto()))),
        None => Err(AppError::NotFound("User not found".to_string())),
    }
}

/// Rename a group or change its description.
///
/// # Access Control
/// - `Member` - The creator or an admin
#[utoipa::path(
    put,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group id")),
    request_body = PutGroupDto,
    responses(
        (status = 200, description = "Group updated", body = GroupDto),
        (status = 400, description = "Invalid request or name taken", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PutGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    ensure_same_id(id, payload.id_group)?;
    validate_request(&payload)?;

    match GroupRepository::new(&state.db)
        .update(UpdateGroupParams::from_dto(payload), &actor)
        .await?
    {
        Some(group) => Ok((StatusCode::OK, Json(group.into_dto()))),
        None => Err(group_not_found()),
    }
}

/// Delete a group with its memberships and messages.
///
/// # Access Control
/// - `Member` - The creator or an admin
#[utoipa::path(
    delete,
    path = "/api/groups/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group id")),
    responses(
        (status = 204, description = "Group deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    match GroupRepository::new(&state.db).delete(id, &actor).await? {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(group_not_found()),
    }
}

/// Join a group.
///
/// # Access Control
/// - `Member` - Joining as oneself, or an admin adding anyone
#[utoipa::path(
    post,
    path = "/api/groups/{id}/users/{id_user}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id"),
        ("id_user" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Member added", body = MessageDto),
        (status = 400, description = "Already a member", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Group or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, id_user)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    let outcome = GroupRepository::new(&state.db)
        .join(id, id_user, &actor)
        .await?;

    added(outcome, "Member")
}

/// Leave a group, or remove a member from it.
///
/// # Access Control
/// - `Member` - The member themselves, the group creator or an admin
///
/// # Returns
/// - `200 OK` - Member removed
/// - `400 Bad Request` - Not a member, or the creator tried to leave
/// - `404 Not Found` - Group or user not found
#[utoipa::path(
    delete,
    path = "/api/groups/{id}/users/{id_user}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id"),
        ("id_user" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Member removed", body = MessageDto),
        (status = 400, description = "Not a member or creator", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Group or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn leave_group(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path((id, id_user)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    let outcome = GroupRepository::new(&state.db)
        .leave(id, id_user, &actor)
        .await?;

    removed(outcome, "Member")
}

/// Check whether a user belongs to a group.
#[utoipa::path(
    get,
    path = "/api/groups/{id}/users/{id_user}",
    tag = GROUP_TAG,
    params(
        ("id" = i32, Path, description = "Group id"),
        ("id_user" = i32, Path, description = "User id")
    ),
    responses(
        (status = 200, description = "Whether the user is a member", body = ExistsDto),
        (status = 404, description = "Group or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn is_member(
    State(state): State<AppState>,
    Path((id, id_user)): Path<(i32, i32)>,
) -> Result<impl IntoResponse, AppError> {
    match GroupRepository::new(&state.db).is_member(id, id_user).await? {
        Some(exists) => Ok((StatusCode::OK, Json(ExistsDto { exists }))),
        None => Err(AppError::NotFound("Group or user not found".to_string())),
    }
}

/// Get the messages of a group, oldest first.
///
/// # Access Control
/// - Public
#[utoipa::path(
    get,
    path = "/api/groups/{id}/messages",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group id")),
    responses(
        (status = 200, description = "Messages of the group", body = Vec<GroupMessageDto>),
        (status = 404, description = "Group not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_group_messages(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match GroupMessageRepository::new(&state.db).get_by_group(id).await? {
        Some(messages) => Ok((
            StatusCode::OK,
            Json(messages.into_iter().map(|m| m.into_dto()).collect::<Vec<_>>()),
        )),
        None => Err(group_not_found()),
    }
}

/// Post a message to a group the author belongs to.
#[utoipa::path(
    post,
    path = "/api/groups/{id}/messages",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Group id")),
    request_body = NewGroupMessageDto,
    responses(
        (status = 201, description = "Message created", body = GroupMessageDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not a member or access denied", body = ErrorDto),
        (status = 404, description = "Group or user not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_group_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<NewGroupMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    validate_request(&payload)?;

    match GroupMessageRepository::new(&state.db)
        .create(id, payload.id_user, payload.content, &actor)
        .await?
    {
        Some(message) => Ok((StatusCode::CREATED, Json(message.into_dto()))),
        None => Err(AppError::NotFound("Group or user not found".to_string())),
    }
}

#[utoipa::path(
    put,
    path = "/api/group-messages/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Message id")),
    request_body = PutGroupMessageDto,
    responses(
        (status = 200, description = "Message updated", body = GroupMessageDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_group_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PutGroupMessageDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    ensure_same_id(id, payload.id_message)?;
    validate_request(&payload)?;

    match GroupMessageRepository::new(&state.db)
        .update(id, payload.content, &actor)
        .await?
    {
        Some(message) => Ok((StatusCode::OK, Json(message.into_dto()))),
        None => Err(message_not_found()),
    }
}

/// Delete a group message.
///
/// # Access Control
/// - `Member` - The author, the group creator, an admin or a moderator
#[utoipa::path(
    delete,
    path = "/api/group-messages/{id}",
    tag = GROUP_TAG,
    params(("id" = i32, Path, description = "Message id")),
    responses(
        (status = 204, description = "Message deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "Message not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_group_message(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    match GroupMessageRepository::new(&state.db)
        .delete(id, &actor)
        .await?
    {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(message_not_found()),
    }
}
