use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::{ErrorDto, MessageDto},
        user::{
            AddUserDto, ChangePasswordDto, ChangePasswordShortDto, CheckNickDto, ExistNickDto,
            PutUserDto, UserDto, UserPhotoDto, UserRankDto,
        },
    },
    server::{
        data::user::UserRepository,
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::user::{PasswordChange, UpdateUserParams, UserPhoto},
        service::user::UserService,
        state::AppState,
        util::validation::{ensure_same_id, validate_request},
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

fn user_not_found() -> AppError {
    AppError::NotFound("User not found".to_string())
}

/// Get all users.
///
/// Users carry their email and phone number, so listing them needs a token.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - Every user with rank name and links
/// - `401 Unauthorized` - Missing or invalid token
#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All users", body = Vec<UserDto>),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    let users = UserRepository::new(&state.db).get_all().await?;

    Ok((
        StatusCode::OK,
        Json(users.into_iter().map(|u| u.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get one user with rank name and links.
///
/// # Access Control
/// - Any authenticated user
///
/// # Returns
/// - `200 OK` - The user
/// - `401 Unauthorized` - Missing or invalid token
/// - `404 Not Found` - No user with this id
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The user", body = UserDto),
        (status = 401, description = "Missing or invalid token", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match UserRepository::new(&state.db).get_by_id(id).await? {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => Err(user_not_found()),
    }
}

/// Register a new user.
///
/// The password is stored as an Argon2 hash. New users receive the rank with
/// the lowest level, skipping `Blocked`.
///
/// # Access Control
/// - Public
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Nick, password, email and optional phone number
///
/// # Returns
/// - `201 Created` - The registered user
/// - `400 Bad Request` - Invalid body or nick already taken
/// - `404 Not Found` - No rank exists to assign
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/api/users",
    tag = USER_TAG,
    request_body = AddUserDto,
    responses(
        (status = 201, description = "User registered", body = UserDto),
        (status = 400, description = "Invalid body or nick taken", body = ErrorDto),
        (status = 404, description = "No rank to assign", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn add_user(
    State(state): State<AppState>,
    Json(payload): Json<AddUserDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_request(&payload)?;

    let user = UserService::new(&state.db, &state.tokens)
        .register(payload)
        .await?;

    match user {
        Some(user) => Ok((StatusCode::CREATED, Json(user.into_dto()))),
        None => Err(AppError::NotFound("No rank available for new users".to_string())),
    }
}

/// Update nick, email and phone number of a user.
///
/// # Access Control
/// - `Member` - The user themselves or an admin
///
/// # Returns
/// - `200 OK` - The updated user
/// - `400 Bad Request` - Invalid body, route and body ids differ, or nick taken
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not the user or an admin
/// - `404 Not Found` - User not found
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = PutUserDto,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn put_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<PutUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    ensure_same_id(id, payload.id_user)?;
    validate_request(&payload)?;

    let user = UserRepository::new(&state.db)
        .update(UpdateUserParams::from_dto(payload), &actor)
        .await?;

    match user {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => Err(user_not_found()),
    }
}

/// Delete a user and everything they authored.
///
/// Blocked users may still delete their own account.
///
/// # Access Control
/// - Any authenticated user for themselves, or an admin
///
/// # Returns
/// - `204 No Content` - User deleted
/// - `401 Unauthorized` - Not authenticated
/// - `403 Forbidden` - Not the user or an admin
/// - `404 Not Found` - User not found
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    match UserRepository::new(&state.db).delete(id, &actor).await? {
        Some(()) => Ok(StatusCode::NO_CONTENT),
        None => Err(user_not_found()),
    }
}

/// Move a user to another rank.
///
/// # Access Control
/// - `Admin`
///
/// # Returns
/// - `200 OK` - The user with the new rank
/// - `400 Bad Request` - Route and body ids differ
/// - `404 Not Found` - User or rank not found
#[utoipa::path(
    put,
    path = "/api/users/{id}/rank",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UserRankDto,
    responses(
        (status = 200, description = "Rank changed", body = UserDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User or rank not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_rank(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UserRankDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    ensure_same_id(id, payload.id_user)?;

    match UserRepository::new(&state.db)
        .change_rank(payload.id_user, payload.id_rank)
        .await?
    {
        Some(user) => Ok((StatusCode::OK, Json(user.into_dto()))),
        None => Err(AppError::NotFound("User or rank not found".to_string())),
    }
}

/// Upload a profile photo as base64.
///
/// # Access Control
/// - `Member` - The user themselves or an admin
///
/// # Returns
/// - `200 OK` - Photo stored
/// - `400 Bad Request` - Invalid body or payload is not base64
/// - `404 Not Found` - User not found
#[utoipa::path(
    put,
    path = "/api/users/{id}/photo",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = UserPhotoDto,
    responses(
        (status = 200, description = "Photo stored", body = MessageDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn set_photo(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<UserPhotoDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Member])
        .await?;

    validate_request(&payload)?;
    let photo = UserPhoto::from_dto(payload)?;

    match UserRepository::new(&state.db)
        .set_photo(id, photo, &actor)
        .await?
    {
        Some(()) => Ok((StatusCode::OK, Json(MessageDto::new("Photo updated")))),
        None => Err(user_not_found()),
    }
}

/// Get a user's profile photo as base64.
#[utoipa::path(
    get,
    path = "/api/users/{id}/photo",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "The photo", body = UserPhotoDto),
        (status = 404, description = "User or photo not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_photo(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    match UserRepository::new(&state.db).get_photo(id).await? {
        Some(photo) => Ok((StatusCode::OK, Json(photo.into_dto()))),
        None => Err(AppError::NotFound("Photo not found".to_string())),
    }
}

/// Change one's own password.
///
/// # Access Control
/// - Any authenticated user, for their own account only
///
/// # Returns
/// - `200 OK` - Password changed
/// - `400 Bad Request` - Invalid body, ids differ, or old password wrong
/// - `403 Forbidden` - Not the user
/// - `404 Not Found` - User not found
#[utoipa::path(
    put,
    path = "/api/users/{id}/password",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = ChangePasswordDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Invalid request or wrong password", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Access denied", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<ChangePasswordDto>,
) -> Result<impl IntoResponse, AppError> {
    let actor = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[])
        .await?;

    ensure_same_id(id, payload.id_user)?;
    validate_request(&payload)?;

    let change = UserService::new(&state.db, &state.tokens)
        .change_password(
            payload.id_user,
            &payload.old_password,
            &payload.new_password,
            &actor,
        )
        .await?;

    password_response(change)
}

/// Reset a user's password without the old one.
///
/// # Access Control
/// - `Admin`
#[utoipa::path(
    put,
    path = "/api/users/{id}/password/reset",
    tag = USER_TAG,
    params(("id" = i32, Path, description = "User id")),
    request_body = ChangePasswordShortDto,
    responses(
        (status = 200, description = "Password changed", body = MessageDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 401, description = "Not authenticated", body = ErrorDto),
        (status = 403, description = "Not an admin", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn change_password_short(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(id): Path<i32>,
    Json(payload): Json<ChangePasswordShortDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &state.tokens, &headers)
        .require(&[Permission::Admin])
        .await?;

    ensure_same_id(id, payload.id_user)?;
    validate_request(&payload)?;

    let change = UserService::new(&state.db, &state.tokens)
        .change_password_short(payload.id_user, &payload.new_password)
        .await?;

    password_response(change)
}

/// Check whether a nick is already taken.
///
/// # Access Control
/// - Public
#[utoipa::path(
    post,
    path = "/api/users/exist-nick",
    tag = USER_TAG,
    request_body = CheckNickDto,
    responses(
        (status = 200, description = "Whether the nick is taken", body = ExistNickDto),
        (status = 400, description = "Invalid request", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn exist_nick(
    State(state): State<AppState>,
    Json(payload): Json<CheckNickDto>,
) -> Result<impl IntoResponse, AppError> {
    validate_request(&payload)?;

    let exists = UserRepository::new(&state.db)
        .nick_exists(&payload.nick)
        .await?;

    Ok((StatusCode::OK, Json(ExistNickDto { exists })))
}

fn password_response(change: PasswordChange) -> Result<(StatusCode, Json<MessageDto>), AppError> {
    match change {
        PasswordChange::Changed => Ok((StatusCode::OK, Json(MessageDto::new("Password changed")))),
        PasswordChange::WrongPassword => {
            Err(AppError::BadRequest("Old password is incorrect".to_string()))
        }
        PasswordChange::NotFound => Err(user_not_found()),
    }
}
