//! User domain models and parameters.
//!
//! Provides the user profile model returned to clients, the stored photo, and
//! parameter types for registration and profile updates. Password hashes never
//! leave the data layer through these types.

use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};

use crate::{
    model::{
        auth::TokenResponseDto,
        user::{AddUserDto, PutUserDto, UserDto, UserPhotoDto},
    },
    server::{error::AppError, model::link::Links},
};

/// User profile with rank name and platform links.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub nick: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub id_rank: i32,
    /// Name of the user's rank, which is also their role.
    pub rank_name: String,
    pub links: Links,
}

impl User {
    /// Converts an entity model and its rank name into a user domain model.
    ///
    /// # Arguments
    /// - `entity` - The user row
    /// - `rank_name` - Name of the rank referenced by `entity.id_rank`
    pub fn from_entity(entity: entity::user::Model, rank_name: String) -> Self {
        let links = Links::from_entity(&entity);

        Self {
            id: entity.id,
            nick: entity.nick,
            email: entity.email,
            phone_number: entity.phone_number,
            created_at: entity.created_at,
            id_rank: entity.id_rank,
            rank_name,
            links,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id_user: self.id,
            nick: self.nick,
            email: self.email,
            phone_number: self.phone_number,
            created_at: self.created_at,
            rank_name: self.rank_name,
            links: self.links.into_dto(),
        }
    }
}

/// Parameters for registering a user.
#[derive(Debug, Clone)]
pub struct AddUserParams {
    pub nick: String,
    /// Argon2 PHC string, never the plain password.
    pub password_hash: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl AddUserParams {
    pub fn from_dto(dto: AddUserDto, password_hash: String) -> Self {
        Self {
            nick: dto.nick,
            password_hash,
            email: dto.email,
            phone_number: dto.phone_number,
        }
    }
}

/// Parameters for updating a user's profile fields.
#[derive(Debug, Clone)]
pub struct UpdateUserParams {
    pub id: i32,
    pub nick: String,
    pub email: String,
    pub phone_number: Option<String>,
}

impl UpdateUserParams {
    pub fn from_dto(dto: PutUserDto) -> Self {
        Self {
            id: dto.id_user,
            nick: dto.nick,
            email: dto.email,
            phone_number: dto.phone_number,
        }
    }
}

/// Raw profile photo and its content type.
#[derive(Debug, Clone, PartialEq)]
pub struct UserPhoto {
    pub photo_type: String,
    pub data: Vec<u8>,
}

impl UserPhoto {
    /// Builds a photo from the stored columns; `None` unless both are present.
    pub fn from_columns(photo_type: Option<String>, data: Option<Vec<u8>>) -> Option<Self> {
        match (photo_type, data) {
            (Some(photo_type), Some(data)) => Some(Self { photo_type, data }),
            _ => None,
        }
    }

    /// Decodes a photo uploaded as base64.
    ///
    /// # Returns
    /// - `Ok(UserPhoto)` - Decoded photo
    /// - `Err(AppError::BadRequest)` - The payload is not valid base64
    pub fn from_dto(dto: UserPhotoDto) -> Result<Self, AppError> {
        let data = STANDARD
            .decode(dto.base64_photo.as_bytes())
            .map_err(|_| AppError::BadRequest("Photo is not valid base64".to_string()))?;

        Ok(Self {
            photo_type: dto.photo_type,
            data,
        })
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(&self.data)
    }

    pub fn into_dto(self) -> UserPhotoDto {
        UserPhotoDto {
            base64_photo: self.to_base64(),
            photo_type: self.photo_type,
        }
    }
}

/// Result of a password change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordChange {
    Changed,
    WrongPassword,
    NotFound,
}

/// Access and refresh token issued at login or refresh.
#[derive(Debug, Clone)]
pub struct AuthTokens {
    pub id_user: i32,
    pub nick: String,
    pub rank_name: String,
    pub token: String,
    pub refresh_token: String,
}

impl AuthTokens {
    pub fn into_dto(self) -> TokenResponseDto {
        TokenResponseDto {
            id_user: self.id_user,
            nick: self.nick,
            rank_name: self.rank_name,
            token: self.token,
            refresh_token: self.refresh_token,
        }
    }
}
