//! User account service.
//!
//! This module provides the `UserService` for the account flows that combine the user
//! repository with password hashing and token issuance: registration, login, refresh
//! token rotation and password changes.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::user::AddUserDto,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, internal::InternalError, AppError},
        model::{
            actor::{Actor, Role},
            user::{AddUserParams, AuthTokens, PasswordChange, User},
        },
        service::token::TokenService,
    },
};

/// Service providing account business logic.
pub struct UserService<'a> {
    db: &'a DatabaseConnection,
    tokens: &'a TokenService,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `tokens` - Token service used to sign access tokens
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection, tokens: &'a TokenService) -> Self {
        Self { db, tokens }
    }

    /// Registers a new user.
    ///
    /// Hashes the password with Argon2 before anything is stored.
    ///
    /// # Arguments
    /// - `dto` - Validated registration request
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Created user with the lowest rank
    /// - `Ok(None)` - No rank exists to assign
    /// - `Err(DomainError::SameName)` - Nick already taken
    /// - `Err(InternalError::PasswordHash)` - Hashing failed
    pub async fn register(&self, dto: AddUserDto) -> Result<Option<User>, AppError> {
        let password_hash = hash_password(&dto.password)?;

        UserRepository::new(self.db)
            .create(AddUserParams::from_dto(dto, password_hash))
            .await
    }

    /// Authenticates with nick and password and issues a token pair.
    ///
    /// # Returns
    /// - `Ok(AuthTokens)` - Access and refresh token
    /// - `Err(AuthError::InvalidCredentials)` - Unknown nick, wrong password or unreadable stored hash
    pub async fn login(&self, nick: &str, password: &str) -> Result<AuthTokens, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_nick(nick).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };
        match verify_password(password, &user.password) {
            Ok(true) => {}
            Ok(false) => return Err(AuthError::InvalidCredentials.into()),
            Err(e) => {
                tracing::warn!("Stored password of user {} is unreadable: {}", user.id, e);
                return Err(AuthError::InvalidCredentials.into());
            }
        }

        let Some((user, rank_name)) = user_repo.find_with_rank(user.id).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        tracing::info!("User {} logged in", user.id);

        self.issue(user, rank_name).await
    }

    /// Exchanges an unexpired refresh token for a new token pair.
    ///
    /// The presented refresh token is replaced, so each one is accepted once.
    ///
    /// # Returns
    /// - `Ok(AuthTokens)` - New access and refresh token
    /// - `Err(AuthError::InvalidRefreshToken)` - Unknown or expired refresh token
    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthTokens, AppError> {
        let Some((user, rank_name)) = UserRepository::new(self.db)
            .find_by_refresh_token(refresh_token)
            .await?
        else {
            return Err(AuthError::InvalidRefreshToken.into());
        };

        match user.refresh_token_exp {
            Some(exp) if exp > Utc::now() => self.issue(user, rank_name).await,
            _ => Err(AuthError::InvalidRefreshToken.into()),
        }
    }

    /// Changes a password after checking the old one.
    ///
    /// # Returns
    /// - `Ok(PasswordChange::Changed)` - New password stored
    /// - `Ok(PasswordChange::WrongPassword)` - Old password did not match
    /// - `Ok(PasswordChange::NotFound)` - User not found
    /// - `Err(AuthError::AccessDenied)` - Actor is not the user
    pub async fn change_password(
        &self,
        id_user: i32,
        old_password: &str,
        new_password: &str,
        actor: &Actor,
    ) -> Result<PasswordChange, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some((user, _)) = user_repo.find_with_rank(id_user).await? else {
            return Ok(PasswordChange::NotFound);
        };

        if actor.id != user.id {
            return Err(
                AuthError::AccessDenied(actor.id, format!("change password of user {}", id_user))
                    .into(),
            );
        }

        if !verify_password(old_password, &user.password)? {
            return Ok(PasswordChange::WrongPassword);
        }

        user_repo
            .set_password_hash(user.id, hash_password(new_password)?)
            .await?;

        Ok(PasswordChange::Changed)
    }

    /// Sets a new password without checking the old one.
    ///
    /// Callers restrict this to administrators.
    pub async fn change_password_short(
        &self,
        id_user: i32,
        new_password: &str,
    ) -> Result<PasswordChange, AppError> {
        let changed = UserRepository::new(self.db)
            .set_password_hash(id_user, hash_password(new_password)?)
            .await?;

        Ok(if changed {
            PasswordChange::Changed
        } else {
            PasswordChange::NotFound
        })
    }

    async fn issue(
        &self,
        user: entity::user::Model,
        rank_name: String,
    ) -> Result<AuthTokens, AppError> {
        let token = self.tokens.issue(user.id, Role::from_rank_name(&rank_name))?;
        let refresh = self.tokens.refresh_token();

        UserRepository::new(self.db)
            .set_refresh_token(user.id, refresh.token.clone(), refresh.expires_at)
            .await?;

        Ok(AuthTokens {
            id_user: user.id,
            nick: user.nick,
            rank_name,
            token,
            refresh_token: refresh.token,
        })
    }
}

/// Hashes a password with Argon2 and a random salt.
pub fn hash_password(password: &str) -> Result<String, InternalError> {
    let salt = SaltString::generate(&mut OsRng);

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| InternalError::PasswordHash(e.to_string()))
}

/// Checks a password against a stored Argon2 hash.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, InternalError> {
    let parsed = PasswordHash::new(hash).map_err(|e| InternalError::PasswordHash(e.to_string()))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .is_ok())
}
