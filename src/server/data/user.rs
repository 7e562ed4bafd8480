//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records: registration,
//! profile edits, rank changes, photos, stored password hashes and refresh tokens.
//! Entity models are converted to domain models at this boundary; password hashes
//! only leave through [`UserRepository::find_by_nick`] for credential checks.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::{
    data::cascade,
    error::{auth::AuthError, domain::DomainError, AppError},
    model::{
        actor::{Actor, Role},
        user::{AddUserParams, UpdateUserParams, User, UserPhoto},
    },
    util::authorizer::is_author_or_admin,
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds a user row together with the name of their rank.
    ///
    /// # Returns
    /// - `Ok(Some((user, rank_name)))` - User found
    /// - `Ok(None)` - No user with this id
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_with_rank(
        &self,
        id: i32,
    ) -> Result<Option<(entity::user::Model, String)>, AppError> {
        let row = entity::prelude::User::find_by_id(id)
            .find_also_related(entity::prelude::Rank)
            .one(self.db)
            .await?;

        Ok(row.map(|(user, rank)| (user, rank.map(|r| r.name).unwrap_or_default())))
    }

    /// Gets all users ordered by id.
    pub async fn get_all(&self) -> Result<Vec<User>, AppError> {
        let rows = entity::prelude::User::find()
            .find_also_related(entity::prelude::Rank)
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .map(|(user, rank)| User::from_entity(user, rank.map(|r| r.name).unwrap_or_default()))
            .collect())
    }

    /// Gets a user profile by id.
    pub async fn get_by_id(&self, id: i32) -> Result<Option<User>, AppError> {
        Ok(self
            .find_with_rank(id)
            .await?
            .map(|(user, rank_name)| User::from_entity(user, rank_name)))
    }

    /// Finds the stored user row for a nick, password hash included.
    pub async fn find_by_nick(&self, nick: &str) -> Result<Option<entity::user::Model>, AppError> {
        Ok(entity::prelude::User::find()
            .filter(entity::user::Column::Nick.eq(nick))
            .one(self.db)
            .await?)
    }

    /// Checks whether a nick is already taken.
    pub async fn nick_exists(&self, nick: &str) -> Result<bool, AppError> {
        Ok(self.find_by_nick(nick).await?.is_some())
    }

    /// Registers a new user with the lowest-level rank other than `Blocked`.
    ///
    /// # Arguments
    /// - `params` - Nick, already hashed password, email and optional phone number
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The created user
    /// - `Ok(None)` - No rank exists to assign
    /// - `Err(DomainError::SameName)` - Nick already taken; nothing is inserted
    pub async fn create(&self, params: AddUserParams) -> Result<Option<User>, AppError> {
        if self.nick_exists(&params.nick).await? {
            return Err(DomainError::SameName("Nick with given name already exists!".to_string()).into());
        }

        let Some(rank) = entity::prelude::Rank::find()
            .filter(entity::rank::Column::Name.ne(Role::Blocked.as_str()))
            .order_by_asc(entity::rank::Column::RankLevel)
            .order_by_asc(entity::rank::Column::Id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let user = entity::user::ActiveModel {
            id_rank: ActiveValue::Set(rank.id),
            nick: ActiveValue::Set(params.nick),
            password: ActiveValue::Set(params.password_hash),
            email: ActiveValue::Set(params.email),
            phone_number: ActiveValue::Set(params.phone_number),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        tracing::info!("Registered user {} ({})", user.id, user.nick);

        Ok(Some(User::from_entity(user, rank.name)))
    }

    /// Updates nick, email and phone number of a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - User not found
    /// - `Err(AuthError::AccessDenied)` - Actor is neither the user nor an admin
    /// - `Err(DomainError::SameName)` - Another user already has the nick
    pub async fn update(
        &self,
        params: UpdateUserParams,
        actor: &Actor,
    ) -> Result<Option<User>, AppError> {
        let Some((user, rank_name)) = self.find_with_rank(params.id).await? else {
            return Ok(None);
        };

        if !is_author_or_admin(actor, user.id) {
            return Err(AuthError::AccessDenied(actor.id, format!("modify user {}", user.id)).into());
        }

        if let Some(other) = self.find_by_nick(&params.nick).await? {
            if other.id != user.id {
                return Err(
                    DomainError::SameName("Nick with given name already exists!".to_string()).into(),
                );
            }
        }

        let mut active: entity::user::ActiveModel = user.into();
        active.nick = ActiveValue::Set(params.nick);
        active.email = ActiveValue::Set(params.email);
        active.phone_number = ActiveValue::Set(params.phone_number);
        let user = active.update(self.db).await?;

        Ok(Some(User::from_entity(user, rank_name)))
    }

    /// Deletes a user and every row that references them.
    ///
    /// # Returns
    /// - `Ok(Some(()))` - User deleted
    /// - `Ok(None)` - User not found
    /// - `Err(AuthError::AccessDenied)` - Actor is neither the user nor an admin
    pub async fn delete(&self, id: i32, actor: &Actor) -> Result<Option<()>, AppError> {
        if entity::prelude::User::find_by_id(id).one(self.db).await?.is_none() {
            return Ok(None);
        }

        if !is_author_or_admin(actor, id) {
            return Err(AuthError::AccessDenied(actor.id, format!("delete user {}", id)).into());
        }

        let txn = self.db.begin().await?;
        cascade::delete_user(&txn, id).await?;
        txn.commit().await?;

        tracing::info!("Deleted user {}", id);

        Ok(Some(()))
    }

    /// Assigns another rank to a user.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User with the new rank
    /// - `Ok(None)` - User or rank not found
    pub async fn change_rank(&self, id_user: i32, id_rank: i32) -> Result<Option<User>, AppError> {
        let Some(user) = entity::prelude::User::find_by_id(id_user).one(self.db).await? else {
            return Ok(None);
        };
        let Some(rank) = entity::prelude::Rank::find_by_id(id_rank).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.id_rank = ActiveValue::Set(rank.id);
        let user = active.update(self.db).await?;

        Ok(Some(User::from_entity(user, rank.name)))
    }

    /// Stores a profile photo.
    ///
    /// # Returns
    /// - `Ok(Some(()))` - Photo stored
    /// - `Ok(None)` - User not found
    /// - `Err(AuthError::AccessDenied)` - Actor is neither the user nor an admin
    pub async fn set_photo(
        &self,
        id: i32,
        photo: UserPhoto,
        actor: &Actor,
    ) -> Result<Option<()>, AppError> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        if !is_author_or_admin(actor, user.id) {
            return Err(AuthError::AccessDenied(actor.id, format!("set photo of user {}", id)).into());
        }

        let mut active: entity::user::ActiveModel = user.into();
        active.photo = ActiveValue::Set(Some(photo.data));
        active.photo_type = ActiveValue::Set(Some(photo.photo_type));
        active.update(self.db).await?;

        Ok(Some(()))
    }

    /// Gets a user's photo; `None` when the user or the photo is missing.
    pub async fn get_photo(&self, id: i32) -> Result<Option<UserPhoto>, AppError> {
        Ok(entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .and_then(|user| UserPhoto::from_columns(user.photo_type, user.photo)))
    }

    /// Replaces the stored password hash; `false` when the user does not exist.
    pub async fn set_password_hash(&self, id: i32, password_hash: String) -> Result<bool, AppError> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(false);
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.password = ActiveValue::Set(password_hash);
        active.update(self.db).await?;

        Ok(true)
    }

    /// Stores a refresh token, replacing the previous one.
    pub async fn set_refresh_token(
        &self,
        id: i32,
        token: String,
        expires_at: DateTime<Utc>,
    ) -> Result<(), AppError> {
        let Some(user) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(());
        };

        let mut active: entity::user::ActiveModel = user.into();
        active.refresh_token = ActiveValue::Set(Some(token));
        active.refresh_token_exp = ActiveValue::Set(Some(expires_at));
        active.update(self.db).await?;

        Ok(())
    }

    /// Finds the user holding a refresh token, with their rank name.
    pub async fn find_by_refresh_token(
        &self,
        token: &str,
    ) -> Result<Option<(entity::user::Model, String)>, AppError> {
        let row = entity::prelude::User::find()
            .filter(entity::user::Column::RefreshToken.eq(token))
            .find_also_related(entity::prelude::Rank)
            .one(self.db)
            .await?;

        Ok(row.map(|(user, rank)| (user, rank.map(|r| r.name).unwrap_or_default())))
    }
}

/// Nicks of the given users keyed by id. Unknown ids are left out.
pub async fn nicks_of<C: ConnectionTrait>(
    conn: &C,
    ids: Vec<i32>,
) -> Result<HashMap<i32, String>, DbErr> {
    if ids.is_empty() {
        return Ok(HashMap::new());
    }

    Ok(entity::prelude::User::find()
        .filter(entity::user::Column::Id.is_in(ids))
        .all(conn)
        .await?
        .into_iter()
        .map(|u| (u.id, u.nick))
        .collect())
}
