//! User factory for creating test user entities.
//!
//! This module provides factory methods for creating user entities with sensible
//! defaults, reducing boilerplate in tests. The factory supports customization
//! through a builder pattern.

use crate::factory::{helpers::next_id, rank::create_rank};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Plain password every factory user can log in with.
pub const DEFAULT_PASSWORD: &str = "password";

/// Argon2id hash of [`DEFAULT_PASSWORD`], precomputed so factories stay fast.
pub const DEFAULT_PASSWORD_HASH: &str =
    "$argon2id$v=19$m=19456,t=2,p=1$Z3J5emlsbGF0ZXN0c2FsdA$Uujaaay6ZHGgV84xB+1naMpqLaVj8+9Ri94g0Wd0CPY";

/// Factory for creating test users with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::user::UserFactory;
///
/// let user = UserFactory::new(&db)
///     .nick("CustomNick")
///     .rank(rank.id)
///     .build()
///     .await?;
/// ```
pub struct UserFactory<'a> {
    db: &'a DatabaseConnection,
    id_rank: Option<i32>,
    nick: String,
    password: String,
    email: String,
    phone_number: Option<String>,
}

impl<'a> UserFactory<'a> {
    /// Creates a new UserFactory with default values.
    ///
    /// Defaults:
    /// - id_rank: a freshly created rank unless `rank()` is called
    /// - nick: `"user_{id}"` where id is auto-incremented
    /// - password: [`DEFAULT_PASSWORD_HASH`]
    /// - email: `"user_{id}@example.com"`
    /// - phone_number: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `UserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id_rank: None,
            nick: format!("user_{}", id),
            password: DEFAULT_PASSWORD_HASH.to_string(),
            email: format!("user_{}@example.com", id),
            phone_number: None,
        }
    }

    /// Sets the rank of the user.
    ///
    /// # Arguments
    /// - `id_rank` - Id of an existing rank row
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn rank(mut self, id_rank: i32) -> Self {
        self.id_rank = Some(id_rank);
        self
    }

    /// Sets the nick for the user.
    ///
    /// # Arguments
    /// - `nick` - Unique nickname
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn nick(mut self, nick: impl Into<String>) -> Self {
        self.nick = nick.into();
        self
    }

    /// Sets the stored password value verbatim (callers pass a hash).
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = password.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = Some(phone_number.into());
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// Creates a default rank first when no rank was set.
    ///
    /// # Returns
    /// - `Ok(entity::user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::user::Model, DbErr> {
        let id_rank = match self.id_rank {
            Some(id) => id,
            None => create_rank(self.db).await?.id,
        };

        entity::user::ActiveModel {
            id_rank: ActiveValue::Set(id_rank),
            nick: ActiveValue::Set(self.nick),
            password: ActiveValue::Set(self.password),
            email: ActiveValue::Set(self.email),
            phone_number: ActiveValue::Set(self.phone_number),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a user with default values.
///
/// Shorthand for `UserFactory::new(db).build().await`.
///
/// # Example
///
/// ```rust,ignore
/// let user = create_user(&db).await?;
/// ```
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).build().await
}

/// Creates a user holding the given rank.
pub async fn create_user_with_rank(
    db: &DatabaseConnection,
    id_rank: i32,
) -> Result<entity::user::Model, DbErr> {
    UserFactory::new(db).rank(id_rank).build().await
}
