//! Rank factory for creating test rank entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test ranks with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let admin = RankFactory::new(&db).name("Admin").level(4).build().await?;
/// ```
pub struct RankFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    rank_level: i32,
}

impl<'a> RankFactory<'a> {
    /// Creates a new RankFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Rank {id}"` where id is auto-incremented
    /// - rank_level: `1`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            name: format!("Rank {}", next_id()),
            rank_level: 1,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn level(mut self, rank_level: i32) -> Self {
        self.rank_level = rank_level;
        self
    }

    /// Builds and inserts the rank entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::rank::Model)` - Created rank entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::rank::Model, DbErr> {
        entity::rank::ActiveModel {
            name: ActiveValue::Set(self.name),
            rank_level: ActiveValue::Set(self.rank_level),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a rank with default values.
///
/// Shorthand for `RankFactory::new(db).build().await`.
pub async fn create_rank(db: &DatabaseConnection) -> Result<entity::rank::Model, DbErr> {
    RankFactory::new(db).build().await
}

/// Creates a rank with the given name and level.
pub async fn create_named_rank(
    db: &DatabaseConnection,
    name: &str,
    rank_level: i32,
) -> Result<entity::rank::Model, DbErr> {
    RankFactory::new(db).name(name).level(rank_level).build().await
}
