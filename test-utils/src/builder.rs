use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Provides a fluent interface for configuring test environments with in-memory SQLite
/// databases. Use the builder pattern to add entity tables, then call `build()` to
/// create the configured test context.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Rank, User};
///
/// let test = TestBuilder::new()
///     .with_table(Rank)
///     .with_table(User)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements to execute during database setup, in insertion order.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    ///
    /// # Returns
    /// - New `TestBuilder` instance with empty table configuration
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Generates a CREATE TABLE IF NOT EXISTS statement from the provided SeaORM entity
    /// using SQLite backend syntax, so presets that share tables can be chained freely.
    /// Tables with foreign keys should be added after their referenced tables.
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity model implementing `EntityTrait` to create table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut stmt = schema.create_table_from_entity(entity);
        stmt.if_not_exists();
        self.tables.push(stmt);
        self
    }

    /// Adds the rank and user tables every other preset depends on.
    pub fn with_user_tables(self) -> Self {
        self.with_table(Rank).with_table(User)
    }

    /// Adds posts with their tags, likes, comments and the post/comment report tables.
    pub fn with_post_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Post)
            .with_table(Tag)
            .with_table(PostTag)
            .with_table(LikePost)
            .with_table(CommentPost)
            .with_table(Reason)
            .with_table(ReportPost)
            .with_table(ReportCommentPost)
    }

    /// Adds articles with their tags, likes, comments and comment report table.
    pub fn with_article_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Article)
            .with_table(Tag)
            .with_table(ArticleTag)
            .with_table(LikeArticle)
            .with_table(CommentArticle)
            .with_table(Reason)
            .with_table(ReportCommentArticle)
    }

    /// Adds profile comments and their report table.
    pub fn with_profile_comment_tables(self) -> Self {
        self.with_user_tables()
            .with_table(ProfileComment)
            .with_table(Reason)
            .with_table(ReportProfileComment)
    }

    /// Adds friend, blocked user and user report tables.
    pub fn with_social_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Friend)
            .with_table(BlockedUser)
            .with_table(Reason)
            .with_table(ReportUser)
    }

    /// Adds groups with their memberships and messages.
    pub fn with_group_tables(self) -> Self {
        self.with_user_tables()
            .with_table(Group)
            .with_table(GroupUser)
            .with_table(GroupUserMessage)
    }

    /// Adds the complete schema.
    ///
    /// Use this when testing operations that cascade across entity families, such as
    /// deleting a user, or when driving the full HTTP router.
    pub fn with_all_tables(self) -> Self {
        self.with_post_tables()
            .with_article_tables()
            .with_profile_comment_tables()
            .with_social_tables()
            .with_group_tables()
    }

    /// Builds and initializes the test context with configured tables.
    ///
    /// Creates an in-memory SQLite database connection and executes all CREATE TABLE
    /// statements that were added via `with_table()`, in the order they were added.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully initialized test context with database and tables ready
    /// - `Err(TestError::Database)`- Failed to connect to database or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        TestContext::create(self.tables).await
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
