use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::error::TestError;

/// Database of a single test, produced by [`TestBuilder::build`](crate::builder::TestBuilder::build).
///
/// Every context owns its own `sqlite::memory:` connection, so tests never see each
/// other's rows. `db` is always `Some` after a successful build.
pub struct TestContext {
    pub db: Option<DatabaseConnection>,
}

impl TestContext {
    /// Opens a fresh in-memory database and runs the given statements in order.
    pub(crate) async fn create(stmts: Vec<TableCreateStatement>) -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        for stmt in &stmts {
            db.execute(stmt).await?;
        }

        Ok(Self { db: Some(db) })
    }
}
