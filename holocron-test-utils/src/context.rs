//! Test context returned by `TestBuilder`.

use migration::{Migrator, MigratorTrait};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{constant::TEST_JWT_SECRET, error::TestError};

/// Test environment wrapping an in-memory SQLite database
///
/// Most tests should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let test = TestBuilder::new().with_catalog_tables().build().await?;
///
/// test.catalog().insert_planet("Tatooine", 10465, 200000, "desert").await?;
///
/// let state: AppState = test.to_app_state();
/// ```
pub struct TestContext {
    /// Database connection to in-memory SQLite database
    pub db: DatabaseConnection,
}

impl TestContext {
    /// Convert the database into any type that can be built from a connection & signing secret
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main holocron crate.
    pub fn to_app_state<T>(&self) -> T
    where
        T: for<'a> From<(DatabaseConnection, &'a str)>,
    {
        T::from((self.db.clone(), TEST_JWT_SECRET))
    }
}

impl TestContext {
    /// Create a new test context backed by an empty in-memory SQLite database.
    pub(crate) async fn new() -> Result<Self, TestError> {
        let db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext { db })
    }

    /// Executes CREATE TABLE statements for all provided table schemas.
    pub(crate) async fn with_tables(
        &self,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            self.db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Runs every schema migration, including unique indexes that entity-generated
    /// tables don't carry.
    pub(crate) async fn with_migrations(&self) -> Result<(), TestError> {
        Migrator::up(&self.db, None).await?;

        Ok(())
    }
}
