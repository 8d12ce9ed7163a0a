//! Declarative test builder.
//!
//! The builder pattern allows chaining configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{constant::TEST_PASSWORD_HASH, error::TestError, TestContext};

/// Builder for declarative test initialization.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_catalog_tables: bool,
    run_migrations: bool,

    // Database fixtures to insert
    users: Vec<String>,                                  // emails
    characters: Vec<(String, String, String, String)>,   // (name, gender, hair_color, eye_color)
    planets: Vec<(String, i64, i64, String)>,            // (name, diameter, population, terrain)
    favorites: Vec<(usize, String, i32)>,                // (user fixture index, kind, favorite_id)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            include_catalog_tables: false,
            run_migrations: false,
            users: Vec::new(),
            characters: Vec::new(),
            planets: Vec::new(),
            favorites: Vec::new(),
        }
    }

    /// Add the user & favorite tables to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add the character & planet tables to the test database.
    pub fn with_catalog_tables(mut self) -> Self {
        self.include_catalog_tables = true;
        self
    }

    /// Create the schema by running the migrator instead of generating tables from entities.
    ///
    /// Unlike entity-generated tables, the migrated schema carries the composite unique
    /// indexes, so use this when a test needs the database itself to reject duplicates.
    pub fn with_migrations(mut self) -> Self {
        self.run_migrations = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use holocron_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), holocron_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(Planet)
    ///     .build()
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Insert a user with a placeholder password hash.
    ///
    /// Users are inserted in the order they are added; the first one gets ID 1.
    pub fn with_mock_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Insert a character with the provided attributes.
    pub fn with_mock_character(
        mut self,
        name: impl Into<String>,
        gender: impl Into<String>,
        hair_color: impl Into<String>,
        eye_color: impl Into<String>,
    ) -> Self {
        self.characters.push((
            name.into(),
            gender.into(),
            hair_color.into(),
            eye_color.into(),
        ));
        self
    }

    /// Insert a planet with the provided attributes.
    pub fn with_mock_planet(
        mut self,
        name: impl Into<String>,
        diameter: i64,
        population: i64,
        terrain: impl Into<String>,
    ) -> Self {
        self.planets
            .push((name.into(), diameter, population, terrain.into()));
        self
    }

    /// Insert a favorite owned by a previously added mock user.
    ///
    /// # Arguments
    /// - `user_index` - Position of the owning user among `with_mock_user` calls
    /// - `kind` - What the favorite refers to, e.g. `"planeta"`
    /// - `favorite_id` - ID of the referenced record
    pub fn with_mock_favorite(
        mut self,
        user_index: usize,
        kind: impl Into<String>,
        favorite_id: i32,
    ) -> Self {
        self.favorites.push((user_index, kind.into(), favorite_id));
        self
    }

    /// Build the test context by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let setup = TestContext::new().await?;

        // 1. Create tables
        if self.run_migrations {
            setup.with_migrations().await?;
        }

        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        let mut all_tables = Vec::new();

        if self.include_user_tables && !self.run_migrations {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::HolocronUser),
                schema.create_table_from_entity(entity::prelude::Favorite),
            ]);
        }

        if self.include_catalog_tables && !self.run_migrations {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Character),
                schema.create_table_from_entity(entity::prelude::Planet),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert fixtures
        let mut user_ids = Vec::with_capacity(self.users.len());
        for email in self.users {
            let user = setup.user().insert_user(&email, TEST_PASSWORD_HASH).await?;
            user_ids.push(user.id);
        }

        for (name, gender, hair_color, eye_color) in self.characters {
            setup
                .catalog()
                .insert_character(&name, &gender, &hair_color, &eye_color)
                .await?;
        }

        for (name, diameter, population, terrain) in self.planets {
            setup
                .catalog()
                .insert_planet(&name, diameter, population, &terrain)
                .await?;
        }

        for (user_index, kind, favorite_id) in self.favorites {
            let user_id = user_ids.get(user_index).copied().ok_or_else(|| {
                sea_orm::DbErr::Custom(format!(
                    "Favorite fixture references mock user {} but only {} were added",
                    user_index,
                    user_ids.len()
                ))
            })?;

            setup
                .favorite()
                .insert_favorite(user_id, &kind, favorite_id)
                .await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
