//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{error::TestError, TestContext};

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables and
/// user fixtures. Methods can be chained together and finalized with `build()`.
pub struct TestBuilder {
    // Tables to create
    tables: Vec<TableCreateStatement>,
    include_user_tables: bool,
    include_recipe_tables: bool,

    // Database fixtures to insert
    users: Vec<String>, // emails
}

impl TestBuilder {
    /// Create a new TestBuilder.
    ///
    /// Initializes an empty builder with no tables or fixtures configured.
    pub fn new() -> Self {
        Self {
            tables: Vec::new(),
            include_user_tables: false,
            include_recipe_tables: false,
            users: Vec::new(),
        }
    }

    /// Add the user and auth token tables to the test database.
    pub fn with_user_tables(mut self) -> Self {
        self.include_user_tables = true;
        self
    }

    /// Add the tag, ingredient and recipe tables to the test database.
    ///
    /// User tables are always created alongside, every recipe table references a user.
    pub fn with_recipe_tables(mut self) -> Self {
        self.include_user_tables = true;
        self.include_recipe_tables = true;
        self
    }

    /// Add a custom entity table to the test database.
    ///
    /// Generates a CREATE TABLE statement for the entity, which will be executed during `build()`
    /// after the user and recipe tables.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use pantry_test_utils::TestBuilder;
    /// use entity::prelude::*;
    ///
    /// # async fn example() -> Result<(), pantry_test_utils::TestError> {
    /// let test = TestBuilder::new()
    ///     .with_table(PantryUser)
    ///     .with_table(Tag)
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

    /// Insert a user with an unusable password during `build()`.
    ///
    /// Requires user tables, see [`TestBuilder::with_user_tables`].
    pub fn with_user(mut self, email: impl Into<String>) -> Self {
        self.users.push(email.into());
        self
    }

    /// Build the test setup by creating all configured tables and fixtures.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        // 1. Create tables, referenced tables first
        let mut all_tables = Vec::new();

        if self.include_user_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::PantryUser),
                schema.create_table_from_entity(entity::prelude::PantryAuthToken),
            ]);
        }

        if self.include_recipe_tables {
            all_tables.extend(vec![
                schema.create_table_from_entity(entity::prelude::Tag),
                schema.create_table_from_entity(entity::prelude::Ingredient),
                schema.create_table_from_entity(entity::prelude::Recipe),
            ]);
        }

        all_tables.extend(self.tables);
        setup.with_tables(all_tables).await?;

        // 2. Insert database fixtures
        for email in self.users {
            setup.user().insert_user(&email).await?;
        }

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
