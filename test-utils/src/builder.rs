use entity::prelude::*;
use sea_orm::{sea_query::TableCreateStatement, EntityTrait, Schema};

use crate::{context::TestContext, error::TestError};

/// Builder for creating test contexts with customizable database schemas.
///
/// Add the entity tables a test needs, then call `build()` to create an in-memory SQLite
/// database with those tables.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::builder::TestBuilder;
/// use entity::prelude::{Genre, User};
///
/// let test = TestBuilder::new()
///     .with_table(User)
///     .with_table(Genre)
///     .build()
///     .await?;
/// ```
pub struct TestBuilder {
    /// CREATE TABLE statements executed in insertion order during `build()`.
    tables: Vec<TableCreateStatement>,
}

impl TestBuilder {
    /// Creates a new test builder with no tables configured.
    pub fn new() -> Self {
        Self { tables: Vec::new() }
    }

    /// Adds an entity table to the test database schema.
    ///
    /// Tables should be added in dependency order (tables with foreign keys after the
    /// tables they reference).
    ///
    /// # Arguments
    /// - `entity` - SeaORM entity to create a table for
    ///
    /// # Returns
    /// - `Self` - Builder instance for method chaining
    pub fn with_table<E: EntityTrait>(mut self, entity: E) -> Self {
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);
        self.tables.push(schema.create_table_from_entity(entity));
        self
    }

    /// Adds the user table only, enough for account and authentication tests.
    pub fn with_user_tables(self) -> Self {
        self.with_table(User)
    }

    /// Adds the tag-like tables (genre, category, sponsor).
    pub fn with_tag_tables(self) -> Self {
        self.with_table(Genre)
            .with_table(Category)
            .with_table(Sponsor)
    }

    /// Adds every table required for content operations.
    ///
    /// Adds in dependency order:
    /// - User
    /// - Genre, Category, Sponsor
    /// - Content
    /// - ContentGenre, ContentCategory, ContentSponsor
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let test = TestBuilder::new()
    ///     .with_content_tables()
    ///     .build()
    ///     .await?;
    /// ```
    pub fn with_content_tables(self) -> Self {
        self.with_table(User)
            .with_tag_tables()
            .with_table(Content)
            .with_table(ContentGenre)
            .with_table(ContentCategory)
            .with_table(ContentSponsor)
    }

    /// Builds the test context.
    ///
    /// Creates an in-memory SQLite database and executes all CREATE TABLE statements
    /// added via `with_table()`.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Initialized test context with tables ready
    /// - `Err(TestError::Database)` - Failed to connect or create tables
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new();

        setup.with_tables(self.tables).await?;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}
