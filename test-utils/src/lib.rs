//! Bondflix Test Utils
//!
//! Shared testing utilities for the bondflix backend. Provides a builder for creating test
//! contexts backed by in-memory SQLite databases, plus factories that insert rows with
//! sensible defaults.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring which tables a test needs
//! - **TestContext**: Test environment holding the database connection and session
//! - **TestError**: Errors that can occur during test setup
//! - **factory**: Row factories for users, content, genres, categories and sponsors
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn creates_content() -> Result<(), sea_orm::DbErr> {
//!     let test = TestBuilder::new().with_content_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     let creator = factory::create_user(db).await?;
//!     let content = factory::create_content(db, creator.id).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
