//! Application state shared across all request handlers.
//!
//! This module defines the `AppState` struct which holds every collaborator a handler
//! needs. The state is initialized once during startup and then cloned for each request
//! handler through Axum's state extraction. Handlers build short-lived services from
//! borrowed pieces of it; nothing is looked up globally.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use crate::server::{
    cache::CacheStore,
    service::auth::token::TokenService,
    storage::FileStore,
    subscription::{NotificationDispatcher, SubscriptionOracle},
};

/// Application state containing shared resources and dependencies.
///
/// All fields are cheap to clone:
/// - `DatabaseConnection` is a connection pool (clones share the pool)
/// - `TokenService` holds only the signing keys and lifetime
/// - the ports are reference-counted trait objects
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool for accessing persistent storage.
    pub db: DatabaseConnection,

    /// Issues and verifies bearer tokens.
    pub tokens: TokenService,

    /// Backing store for cached collection snapshots (Redis or in-process).
    pub cache: Arc<dyn CacheStore>,

    /// Answers subscription checks for content reads.
    pub subscriptions: Arc<dyn SubscriptionOracle>,

    /// Notifies subscribers and lists them per creator.
    pub notifier: Arc<dyn NotificationDispatcher>,

    /// Where uploaded files are written.
    pub files: FileStore,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `tokens` - Token service configured with the shared secret
    /// - `cache` - Cache backend
    /// - `subscriptions` - Subscription oracle
    /// - `notifier` - Notification dispatcher
    /// - `files` - File store for uploads
    pub fn new(
        db: DatabaseConnection,
        tokens: TokenService,
        cache: Arc<dyn CacheStore>,
        subscriptions: Arc<dyn SubscriptionOracle>,
        notifier: Arc<dyn NotificationDispatcher>,
        files: FileStore,
    ) -> Self {
        Self {
            db,
            tokens,
            cache,
            subscriptions,
            notifier,
            files,
        }
    }
}
