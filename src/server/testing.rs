//! In-test collaborators shared by service, middleware and controller tests.

use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc, Mutex,
    },
    time::Duration,
};

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::server::{
    cache::MemoryCache,
    model::user::User,
    service::auth::token::TokenService,
    state::AppState,
    storage::FileStore,
    subscription::{
        NotificationDispatcher, SubscriptionError, SubscriptionOracle, SubscriptionReply,
    },
};

pub const TEST_SECRET: &str = "test-secret";

/// Subscription oracle with a fixed answer that counts how often it is asked.
///
/// `None` makes every call fail as if the service were down.
pub struct RecordingOracle {
    reply: Option<SubscriptionReply>,
    calls: AtomicUsize,
}

impl RecordingOracle {
    pub fn replying(reply: SubscriptionReply) -> Self {
        Self {
            reply: Some(reply),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            reply: None,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SubscriptionOracle for RecordingOracle {
    async fn is_subscribed(
        &self,
        _subscriber_id: i32,
        _creator_id: i32,
    ) -> Result<SubscriptionReply, SubscriptionError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        self.reply.clone().ok_or(SubscriptionError::Status(503))
    }
}

/// Notification dispatcher that records notified creators and serves a fixed
/// subscriber list.
#[derive(Default)]
pub struct RecordingNotifier {
    subscribers: Vec<i32>,
    fail: bool,
    notified: Mutex<Vec<i32>>,
}

impl RecordingNotifier {
    pub fn with_subscribers(subscribers: Vec<i32>) -> Self {
        Self {
            subscribers,
            ..Default::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Default::default()
        }
    }

    pub fn notified(&self) -> Vec<i32> {
        self.notified.lock().map(|n| n.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl NotificationDispatcher for RecordingNotifier {
    async fn notify_on_create(&self, creator_id: i32) -> Result<(), SubscriptionError> {
        if self.fail {
            return Err(SubscriptionError::Status(500));
        }

        if let Ok(mut notified) = self.notified.lock() {
            notified.push(creator_id);
        }

        Ok(())
    }

    async fn list_subscriber_ids(&self, _creator_id: i32) -> Result<Vec<i32>, SubscriptionError> {
        if self.fail {
            return Err(SubscriptionError::Status(500));
        }

        Ok(self.subscribers.clone())
    }
}

pub fn token_service() -> TokenService {
    TokenService::new(TEST_SECRET, Duration::from_secs(1800))
}

/// `Authorization` header value carrying a fresh token for `user`.
pub fn bearer(tokens: &TokenService, user: &entity::user::Model) -> String {
    let (token, _) = tokens
        .issue(&User::from_entity(user.clone()))
        .expect("token signs");

    format!("Bearer {}", token)
}

/// Application state over a test database with in-process collaborators.
pub fn test_state(
    db: &DatabaseConnection,
    cache: Arc<MemoryCache>,
    oracle: Arc<RecordingOracle>,
    notifier: Arc<RecordingNotifier>,
    files: FileStore,
) -> AppState {
    AppState::new(db.clone(), token_service(), cache, oracle, notifier, files)
}
