//! Ports to the external subscription service.
//!
//! The subscription service owns the subscriber/creator relation. It answers whether a
//! user is subscribed to a creator, lists a creator's subscribers, and is notified when a
//! creator publishes new content. Nothing it returns is stored locally.

pub mod soap;

use async_trait::async_trait;
use thiserror::Error;

pub use self::soap::SoapClient;

#[derive(Error, Debug)]
pub enum SubscriptionError {
    /// Transport failure talking to the subscription service.
    #[error("Subscription service request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Subscription service answered with a non-success status code.
    #[error("Subscription service returned status {0}")]
    Status(u16),

    /// Reply did not contain the expected `<return>` element.
    #[error("Malformed subscription service reply: {0}")]
    MalformedReply(String),
}

/// Raw answer of a subscription check.
///
/// The service has answered with both real booleans and the strings `"true"`/`"false"`,
/// so the answer is kept as received and normalized by [`SubscriptionReply::is_affirmative`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubscriptionReply {
    Flag(bool),
    Text(String),
}

impl SubscriptionReply {
    /// Strict boolean reading of the reply.
    ///
    /// Only a boolean `true` or the text `true` (any case, surrounding whitespace ignored)
    /// count as subscribed.
    pub fn is_affirmative(&self) -> bool {
        match self {
            Self::Flag(flag) => *flag,
            Self::Text(text) => text.trim().eq_ignore_ascii_case("true"),
        }
    }
}

/// Answers "is user U subscribed to creator C".
#[async_trait]
pub trait SubscriptionOracle: Send + Sync {
    async fn is_subscribed(
        &self,
        subscriber_id: i32,
        creator_id: i32,
    ) -> Result<SubscriptionReply, SubscriptionError>;
}

/// Side-channel notifications and subscriber listing for creators.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    /// Tells the subscription service that `creator_id` published new content.
    async fn notify_on_create(&self, creator_id: i32) -> Result<(), SubscriptionError>;

    /// Ids of every user subscribed to `creator_id`.
    async fn list_subscriber_ids(&self, creator_id: i32) -> Result<Vec<i32>, SubscriptionError>;
}
