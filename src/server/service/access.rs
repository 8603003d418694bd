//! Per-request read/write decisions for content.
//!
//! Ownership and the admin flag are checked locally first; the subscription service is
//! only asked when neither grants access. The authorizer never fails: an unreachable or
//! ambiguous subscription answer counts as "not subscribed".

use crate::server::{
    model::{auth::Identity, content::Content},
    subscription::SubscriptionOracle,
};

pub struct ContentAccess<'a> {
    subscriptions: &'a dyn SubscriptionOracle,
}

impl<'a> ContentAccess<'a> {
    pub fn new(subscriptions: &'a dyn SubscriptionOracle) -> Self {
        Self { subscriptions }
    }

    /// Whether `identity` may update or delete `content`: its creator or an admin.
    pub fn can_write(identity: &Identity, content: &Content) -> bool {
        identity.owns_or_admin(content.creator_id)
    }

    /// Whether `identity` may read `content`.
    ///
    /// True for the creator and for admins without contacting the subscription service,
    /// otherwise true only if the service affirms a subscription to the creator.
    pub async fn can_read(&self, identity: &Identity, content: &Content) -> bool {
        self.can_view_creator(identity, content.creator_id).await
    }

    /// Whether `identity` may see content published by `creator_id`.
    ///
    /// Same decision as [`ContentAccess::can_read`], for listings by creator.
    pub async fn can_view_creator(&self, identity: &Identity, creator_id: i32) -> bool {
        if identity.owns_or_admin(creator_id) {
            return true;
        }

        match self
            .subscriptions
            .is_subscribed(identity.user_id, creator_id)
            .await
        {
            Ok(reply) => reply.is_affirmative(),
            Err(e) => {
                tracing::warn!(
                    "Subscription check for user {} on creator {} failed: {}",
                    identity.user_id,
                    creator_id,
                    e
                );
                false
            }
        }
    }
}
