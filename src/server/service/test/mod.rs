use crate::server::{
    cache::{keys, CacheStore, MemoryCache},
    error::AppError,
    model::auth::Identity,
    testing::{RecordingNotifier, RecordingOracle},
};
use test_utils::{builder::TestBuilder, factory};

mod access;
mod user;

fn identity(user_id: i32, is_admin: bool) -> Identity {
    Identity {
        user_id,
        username: format!("user_{}", user_id),
        name: format!("User {}", user_id),
        is_admin,
        issued_at: 0,
        expires_in: 1_800_000,
    }
}
