//! HTTP handlers.
//!
//! Each handler authenticates through [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! converts the request into domain parameters, calls a service and wraps the result in
//! the `{message, data}` envelope.

pub mod auth;
pub mod category;
pub mod content;
pub mod genre;
pub mod sponsor;
pub mod user;

#[cfg(test)]
mod test;
