//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the wire shapes of requests and responses. Server-side domain
//! models convert into them with `into_dto` at the controller boundary.

pub mod api;
pub mod auth;
pub mod category;
pub mod content;
pub mod genre;
pub mod sponsor;
pub mod user;
