//! Domain models and operation parameters.
//!
//! Repositories convert entity rows into these models at the data-layer boundary;
//! controllers convert them into DTOs with `into_dto` before responding. Parameter types
//! carry the already-validated input of one operation.

pub mod auth;
pub mod category;
pub mod content;
pub mod genre;
pub mod sponsor;
pub mod user;
