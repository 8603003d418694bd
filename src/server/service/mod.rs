//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Logic**: Ownership, admin and subscription checks, uniqueness rules
//! - **Orchestration**: Coordinating repositories, the file store and the subscription service
//! - **Caching**: Serving collection reads from the cache and invalidating them on writes
//! - **Transaction Management**: Writing content rows and associations atomically

pub mod access;
pub mod auth;
pub mod category;
pub mod content;
pub mod genre;
pub mod sponsor;
pub mod user;

#[cfg(test)]
mod test;
