//! Server-side API backend and business logic.
//!
//! This module contains the complete backend implementation: API endpoints, business
//! logic, data access and the adapters for external services. The backend uses Axum as
//! the web framework and SeaORM for database operations.
//!
//! # Architecture
//!
//! The server follows a layered architecture with clear separation of concerns:
//!
//! - **Controller Layer** (`controller/`) - HTTP request handlers, access control, and DTO conversion
//! - **Service Layer** (`service/`) - Business logic orchestration between controllers and data layer
//! - **Data Layer** (`data/`) - Database operations and entity-to-domain model conversion
//! - **Model Layer** (`model/`) - Domain models and operation-specific parameter types
//! - **Error Layer** (`error/`) - Application error types and HTTP response mapping
//! - **Middleware** (`middleware/`) - Bearer token guard and session wrapper
//!
//! # Infrastructure
//!
//! - **Configuration** (`config`) - Environment-based application configuration
//! - **State** (`state`) - Shared application state (DB, token service, ports)
//! - **Startup** (`startup`) - Initialization of database, sessions, cache and HTTP client
//! - **Router** (`router`) - Axum route configuration and API documentation
//! - **Cache** (`cache/`) - Cache-aside helper over Redis or an in-process map
//! - **Subscription** (`subscription/`) - SOAP client for the subscription service
//! - **Storage** (`storage`) - Upload file store
//!
//! # Request Flow
//!
//! 1. **Router** receives HTTP request and routes to appropriate controller
//! 2. **Middleware** resolves the caller's identity from the bearer token
//! 3. **Controller** checks access, converts DTOs to params, calls service
//! 4. **Service** executes business logic, orchestrates data operations and the cache
//! 5. **Data** queries database, converts entities to domain models
//! 6. **Controller** converts domain model to DTO, returns HTTP response

pub mod cache;
pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
pub mod state;
pub mod storage;
pub mod subscription;
pub mod util;

#[cfg(test)]
pub mod testing;
