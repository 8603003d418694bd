//! SeaORM entity models for the content platform schema.

pub mod prelude;

pub mod category;
pub mod content;
pub mod content_category;
pub mod content_genre;
pub mod content_sponsor;
pub mod genre;
pub mod sponsor;
pub mod user;
