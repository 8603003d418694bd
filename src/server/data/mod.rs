//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to keep the entity types out of the service layer. Repositories are
//! generic over `ConnectionTrait` so the same code runs on a pooled connection or inside a
//! transaction.

use sea_orm::sea_query::LikeExpr;

pub mod category;
pub mod content;
pub mod genre;
pub mod sponsor;
pub mod user;

#[cfg(test)]
mod test;

/// `LIKE` pattern matching rows that contain `term` literally.
fn contains_pattern(term: &str) -> LikeExpr {
    LikeExpr::new(format!("%{}%", escape_like(term))).escape('\\')
}

/// `LIKE` pattern matching rows that start with `term` literally.
fn prefix_pattern(term: &str) -> LikeExpr {
    LikeExpr::new(format!("{}%", escape_like(term))).escape('\\')
}

/// Escapes the `LIKE` wildcards `%` and `_` and the escape character itself.
fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}
