pub use sea_orm_migration::prelude::*;

mod m20251210_000001_create_user_table;
mod m20251210_000002_create_genre_table;
mod m20251210_000003_create_category_table;
mod m20251210_000004_create_sponsor_table;
mod m20251211_000005_create_content_table;
mod m20251211_000006_create_content_genre_table;
mod m20251211_000007_create_content_category_table;
mod m20251211_000008_create_content_sponsor_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20251210_000001_create_user_table::Migration),
            Box::new(m20251210_000002_create_genre_table::Migration),
            Box::new(m20251210_000003_create_category_table::Migration),
            Box::new(m20251210_000004_create_sponsor_table::Migration),
            Box::new(m20251211_000005_create_content_table::Migration),
            Box::new(m20251211_000006_create_content_genre_table::Migration),
            Box::new(m20251211_000007_create_content_category_table::Migration),
            Box::new(m20251211_000008_create_content_sponsor_table::Migration),
        ]
    }
}
