//! Sponsor factory.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test sponsors.
pub struct SponsorFactory<'a> {
    db: &'a DatabaseConnection,
    name: String,
    sponsor_status: String,
    link: String,
}

impl<'a> SponsorFactory<'a> {
    /// Defaults: name `"Sponsor {id}"`, status `COMPANY`, link `https://sponsor{id}.example.com`.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            name: format!("Sponsor {}", id),
            sponsor_status: "COMPANY".to_string(),
            link: format!("https://sponsor{}.example.com", id),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn sponsor_status(mut self, status: impl Into<String>) -> Self {
        self.sponsor_status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::sponsor::Model, DbErr> {
        entity::sponsor::ActiveModel {
            name: ActiveValue::Set(self.name),
            sponsor_status: ActiveValue::Set(self.sponsor_status),
            link: ActiveValue::Set(self.link),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a sponsor with default values.
pub async fn create_sponsor(db: &DatabaseConnection) -> Result<entity::sponsor::Model, DbErr> {
    SponsorFactory::new(db).build().await
}
