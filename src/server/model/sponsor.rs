//! Sponsor domain models and parameters.

use serde::{Deserialize, Serialize};

use crate::{
    model::sponsor::{CreateSponsorDto, SponsorDto, SponsorStatus, UpdateSponsorDto},
    server::error::{
        validation::{FieldError, Validate, Violations},
        AppError,
    },
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sponsor {
    pub id: i32,
    pub name: String,
    pub sponsor_status: SponsorStatus,
    pub link: String,
}

impl Sponsor {
    pub fn into_dto(self) -> SponsorDto {
        SponsorDto {
            id: self.id,
            name: self.name,
            sponsor_status: self.sponsor_status,
            link: self.link,
        }
    }

    /// Converts a sponsor row, parsing its stored status.
    ///
    /// # Returns
    /// - `Ok(Sponsor)` - Converted sponsor
    /// - `Err(AppError::InternalError)` - Stored status is not a known value
    pub fn from_entity(entity: entity::sponsor::Model) -> Result<Self, AppError> {
        let sponsor_status = entity.sponsor_status.parse::<SponsorStatus>().map_err(|e| {
            AppError::InternalError(format!("Sponsor {} has {}", entity.id, e))
        })?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            sponsor_status,
            link: entity.link,
        })
    }
}

#[derive(Debug, Clone)]
pub struct CreateSponsorParams {
    pub name: String,
    pub sponsor_status: SponsorStatus,
    pub link: String,
}

impl CreateSponsorParams {
    pub fn from_dto(dto: CreateSponsorDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
            sponsor_status: dto.sponsor_status,
            link: dto.link.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateSponsorParams {
    pub id: i32,
    pub name: Option<String>,
    pub sponsor_status: Option<SponsorStatus>,
    pub link: Option<String>,
}

impl UpdateSponsorParams {
    pub fn from_dto(id: i32, dto: UpdateSponsorDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
            sponsor_status: dto.sponsor_status,
            link: dto.link.map(|link| link.trim().to_string()),
        }
    }
}

impl Validate for CreateSponsorDto {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Violations::new();
        violations.require_non_empty("name", &self.name);
        violations.require_non_empty("link", &self.link);
        violations.into_result()
    }
}

impl Validate for UpdateSponsorDto {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Violations::new();
        if let Some(ref name) = self.name {
            violations.require_non_empty("name", name);
        }
        if let Some(ref link) = self.link {
            violations.require_non_empty("link", link);
        }
        violations.into_result()
    }
}
