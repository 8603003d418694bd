//! Genre domain models and parameters.

use serde::{Deserialize, Serialize};

use crate::{
    model::genre::{CreateGenreDto, GenreDto, UpdateGenreDto},
    server::error::validation::{FieldError, Validate, Violations},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: i32,
    pub name: String,
}

impl Genre {
    pub fn into_dto(self) -> GenreDto {
        GenreDto {
            id: self.id,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::genre::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateGenreParams {
    pub name: String,
}

impl CreateGenreParams {
    pub fn from_dto(dto: CreateGenreDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateGenreParams {
    pub id: i32,
    pub name: Option<String>,
}

impl UpdateGenreParams {
    pub fn from_dto(id: i32, dto: UpdateGenreDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
        }
    }
}

impl Validate for CreateGenreDto {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Violations::new();
        violations.require_non_empty("name", &self.name);
        violations.into_result()
    }
}

impl Validate for UpdateGenreDto {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Violations::new();
        if let Some(ref name) = self.name {
            violations.require_non_empty("name", name);
        }
        violations.into_result()
    }
}
