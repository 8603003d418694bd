//! Category domain models and parameters.

use serde::{Deserialize, Serialize};

use crate::{
    model::category::{CreateCategoryDto, CategoryDto, UpdateCategoryDto},
    server::error::validation::{FieldError, Validate, Violations},
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
}

impl Category {
    pub fn into_dto(self) -> CategoryDto {
        CategoryDto {
            id: self.id,
            name: self.name,
        }
    }

    pub fn from_entity(entity: entity::category::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateCategoryParams {
    pub name: String,
}

impl CreateCategoryParams {
    pub fn from_dto(dto: CreateCategoryDto) -> Self {
        Self {
            name: dto.name.trim().to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpdateCategoryParams {
    pub id: i32,
    pub name: Option<String>,
}

impl UpdateCategoryParams {
    pub fn from_dto(id: i32, dto: UpdateCategoryDto) -> Self {
        Self {
            id,
            name: dto.name.map(|name| name.trim().to_string()),
        }
    }
}

impl Validate for CreateCategoryDto {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Violations::new();
        violations.require_non_empty("name", &self.name);
        violations.into_result()
    }
}

impl Validate for UpdateCategoryDto {
    fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut violations = Violations::new();
        if let Some(ref name) = self.name {
            violations.require_non_empty("name", name);
        }
        violations.into_result()
    }
}
