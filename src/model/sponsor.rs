use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Legal form of a sponsor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SponsorStatus {
    Individual,
    Organization,
    Company,
    Government,
}

impl SponsorStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Individual => "INDIVIDUAL",
            Self::Organization => "ORGANIZATION",
            Self::Company => "COMPANY",
            Self::Government => "GOVERNMENT",
        }
    }
}

impl fmt::Display for SponsorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SponsorStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "INDIVIDUAL" => Ok(Self::Individual),
            "ORGANIZATION" => Ok(Self::Organization),
            "COMPANY" => Ok(Self::Company),
            "GOVERNMENT" => Ok(Self::Government),
            other => Err(format!("unknown sponsor status '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SponsorDto {
    pub id: i32,
    pub name: String,
    pub sponsor_status: SponsorStatus,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSponsorDto {
    pub name: String,
    pub sponsor_status: SponsorStatus,
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateSponsorDto {
    pub name: Option<String>,
    pub sponsor_status: Option<SponsorStatus>,
    pub link: Option<String>,
}
