use std::time::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_JWT_TTL_SECONDS: u64 = 1800;
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:5173,http://localhost:8081";

pub struct Config {
    pub database_url: String,

    pub jwt_secret: String,
    pub jwt_ttl: Duration,

    pub redis_url: Option<String>,

    pub soap_url: String,
    pub soap_api_key: String,

    pub upload_dir: String,
    pub port: u16,
    pub allowed_origins: Vec<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let jwt_ttl_seconds = optional_var("JWT_TTL_SECONDS")
            .map(|value| parse_var::<u64>("JWT_TTL_SECONDS", &value))
            .transpose()?
            .unwrap_or(DEFAULT_JWT_TTL_SECONDS);

        let port = optional_var("PORT")
            .map(|value| parse_var::<u16>("PORT", &value))
            .transpose()?
            .unwrap_or(DEFAULT_PORT);

        let allowed_origins = optional_var("ALLOWED_ORIGINS")
            .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string())
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(str::to_string)
            .collect();

        Ok(Self {
            database_url: required_var("DATABASE_URL")?,
            jwt_secret: required_var("JWT_SECRET")?,
            jwt_ttl: Duration::from_secs(jwt_ttl_seconds),
            redis_url: optional_var("REDIS_URL"),
            soap_url: url_var("SOAP_URL")?,
            soap_api_key: required_var("SOAP_API_KEY")?,
            upload_dir: optional_var("UPLOAD_DIR").unwrap_or_else(|| DEFAULT_UPLOAD_DIR.to_string()),
            port,
            allowed_origins,
        })
    }
}

fn required_var(name: &str) -> Result<String, ConfigError> {
    std::env::var(name).map_err(|_| ConfigError::MissingEnvVar(name.to_string()))
}

/// Reads an optional variable, treating an empty value as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Reads a required variable that must be an absolute URL.
fn url_var(name: &str) -> Result<String, ConfigError> {
    let value = required_var(name)?;

    url::Url::parse(value.trim()).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })?;

    Ok(value.trim().to_string())
}

fn parse_var<T>(name: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value.trim().parse::<T>().map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_valid_port() {
        assert_eq!(parse_var::<u16>("PORT", " 8080 ").unwrap(), 8080);
    }

    #[test]
    fn rejects_relative_soap_url() {
        std::env::set_var("BONDFLIX_TEST_SOAP_URL", "/ws/subscription");

        let result = url_var("BONDFLIX_TEST_SOAP_URL");

        assert!(matches!(result, Err(ConfigError::InvalidEnvVar { .. })));
    }

    #[test]
    fn rejects_malformed_ttl() {
        let result = parse_var::<u64>("JWT_TTL_SECONDS", "half an hour");

        assert!(matches!(
            result,
            Err(ConfigError::InvalidEnvVar { ref name, .. }) if name == "JWT_TTL_SECONDS"
        ));
    }
}
