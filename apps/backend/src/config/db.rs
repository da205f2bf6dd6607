use std::env;

use crate::errors::domain::{DomainError, InfraErrorKind};

/// Configuration errors raised while assembling the database URL.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(String),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    pub fn into_domain(self) -> DomainError {
        DomainError::infra(InfraErrorKind::Other("Config".into()), self.to_string())
    }
}

/// Database profile enum for different environments
#[derive(Debug, Clone, PartialEq)]
pub enum DbProfile {
    /// Production database profile
    Prod,
    /// Test database profile - enforces safety rules
    Test,
}

/// Builds a database URL from environment variables based on profile
pub fn db_url(profile: DbProfile) -> Result<String, ConfigError> {
    let host = host();
    let port = port();
    let db_name = db_name(profile)?;
    let (username, password) = credentials()?;

    let url = format!("postgresql://{username}:{password}@{host}:{port}/{db_name}");
    Ok(url)
}

/// Get database host from environment (defaults to localhost)
fn host() -> String {
    env::var("POSTGRES_HOST").unwrap_or_else(|_| "localhost".to_string())
}

/// Get database port from environment (defaults to 5432)
fn port() -> String {
    env::var("POSTGRES_PORT").unwrap_or_else(|_| "5432".to_string())
}

/// Get database name based on profile
fn db_name(profile: DbProfile) -> Result<String, ConfigError> {
    match profile {
        DbProfile::Prod => must_var("PROD_DB"),
        DbProfile::Test => {
            let db_name = must_var("TEST_DB")?;
            // Enforce safety: test DB must end with "_test"
            if !db_name.ends_with("_test") {
                return Err(ConfigError::Invalid(format!(
                    "Test profile requires database name to end with '_test', but got: '{db_name}'"
                )));
            }
            Ok(db_name)
        }
    }
}

fn credentials() -> Result<(String, String), ConfigError> {
    let username = must_var("APP_DB_USER")?;
    let password = must_var("APP_DB_PASSWORD")?;
    Ok((username, password))
}

fn must_var(name: &str) -> Result<String, ConfigError> {
    env::var(name).map_err(|_| ConfigError::MissingVar(name.to_string()))
}
