use sea_orm::{Database, DatabaseConnection};

use crate::config::db::{db_url, ConfigError, DbProfile};
use crate::errors::domain::{DomainError, InfraErrorKind};

/// Connect to the database for the given profile.
///
/// This function does NOT run any migrations.
pub async fn connect_db(profile: DbProfile) -> Result<DatabaseConnection, DomainError> {
    let database_url = db_url(profile).map_err(ConfigError::into_domain)?;

    let conn = Database::connect(&database_url)
        .await
        .map_err(|e| DomainError::infra(InfraErrorKind::DbUnavailable, e.to_string()))?;
    Ok(conn)
}
