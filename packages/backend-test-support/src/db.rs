//! In-memory SQLite database for tests.

use migration::{migrate, MigrationCommand};
use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};

/// Error raised while building a test database.
#[derive(Debug, thiserror::Error)]
pub enum TestDbError {
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

/// Connect to a fresh in-memory SQLite database and apply all migrations.
///
/// The pool is capped at a single connection: every connection to
/// `sqlite::memory:` gets its own database, so the schema must live on the
/// one connection the whole test uses.
pub async fn sqlite_mem() -> Result<DatabaseConnection, TestDbError> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1).min_connections(1);

    let db = Database::connect(options).await?;
    migrate(&db, MigrationCommand::Up).await?;
    Ok(db)
}
