pub use sea_orm_migration::prelude::*;
pub use sea_orm_migration::sea_orm::{ConnectionTrait, DatabaseConnection, DbErr};

mod m20260815_000001_init; // keep filename + module name in sync

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20260815_000001_init::Migration)]
    }
}

/// Run a migration command against an already-connected database.
///
/// Shared by the test harness and operational tooling; does not touch the
/// environment.
#[derive(Debug)]
pub enum MigrationCommand {
    Up,
    Down,
    Fresh,
    Status,
}

pub async fn migrate(db: &DatabaseConnection, command: MigrationCommand) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    tracing::info!("running migration command {command:?} on {backend:?}");

    let result = match command {
        MigrationCommand::Up => Migrator::up(db, None).await,
        MigrationCommand::Down => Migrator::down(db, None).await,
        MigrationCommand::Fresh => Migrator::fresh(db).await,
        MigrationCommand::Status => Migrator::status(db).await,
    };

    match result {
        Ok(()) => {
            tracing::info!("migration command {command:?} completed");
            Ok(())
        }
        Err(e) => {
            tracing::error!("migration command {command:?} failed: {e}");
            Err(e)
        }
    }
}
