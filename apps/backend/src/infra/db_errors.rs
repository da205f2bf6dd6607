//! SeaORM -> DomainError translation helpers.
//!
//! Adapters convert `sea_orm::DbErr` into `DomainError` here; persistence
//! faults carry no bid-specific recovery and surface as `Infra` errors.

use sea_orm::error::SqlErr;
use tracing::warn;

use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};

/// Translate a `DbErr` into a `DomainError`.
pub fn map_db_err(e: sea_orm::DbErr) -> DomainError {
    match &e {
        sea_orm::DbErr::RecordNotFound(_) => {
            DomainError::not_found(NotFoundKind::Other("Record".into()), "Record not found")
        }
        sea_orm::DbErr::Conn(_) | sea_orm::DbErr::ConnectionAcquire(_) => {
            warn!(error = %e, "database unavailable");
            DomainError::infra(InfraErrorKind::DbUnavailable, e.to_string())
        }
        _ => match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => DomainError::conflict(
                ConflictKind::Other("UniqueConstraint".into()),
                format!("unique constraint violated: {detail}"),
            ),
            Some(SqlErr::ForeignKeyConstraintViolation(detail)) => DomainError::conflict(
                ConflictKind::Other("ForeignKeyConstraint".into()),
                format!("foreign key constraint violated: {detail}"),
            ),
            _ => {
                warn!(error = %e, "unmapped database error");
                DomainError::infra(InfraErrorKind::Other("Db".into()), e.to_string())
            }
        },
    }
}

impl From<sea_orm::DbErr> for DomainError {
    fn from(e: sea_orm::DbErr) -> Self {
        map_db_err(e)
    }
}
