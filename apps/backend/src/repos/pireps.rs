//! Flight-report repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::pireps_sea as pireps_adapter;
use crate::entities::pireps;
use crate::errors::domain::DomainError;

/// Flight-report domain model. `flight_id` is None for off-schedule flights.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id: i64,
    pub user_id: i64,
    pub flight_id: Option<i64>,
    pub state: String,
}

/// Find a flight report by id
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    pirep_id: i64,
) -> Result<Option<Report>, DomainError> {
    let pirep = pireps_adapter::find_by_id(conn, pirep_id).await?;
    Ok(pirep.map(Report::from))
}

impl From<pireps::Model> for Report {
    fn from(model: pireps::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            flight_id: model.flight_id,
            state: model.state,
        }
    }
}
