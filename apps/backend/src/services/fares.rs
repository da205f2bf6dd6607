//! Fare reconciliation service.

use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::domain::DomainError;
use crate::repos::flights::{self, Fare};

/// Collaborator that recomputes the fare data attached to a flight view.
#[async_trait]
pub trait FareService: Send + Sync {
    /// Fares for the flight with any per-flight overrides applied.
    async fn get_reconciled_fares_for_flight(
        &self,
        conn: &DatabaseConnection,
        flight_id: i64,
    ) -> Result<Vec<Fare>, DomainError>;
}

/// Default reconciliation: pivot price/cost/capacity override the base fare
/// when set.
#[derive(Debug, Default)]
pub struct FareReconciler;

impl FareReconciler {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FareService for FareReconciler {
    async fn get_reconciled_fares_for_flight(
        &self,
        conn: &DatabaseConnection,
        flight_id: i64,
    ) -> Result<Vec<Fare>, DomainError> {
        let rows = flights::fare_rows(conn, flight_id).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let mut fare = row.fare;
                if let Some(price) = row.price_override {
                    fare.price = price;
                }
                if let Some(cost) = row.cost_override {
                    fare.cost = cost;
                }
                if let Some(capacity) = row.capacity_override {
                    fare.capacity = capacity;
                }
                fare
            })
            .collect())
    }
}
