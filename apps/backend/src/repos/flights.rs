//! Flights repository functions for domain layer.

use sea_orm::ConnectionTrait;

use crate::adapters::flights_sea as flights_adapter;
use crate::entities::flights;
use crate::errors::domain::DomainError;

/// Flight domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Flight {
    pub id: i64,
    pub airline_id: i64,
    pub flight_number: String,
    pub dpt_airport: String,
    pub arr_airport: String,
    pub has_bid: bool,
    pub active: bool,
}

/// Fare domain model; values are post-reconciliation (pivot overrides applied)
#[derive(Debug, Clone, PartialEq)]
pub struct Fare {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub price: f64,
    pub cost: f64,
    pub capacity: i32,
}

/// Subfleet domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Subfleet {
    pub id: i64,
    pub airline_id: i64,
    pub name: String,
    pub type_code: String,
}

/// A flight's base fare with the pivot overrides still unapplied.
#[derive(Debug, Clone, PartialEq)]
pub struct FareRow {
    pub fare: Fare,
    pub price_override: Option<f64>,
    pub cost_override: Option<f64>,
    pub capacity_override: Option<i32>,
}

/// Find a flight by id
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    flight_id: i64,
) -> Result<Option<Flight>, DomainError> {
    let flight = flights_adapter::find_by_id(conn, flight_id).await?;
    Ok(flight.map(Flight::from))
}

/// Persist the denormalized has_bid flag
pub async fn set_has_bid<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    flight_id: i64,
    has_bid: bool,
) -> Result<(), DomainError> {
    flights_adapter::set_has_bid(conn, flight_id, has_bid).await?;
    Ok(())
}

/// Load the flight's fares with their pivot overrides
pub async fn fare_rows<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    flight_id: i64,
) -> Result<Vec<FareRow>, DomainError> {
    let rows = flights_adapter::fares_with_overrides(conn, flight_id).await?;
    Ok(rows
        .into_iter()
        .filter_map(|(pivot, fare)| {
            fare.map(|f| FareRow {
                fare: Fare {
                    id: f.id,
                    code: f.code,
                    name: f.name,
                    price: f.price,
                    cost: f.cost,
                    capacity: f.capacity,
                },
                price_override: pivot.price,
                cost_override: pivot.cost,
                capacity_override: pivot.capacity,
            })
        })
        .collect())
}

/// Load the subfleets attached to a flight
pub async fn subfleets<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    flight_id: i64,
) -> Result<Vec<Subfleet>, DomainError> {
    let subfleets = flights_adapter::subfleets_for_flight(conn, flight_id).await?;
    Ok(subfleets
        .into_iter()
        .map(|sf| Subfleet {
            id: sf.id,
            airline_id: sf.airline_id,
            name: sf.name,
            type_code: sf.type_code,
        })
        .collect())
}

// Conversions between SeaORM models and domain models

impl From<flights::Model> for Flight {
    fn from(model: flights::Model) -> Self {
        Self {
            id: model.id,
            airline_id: model.airline_id,
            flight_number: model.flight_number,
            dpt_airport: model.dpt_airport,
            arr_airport: model.arr_airport,
            has_bid: model.has_bid,
            active: model.active,
        }
    }
}
