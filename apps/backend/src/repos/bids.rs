//! Bids repository functions for domain layer.

use sea_orm::{ConnectionTrait, DatabaseTransaction};

use crate::adapters::bids_sea as bids_adapter;
use crate::entities::bids;
use crate::errors::domain::DomainError;
use crate::repos::flights::{Fare, Flight, Subfleet};

/// Bid domain model
#[derive(Debug, Clone, PartialEq)]
pub struct Bid {
    pub id: i64,
    pub user_id: i64,
    pub flight_id: i64,
    pub created_at: time::OffsetDateTime,
}

/// A bid with its flight view fully attached: the flight record plus its
/// reconciled fares and (possibly filtered) subfleets.
#[derive(Debug, Clone, PartialEq)]
pub struct BidWithFlight {
    pub bid: Bid,
    pub flight: Flight,
    pub fares: Vec<Fare>,
    pub subfleets: Vec<Subfleet>,
}

// Free functions (generic) for bid operations

/// Find a bid by id
pub async fn find_by_id<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    bid_id: i64,
) -> Result<Option<Bid>, DomainError> {
    let bid = bids_adapter::find_by_id(conn, bid_id).await?;
    Ok(bid.map(Bid::from))
}

/// Find the bid for a (user, flight) pair
pub async fn find_for_pair<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
    flight_id: i64,
) -> Result<Option<Bid>, DomainError> {
    let bid = bids_adapter::find_by_user_and_flight(conn, user_id, flight_id).await?;
    Ok(bid.map(Bid::from))
}

/// Find all bids on a flight, oldest first
pub async fn find_all_by_flight<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    flight_id: i64,
) -> Result<Vec<Bid>, DomainError> {
    let bids = bids_adapter::find_all_by_flight(conn, flight_id).await?;
    Ok(bids.into_iter().map(Bid::from).collect())
}

/// Find all bids held by a user, oldest first
pub async fn find_all_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<Vec<Bid>, DomainError> {
    let bids = bids_adapter::find_all_by_user(conn, user_id).await?;
    Ok(bids.into_iter().map(Bid::from).collect())
}

/// Count how many bids a user holds across all flights
pub async fn count_by_user<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    user_id: i64,
) -> Result<u64, DomainError> {
    let count = bids_adapter::count_by_user(conn, user_id).await?;
    Ok(count)
}

/// Count how many bids a flight carries
pub async fn count_by_flight<C: ConnectionTrait + Send + Sync>(
    conn: &C,
    flight_id: i64,
) -> Result<u64, DomainError> {
    let count = bids_adapter::count_by_flight(conn, flight_id).await?;
    Ok(count)
}

/// Create the bid for a pair, or fetch the existing one (idempotent)
pub async fn create_or_fetch(
    txn: &DatabaseTransaction,
    user_id: i64,
    flight_id: i64,
) -> Result<Bid, DomainError> {
    let dto = bids_adapter::BidCreate { user_id, flight_id };
    let bid = bids_adapter::create_or_fetch(txn, dto).await?;
    Ok(Bid::from(bid))
}

/// Hard-delete every bid row for a pair; returns rows affected
pub async fn delete_for_pair(
    txn: &DatabaseTransaction,
    user_id: i64,
    flight_id: i64,
) -> Result<u64, DomainError> {
    let deleted = bids_adapter::delete_by_user_and_flight(txn, user_id, flight_id).await?;
    Ok(deleted)
}

// Conversions between SeaORM models and domain models

impl From<bids::Model> for Bid {
    fn from(model: bids::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            flight_id: model.flight_id,
            created_at: model.created_at,
        }
    }
}
