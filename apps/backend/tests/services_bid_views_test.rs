mod common;

use std::sync::Arc;

use async_trait::async_trait;
use backend::repos::users;
use backend::{
    BidService, BidSettings, DomainError, Fare, FareService, SubfleetFilter,
};
use backend_test_support::db::sqlite_mem;
use sea_orm::DatabaseConnection;

use common::{
    create_fare, create_flight, create_subfleet, create_user, link_fare, link_subfleet,
};

async fn load_user(db: &DatabaseConnection, user_id: i64) -> users::User {
    users::find_by_id(db, user_id)
        .await
        .expect("load user")
        .expect("user exists")
}

#[tokio::test]
async fn get_bid_returns_none_for_unknown_id() -> Result<(), DomainError> {
    let db = sqlite_mem().await.expect("build test db");
    let service = BidService::new(BidSettings::default());

    assert!(service.get_bid(&db, 42).await?.is_none());
    Ok(())
}

#[tokio::test]
async fn get_bid_attaches_flight_fares_and_subfleets() -> Result<(), DomainError> {
    let db = sqlite_mem().await.expect("build test db");
    let user_id = create_user(&db, "ada", 1).await;
    let flight_id = create_flight(&db, 1, "VA301").await;

    // One fare with a pivot price override, one untouched.
    let economy = create_fare(&db, "Y", 100.0, 40.0, 120).await;
    let business = create_fare(&db, "J", 400.0, 150.0, 16).await;
    link_fare(&db, flight_id, economy, Some(89.5), None, Some(100)).await;
    link_fare(&db, flight_id, business, None, None, None).await;

    let own = create_subfleet(&db, 1, "B737 fleet", "B738").await;
    let foreign = create_subfleet(&db, 2, "A320 fleet", "A320").await;
    link_subfleet(&db, flight_id, own).await;
    link_subfleet(&db, flight_id, foreign).await;

    let service = BidService::new(BidSettings::default());
    let placed = service.add_bid(&db, flight_id, user_id).await?;
    let loaded = service
        .get_bid(&db, placed.bid.id)
        .await?
        .expect("bid loads");

    assert_eq!(loaded.bid.id, placed.bid.id);
    assert_eq!(loaded.flight.flight_number, "VA301");

    let reconciled: Vec<(&str, f64, i32)> = loaded
        .fares
        .iter()
        .map(|f| (f.code.as_str(), f.price, f.capacity))
        .collect();
    assert_eq!(reconciled, vec![("Y", 89.5, 100), ("J", 400.0, 16)]);

    // get_bid carries the unfiltered flight view; per-user filtering only
    // happens in find_bids_for_user.
    assert_eq!(loaded.subfleets.len(), 2);
    Ok(())
}

#[tokio::test]
async fn find_bids_for_user_filters_subfleets_to_own_airline() -> Result<(), DomainError> {
    let db = sqlite_mem().await.expect("build test db");
    let user_id = create_user(&db, "bram", 1).await;
    let flight_id = create_flight(&db, 1, "VA302").await;

    let own = create_subfleet(&db, 1, "E190 fleet", "E190").await;
    let foreign = create_subfleet(&db, 2, "CRJ fleet", "CRJ9").await;
    link_subfleet(&db, flight_id, own).await;
    link_subfleet(&db, flight_id, foreign).await;

    let service = BidService::new(BidSettings::default());
    service.add_bid(&db, flight_id, user_id).await?;

    let user = load_user(&db, user_id).await;
    let bids = service.find_bids_for_user(&db, &user).await?;

    assert_eq!(bids.len(), 1);
    let subfleet_ids: Vec<i64> = bids[0].subfleets.iter().map(|sf| sf.id).collect();
    assert_eq!(subfleet_ids, vec![own]);
    Ok(())
}

#[tokio::test]
async fn find_bids_for_user_lists_all_bids_oldest_first() -> Result<(), DomainError> {
    let db = sqlite_mem().await.expect("build test db");
    let user_id = create_user(&db, "cleo", 1).await;
    let first = create_flight(&db, 1, "VA303").await;
    let second = create_flight(&db, 1, "VA304").await;

    let service = BidService::new(BidSettings {
        allow_multiple_bids: true,
        ..BidSettings::default()
    });
    service.add_bid(&db, first, user_id).await?;
    service.add_bid(&db, second, user_id).await?;

    let user = load_user(&db, user_id).await;
    let bids = service.find_bids_for_user(&db, &user).await?;

    let flight_ids: Vec<i64> = bids.iter().map(|b| b.flight.id).collect();
    assert_eq!(flight_ids, vec![first, second]);
    Ok(())
}

#[tokio::test]
async fn find_bids_for_user_is_empty_without_bids() -> Result<(), DomainError> {
    let db = sqlite_mem().await.expect("build test db");
    let user_id = create_user(&db, "drew", 1).await;
    create_flight(&db, 1, "VA305").await;

    let service = BidService::new(BidSettings::default());
    let user = load_user(&db, user_id).await;

    assert!(service.find_bids_for_user(&db, &user).await?.is_empty());
    Ok(())
}

/// Fare collaborator stub that reports nothing, proving the seam is honored.
struct NoFares;

#[async_trait]
impl FareService for NoFares {
    async fn get_reconciled_fares_for_flight(
        &self,
        _conn: &DatabaseConnection,
        _flight_id: i64,
    ) -> Result<Vec<Fare>, DomainError> {
        Ok(Vec::new())
    }
}

#[tokio::test]
async fn injected_fare_collaborator_replaces_reconciliation() -> Result<(), DomainError> {
    let db = sqlite_mem().await.expect("build test db");
    let user_id = create_user(&db, "elsa", 1).await;
    let flight_id = create_flight(&db, 1, "VA306").await;
    let fare = create_fare(&db, "Y", 100.0, 40.0, 120).await;
    link_fare(&db, flight_id, fare, None, None, None).await;

    let service = BidService::with_collaborators(
        BidSettings::default(),
        Arc::new(NoFares),
        Arc::new(SubfleetFilter::new()),
    );
    let placed = service.add_bid(&db, flight_id, user_id).await?;

    assert!(placed.fares.is_empty());
    Ok(())
}
