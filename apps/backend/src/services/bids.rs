//! Bid lifecycle service.
//!
//! Mediates between the flight store, the bid store and the injected
//! `BidSettings`, enforcing the reservation rules. State machine for a
//! (user, flight) pair: NONE -> ACTIVE (add_bid) -> NONE (remove_bid or
//! remove_bid_for_report).

use std::sync::Arc;

use sea_orm::DatabaseConnection;
use tracing::{debug, info, warn};

use crate::config::settings::BidSettings;
use crate::db::txn::with_txn;
use crate::errors::domain::{ConflictKind, DomainError, InfraErrorKind, NotFoundKind};
use crate::repos::bids::{self, BidWithFlight};
use crate::repos::flights;
use crate::repos::pireps::Report;
use crate::repos::users::User;
use crate::services::fares::{FareReconciler, FareService};
use crate::services::flights::{FlightService, SubfleetFilter};

/// Bid domain service.
pub struct BidService {
    settings: BidSettings,
    fares: Arc<dyn FareService>,
    flights: Arc<dyn FlightService>,
}

impl BidService {
    pub fn new(settings: BidSettings) -> Self {
        Self {
            settings,
            fares: Arc::new(FareReconciler::new()),
            flights: Arc::new(SubfleetFilter::new()),
        }
    }

    /// Construct with explicit collaborators (tests substitute these).
    pub fn with_collaborators(
        settings: BidSettings,
        fares: Arc<dyn FareService>,
        flights: Arc<dyn FlightService>,
    ) -> Self {
        Self {
            settings,
            fares,
            flights,
        }
    }

    /// Fetch a single bid with its flight, reconciled fares and subfleets
    /// attached. No side effects.
    pub async fn get_bid(
        &self,
        db: &DatabaseConnection,
        bid_id: i64,
    ) -> Result<Option<BidWithFlight>, DomainError> {
        let Some(bid) = bids::find_by_id(db, bid_id).await? else {
            return Ok(None);
        };

        let flight = flights::find_by_id(db, bid.flight_id).await?.ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("bid {} references missing flight {}", bid.id, bid.flight_id),
            )
        })?;

        let fares = self
            .fares
            .get_reconciled_fares_for_flight(db, flight.id)
            .await?;
        let subfleets = flights::subfleets(db, flight.id).await?;

        Ok(Some(BidWithFlight {
            bid,
            flight,
            fares,
            subfleets,
        }))
    }

    /// All bids held by the user, each flight view post-processed through
    /// the subfleet filter and fare reconciliation. In-memory only.
    pub async fn find_bids_for_user(
        &self,
        db: &DatabaseConnection,
        user: &User,
    ) -> Result<Vec<BidWithFlight>, DomainError> {
        let user_bids = bids::find_all_by_user(db, user.id).await?;

        let mut out = Vec::with_capacity(user_bids.len());
        for bid in user_bids {
            let Some(flight) = flights::find_by_id(db, bid.flight_id).await? else {
                warn!(bid_id = bid.id, flight_id = bid.flight_id, "bid references missing flight, skipping");
                continue;
            };

            let subfleets = flights::subfleets(db, flight.id).await?;
            let subfleets = self.flights.filter_subfleets(user, subfleets);
            let fares = self
                .fares
                .get_reconciled_fares_for_flight(db, flight.id)
                .await?;

            out.push(BidWithFlight {
                bid,
                flight,
                fares,
                subfleets,
            });
        }

        Ok(out)
    }

    /// Reserve a flight for a user.
    ///
    /// Fails with `Conflict(UserBidLimit)` when the user already holds a bid
    /// and the multiple-bids policy disallows more, and with
    /// `Conflict(BidExistsForFlight)` when someone else's bid blocks the
    /// flight. Re-bidding an already-held flight is idempotent: the existing
    /// bid is returned, no new row is created.
    pub async fn add_bid(
        &self,
        db: &DatabaseConnection,
        flight_id: i64,
        user_id: i64,
    ) -> Result<BidWithFlight, DomainError> {
        let settings = self.settings;

        let bid_id = with_txn(db, |txn| {
            Box::pin(async move {
                let flight = flights::find_by_id(txn, flight_id).await?.ok_or_else(|| {
                    DomainError::not_found(
                        NotFoundKind::Flight,
                        format!("flight {flight_id} not found"),
                    )
                })?;

                // A user may only hold one bid at a time unless the
                // multiple-bids policy says otherwise.
                let held = bids::count_by_user(txn, user_id).await?;
                if held > 0 && !settings.allow_multiple_bids {
                    return Err(DomainError::conflict(
                        ConflictKind::UserBidLimit,
                        format!("user {user_id} already holds a bid"),
                    ));
                }

                let flight_bids = bids::find_all_by_flight(txn, flight_id).await?;
                if !flight_bids.is_empty() {
                    if !flight.has_bid {
                        // Self-heal the stale flag.
                        warn!(flight_id, "flight has bids but has_bid was false, repairing");
                        flights::set_has_bid(txn, flight_id, true).await?;
                    }

                    if let Some(own) = flight_bids.iter().find(|b| b.user_id == user_id) {
                        info!(bid_id = own.id, user_id, flight_id, "bid already exists, returning it");
                        return Ok(own.id);
                    }

                    if settings.disable_flight_on_bid {
                        return Err(DomainError::conflict(
                            ConflictKind::BidExistsForFlight,
                            format!("flight {flight_id} is blocked by an existing bid"),
                        ));
                    }

                    // With multi-bid off, a flight bid by someone else is taken.
                    if !settings.allow_multiple_bids {
                        return Err(DomainError::conflict(
                            ConflictKind::BidExistsForFlight,
                            format!("flight {flight_id} already has a bid"),
                        ));
                    }
                } else if flight.has_bid {
                    // Stale flag in the other direction; corrected below.
                    info!(flight_id, "has_bid set with no bids on record");
                }

                let bid = bids::create_or_fetch(txn, user_id, flight_id).await?;
                flights::set_has_bid(txn, flight_id, true).await?;
                Ok(bid.id)
            })
        })
        .await?;

        self.get_bid(db, bid_id).await?.ok_or_else(|| {
            DomainError::infra(
                InfraErrorKind::DataCorruption,
                format!("bid {bid_id} vanished after create"),
            )
        })
    }

    /// Release a user's bid on a flight. Deletes every matching row and
    /// recomputes the flight's has_bid flag. No-op, not an error, when no
    /// bid existed.
    pub async fn remove_bid(
        &self,
        db: &DatabaseConnection,
        flight_id: i64,
        user_id: i64,
    ) -> Result<(), DomainError> {
        with_txn(db, |txn| {
            Box::pin(async move {
                let deleted = bids::delete_for_pair(txn, user_id, flight_id).await?;
                if deleted == 0 {
                    debug!(user_id, flight_id, "no bid to remove");
                } else {
                    info!(user_id, flight_id, deleted, "bid removed");
                }

                let remaining = bids::count_by_flight(txn, flight_id).await?;
                flights::set_has_bid(txn, flight_id, remaining > 0).await?;
                Ok(())
            })
        })
        .await
    }

    /// Release the bid matching an accepted flight report.
    ///
    /// No-op unless the remove-on-accept policy is enabled, and when the
    /// report carries no flight. Recomputes has_bid like `remove_bid` does.
    pub async fn remove_bid_for_report(
        &self,
        db: &DatabaseConnection,
        report: &Report,
    ) -> Result<(), DomainError> {
        if !self.settings.remove_bid_on_accept {
            return Ok(());
        }

        let Some(flight_id) = report.flight_id else {
            debug!(pirep_id = report.id, "report has no flight, skipping bid cleanup");
            return Ok(());
        };

        let user_id = report.user_id;
        let pirep_id = report.id;

        with_txn(db, |txn| {
            Box::pin(async move {
                let deleted = bids::delete_for_pair(txn, user_id, flight_id).await?;
                if deleted > 0 {
                    info!(pirep_id, user_id, flight_id, "bid released on report acceptance");
                }

                let remaining = bids::count_by_flight(txn, flight_id).await?;
                flights::set_has_bid(txn, flight_id, remaining > 0).await?;
                Ok(())
            })
        })
        .await
    }
}
