#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod adapters;
pub mod config;
pub mod db;
pub mod entities;
pub mod errors;
pub mod infra;
pub mod repos;
pub mod services;

// Re-exports for public API
pub use config::db::{db_url, DbProfile};
pub use config::settings::BidSettings;
pub use errors::domain::{ConflictKind, DomainError, NotFoundKind};
pub use infra::db::connect_db;
pub use repos::bids::{Bid, BidWithFlight};
pub use repos::flights::{Fare, Flight, Subfleet};
pub use repos::pireps::Report;
pub use repos::users::User;
pub use services::bids::BidService;
pub use services::fares::{FareReconciler, FareService};
pub use services::flights::{FlightService, SubfleetFilter};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    backend_test_support::logging::init();
}
