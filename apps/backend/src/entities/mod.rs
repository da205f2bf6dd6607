pub mod bids;
pub mod fares;
pub mod flight_fares;
pub mod flight_subfleet;
pub mod flights;
pub mod pireps;
pub mod subfleets;
pub mod users;
