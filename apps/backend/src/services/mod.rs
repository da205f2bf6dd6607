pub mod bids;
pub mod fares;
pub mod flights;
