pub mod bids_sea;
pub mod flights_sea;
pub mod pireps_sea;
pub mod users_sea;
