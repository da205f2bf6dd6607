pub mod bids;
pub mod flights;
pub mod pireps;
pub mod users;
