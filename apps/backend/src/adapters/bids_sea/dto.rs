//! DTOs for bids_sea adapter.

/// DTO for creating (or fetching) a bid keyed by (user, flight).
#[derive(Debug, Clone)]
pub struct BidCreate {
    pub user_id: i64,
    pub flight_id: i64,
}
