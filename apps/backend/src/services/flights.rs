//! Flight view filtering.

use crate::repos::flights::Subfleet;
use crate::repos::users::User;

/// Collaborator that restricts a flight's subfleet list to what the user
/// may fly. Operates on the in-memory view only; no persistence write.
pub trait FlightService: Send + Sync {
    fn filter_subfleets(&self, user: &User, subfleets: Vec<Subfleet>) -> Vec<Subfleet>;
}

/// Default rule: a user may only fly subfleets owned by their own airline.
#[derive(Debug, Default)]
pub struct SubfleetFilter;

impl SubfleetFilter {
    pub fn new() -> Self {
        Self
    }
}

impl FlightService for SubfleetFilter {
    fn filter_subfleets(&self, user: &User, subfleets: Vec<Subfleet>) -> Vec<Subfleet> {
        subfleets
            .into_iter()
            .filter(|sf| sf.airline_id == user.airline_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(airline_id: i64) -> User {
        User {
            id: 1,
            name: "Amelia".into(),
            email: "amelia@example.com".into(),
            airline_id,
        }
    }

    fn subfleet(id: i64, airline_id: i64) -> Subfleet {
        Subfleet {
            id,
            airline_id,
            name: format!("SF{id}"),
            type_code: "B738".into(),
        }
    }

    #[test]
    fn keeps_only_own_airline_subfleets() {
        let filter = SubfleetFilter::new();
        let filtered = filter.filter_subfleets(
            &user(10),
            vec![subfleet(1, 10), subfleet(2, 20), subfleet(3, 10)],
        );
        let ids: Vec<i64> = filtered.iter().map(|sf| sf.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn empty_list_stays_empty() {
        let filter = SubfleetFilter::new();
        assert!(filter.filter_subfleets(&user(10), Vec::new()).is_empty());
    }
}
