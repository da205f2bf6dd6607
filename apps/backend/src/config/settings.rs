//! Bid policy switches.
//!
//! Passed explicitly into `BidService` rather than read from an ambient
//! settings lookup, so tests can pin a policy per call site.

use std::env;

/// Policy switches governing the bid lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BidSettings {
    /// May a user hold bids on more than one flight at a time.
    pub allow_multiple_bids: bool,
    /// Once any bid exists for a flight, block other users from bidding it.
    pub disable_flight_on_bid: bool,
    /// Release the bid automatically when the matching flight report is accepted.
    pub remove_bid_on_accept: bool,
}

impl Default for BidSettings {
    fn default() -> Self {
        Self {
            allow_multiple_bids: false,
            disable_flight_on_bid: false,
            remove_bid_on_accept: false,
        }
    }
}

impl BidSettings {
    /// Load settings from the environment, falling back to defaults.
    ///
    /// Recognized variables: `BIDS_ALLOW_MULTIPLE_BIDS`,
    /// `BIDS_DISABLE_FLIGHT_ON_BID`, `PIREPS_REMOVE_BID_ON_ACCEPT`.
    pub fn from_env() -> Self {
        Self {
            allow_multiple_bids: env_flag("BIDS_ALLOW_MULTIPLE_BIDS", false),
            disable_flight_on_bid: env_flag("BIDS_DISABLE_FLIGHT_ON_BID", false),
            remove_bid_on_accept: env_flag("PIREPS_REMOVE_BID_ON_ACCEPT", false),
        }
    }
}

fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(v) => matches!(v.to_lowercase().as_str(), "1" | "true" | "yes" | "on"),
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_restrictive() {
        let settings = BidSettings::default();
        assert!(!settings.allow_multiple_bids);
        assert!(!settings.disable_flight_on_bid);
        assert!(!settings.remove_bid_on_accept);
    }

    #[test]
    fn env_flag_parses_common_truthy_values() {
        env::set_var("BIDS_TEST_FLAG", "yes");
        assert!(env_flag("BIDS_TEST_FLAG", false));
        env::set_var("BIDS_TEST_FLAG", "0");
        assert!(!env_flag("BIDS_TEST_FLAG", true));
        env::remove_var("BIDS_TEST_FLAG");
    }
}
