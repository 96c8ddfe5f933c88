//! Fake profile API, to be replaced when the real backend lands.
//!
//! Simulates the remote fetch with a fixed delay and no failure path. The
//! canned record mirrors what the production endpoint will return; `None`
//! stands in for a first-time user with no profile yet.

use std::thread;
use std::time::Duration;

use log::debug;
use shared::{ProfileRecord, Relation};

/// Stand-in for the remote profile endpoint.
#[derive(Debug, Clone)]
pub struct MockProfileApi {
    delay: Duration,
    first_time_user: bool,
}

impl MockProfileApi {
    /// Production-shaped mock: one-second latency, existing profile.
    pub fn new() -> Self {
        Self {
            delay: Duration::from_secs(1),
            first_time_user: false,
        }
    }

    /// Skip the artificial latency (tests, smoke binary).
    pub fn without_delay() -> Self {
        Self {
            delay: Duration::ZERO,
            first_time_user: false,
        }
    }

    /// Simulate a first-time user: the fetch returns no record.
    pub fn first_time_user(mut self) -> Self {
        self.first_time_user = true;
        self
    }

    /// Fetch the account profile. Blocks for the simulated latency; there is
    /// no retry, cancellation, or failure path.
    pub fn fetch_profile(&self) -> Option<ProfileRecord> {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        debug!("Mock profile fetch (first_time_user={})", self.first_time_user);

        if self.first_time_user {
            return None;
        }

        Some(ProfileRecord {
            name: "Riya Sharma".to_string(),
            email: "riyasharma@gmail.com".to_string(),
            mobile: "99999 88888".to_string(),
            relation: Relation::Mom,
        })
    }
}

impl Default for MockProfileApi {
    fn default() -> Self {
        Self::new()
    }
}

/// Display-format a bare 10-digit mobile number ("9999988888" ->
/// "99999 88888"). Anything else passes through unchanged.
pub fn format_mobile_display(mobile: &str) -> String {
    if mobile.len() == 10 && mobile.chars().all(|c| c.is_ascii_digit()) {
        format!("{} {}", &mobile[..5], &mobile[5..])
    } else {
        mobile.to_string()
    }
}
