//! Raw prediction records.

use chrono::{DateTime, FixedOffset};

/// One vehicle's prediction for a route, stop and direction.
///
/// The arrival time is absent when the provider has no arrival estimate for
/// the vehicle (for example when it is departing from the first stop).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredictionRecord {
    arrival_time: Option<DateTime<FixedOffset>>,
}

impl PredictionRecord {
    /// A record with a predicted arrival.
    pub fn arriving_at(time: DateTime<FixedOffset>) -> Self {
        Self {
            arrival_time: Some(time),
        }
    }

    /// A record with no arrival estimate.
    pub fn absent() -> Self {
        Self { arrival_time: None }
    }

    pub fn arrival_time(&self) -> Option<DateTime<FixedOffset>> {
        self.arrival_time
    }
}
