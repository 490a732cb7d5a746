//! Nearest-arrival selection.

use std::fmt;

use chrono::{DateTime, Duration, TimeZone, Utc};

use super::record::PredictionRecord;

/// Why no arrival could be reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Unavailable {
    /// A record had no arrival time. One missing estimate makes the whole
    /// board untrustworthy, so selection stops there.
    MissingArrivalTime,
    /// Every predicted arrival is already in the past.
    AllDeparted,
    /// The provider returned no predictions at all.
    NoPredictions,
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::MissingArrivalTime => f.write_str("a prediction has no arrival time"),
            Unavailable::AllDeparted => f.write_str("all predicted arrivals have passed"),
            Unavailable::NoPredictions => f.write_str("no predictions"),
        }
    }
}

/// Outcome of a prediction lookup.
///
/// Unavailability is an ordinary outcome, not an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prediction {
    /// The nearest upcoming arrival is `wait` from now. Never negative.
    Arriving { wait: Duration },
    Unavailable(Unavailable),
}

impl Prediction {
    /// Time until the arrival, if there is one.
    pub fn wait(&self) -> Option<Duration> {
        match self {
            Prediction::Arriving { wait } => Some(*wait),
            Prediction::Unavailable(_) => None,
        }
    }

    /// Whole minutes until the arrival, truncating any partial minute.
    pub fn minutes(&self) -> Option<i64> {
        self.wait().map(|wait| wait.num_minutes())
    }
}

/// Select the nearest arrival that has not yet happened.
///
/// Records are scanned in the order given. Both the arrival times and `now`
/// are normalised to UTC before subtracting, so records may carry any
/// offset. An arrival exactly at `now` counts as upcoming. On equal waits the
/// earlier record wins.
///
/// Returns [`Unavailable::MissingArrivalTime`] as soon as a record without an
/// arrival time is seen, even if a usable record follows it.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use next_train::predict::{PredictionRecord, select_nearest_arrival};
///
/// let now = DateTime::parse_from_rfc3339("2020-10-21T11:00:00-04:00").unwrap();
/// let records = [
///     PredictionRecord::arriving_at(DateTime::parse_from_rfc3339("2020-10-21T10:50:00-04:00").unwrap()),
///     PredictionRecord::arriving_at(DateTime::parse_from_rfc3339("2020-10-21T11:05:00-04:00").unwrap()),
/// ];
///
/// assert_eq!(select_nearest_arrival(&records, &now).minutes(), Some(5));
/// ```
pub fn select_nearest_arrival<Z: TimeZone>(
    records: &[PredictionRecord],
    now: &DateTime<Z>,
) -> Prediction {
    let now = now.with_timezone(&Utc);
    let mut best: Option<Duration> = None;

    for record in records {
        let Some(arrival) = record.arrival_time() else {
            return Prediction::Unavailable(Unavailable::MissingArrivalTime);
        };

        let delta = arrival.with_timezone(&Utc) - now;
        if delta >= Duration::zero() && best.is_none_or(|b| delta < b) {
            best = Some(delta);
        }
    }

    match best {
        Some(wait) => Prediction::Arriving { wait },
        None if records.is_empty() => Prediction::Unavailable(Unavailable::NoPredictions),
        None => Prediction::Unavailable(Unavailable::AllDeparted),
    }
}
