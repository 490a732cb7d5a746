//! Time provider.
//!
//! Predictions are compared against "now" in a fixed reference timezone.
//! The clock is a trait so tests can pin the current instant.

use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Reference timezone for the T.
pub const REFERENCE_TZ: Tz = chrono_tz::US::Eastern;

/// Source of the current instant.
pub trait Clock {
    /// The current instant in [`REFERENCE_TZ`].
    fn now(&self) -> DateTime<Tz>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Tz> {
        Utc::now().with_timezone(&REFERENCE_TZ)
    }
}

/// A clock frozen at one instant.
///
/// # Examples
///
/// ```
/// use chrono::DateTime;
/// use next_train::domain::{Clock, FixedClock};
///
/// let instant = DateTime::parse_from_rfc3339("2020-10-21T15:00:00Z").unwrap();
/// let clock = FixedClock::at(instant);
/// assert_eq!(clock.now().to_rfc3339(), "2020-10-21T11:00:00-04:00");
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(DateTime<Tz>);

impl FixedClock {
    /// Freeze the clock at `instant`, converted into the reference timezone.
    pub fn at<Z: TimeZone>(instant: DateTime<Z>) -> Self {
        Self(instant.with_timezone(&REFERENCE_TZ))
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Tz> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_keeps_instant() {
        let instant = DateTime::parse_from_rfc3339("2020-10-21T11:00:00-04:00").unwrap();
        let clock = FixedClock::at(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now().timezone(), REFERENCE_TZ);
    }

    #[test]
    fn system_clock_uses_reference_tz() {
        let now = SystemClock.now();
        assert_eq!(now.timezone(), REFERENCE_TZ);
    }
}
