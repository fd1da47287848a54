use time::{OffsetDateTime, Time};

use crate::domain::RateDate;

/// Single observation of the host clock.
///
/// Validation takes one reading per call so a check sequence can never see
/// the wall clock cross the publication cutoff mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub today: RateDate,
    pub time_of_day: Time,
}

/// Source of the current date and time of day.
pub trait Clock {
    fn read(&self) -> ClockReading;
}

/// Host wall clock in the local offset, falling back to UTC when the local
/// offset cannot be determined.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn read(&self) -> ClockReading {
        let now = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        ClockReading {
            today: RateDate::from_date(now.date()),
            time_of_day: now.time(),
        }
    }
}

/// Clock pinned to one reading, for deterministic validation in tests and
/// replay tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(ClockReading);

impl FixedClock {
    pub const fn new(today: RateDate, time_of_day: Time) -> Self {
        Self(ClockReading {
            today,
            time_of_day,
        })
    }
}

impl Clock for FixedClock {
    fn read(&self) -> ClockReading {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::{date, time};

    #[test]
    fn fixed_clock_returns_injected_reading() {
        let clock = FixedClock::new(RateDate::from_date(date!(2024 - 06 - 14)), time!(10:30));
        let reading = clock.read();
        assert_eq!(reading.today.format_ymd(), "2024-06-14");
        assert_eq!(reading.time_of_day, time!(10:30));
    }

    #[test]
    fn system_clock_produces_a_reading() {
        let reading = SystemClock.read();
        assert!(reading.today.into_inner().year() >= 2002);
    }
}
