use thiserror::Error;
use time::{Duration, Time};

use crate::domain::{DateField, RateDate};

/// Validation errors exposed by `fxtable-core`.
///
/// Every variant is terminal for the call that produced it and deterministic
/// given the same arguments and clock reading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "expected exactly 3 arguments (CURRENCY START_DATE END_DATE), received {received}; \
         supported currencies: EUR, USD, GBP, CHF; example: EUR 2013-01-28 2013-01-31"
    )]
    WrongArgumentCount { received: usize },

    #[error("currency '{value}' is not supported, expected one of EUR, USD, GBP, CHF")]
    UnsupportedCurrency { value: String },

    #[error("invalid {field} date '{value}', expected a calendar date as YYYY-MM-DD")]
    InvalidDate { field: DateField, value: String },

    #[error("start date {start} precedes the first database record on {min_allowed}")]
    StartBeforeDatabase {
        start: RateDate,
        min_allowed: RateDate,
    },

    #[error("start date {start} is later than today ({today})")]
    StartInFuture { start: RateDate, today: RateDate },

    #[error("end date {end} is later than today ({today})")]
    EndInFuture { end: RateDate, today: RateDate },

    #[error(
        "the {field} date {date} is today, but today's rate table is published between {} and {}; \
         run again after {}",
        window_open(.cutoff),
        fmt_time(.cutoff),
        fmt_time(.cutoff)
    )]
    TableNotYetPublished {
        field: DateField,
        date: RateDate,
        cutoff: Time,
    },

    #[error("end date {end} precedes start date {start}")]
    EndBeforeStart { start: RateDate, end: RateDate },
}

fn fmt_time(time: &Time) -> String {
    format!("{:02}:{:02}", time.hour(), time.minute())
}

// The table appears during the half hour ending at the cutoff.
fn window_open(cutoff: &Time) -> String {
    fmt_time(&(*cutoff - Duration::minutes(30)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::time;

    fn date(value: &str, field: DateField) -> RateDate {
        RateDate::parse(value, field).expect("must parse")
    }

    #[test]
    fn arity_message_names_supported_set_and_usage() {
        let message = ValidationError::WrongArgumentCount { received: 5 }.to_string();
        assert!(message.contains("received 5"));
        assert!(message.contains("EUR, USD, GBP, CHF"));
        assert!(message.contains("EUR 2013-01-28 2013-01-31"));
    }

    #[test]
    fn publication_message_names_the_half_hour_window() {
        let err = ValidationError::TableNotYetPublished {
            field: DateField::Start,
            date: date("2024-06-14", DateField::Start),
            cutoff: time!(8:15),
        };
        let message = err.to_string();
        assert!(message.contains("between 07:45 and 08:15"));
        assert!(message.contains("after 08:15"));
    }

    #[test]
    fn range_messages_carry_both_dates() {
        let err = ValidationError::EndBeforeStart {
            start: date("2013-02-01", DateField::Start),
            end: date("2013-01-31", DateField::End),
        };
        assert_eq!(
            err.to_string(),
            "end date 2013-01-31 precedes start date 2013-02-01"
        );
    }
}
