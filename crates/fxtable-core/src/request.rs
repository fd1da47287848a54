//! Raw-argument validation producing a [`RateRequest`].
//!
//! The pipeline is a fixed sequence of total checks: arity, currency,
//! per-field date parsing, then range rules against the database coverage
//! window and the daily publication cutoff. The first failing check
//! short-circuits the rest.

use serde::Serialize;
use time::macros::{date, time};
use time::Time;

use crate::domain::{Clock, ClockReading, Currency, DateField, RateDate};
use crate::error::ValidationError;

/// Earliest date the rate table has records for.
pub const DATABASE_START_DATE: RateDate = RateDate::from_date(date!(2002 - 01 - 02));

/// Local time of day at which today's table becomes available.
pub const PUBLICATION_CUTOFF: Time = time!(8:15);

/// Fully validated request for a historical rate-table query.
///
/// Invariants hold by construction: `date_start <= date_end`, both within
/// `DATABASE_START_DATE ..= today`, and neither equal to today before the
/// publication cutoff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RateRequest {
    pub currency: Currency,
    pub date_start: RateDate,
    pub date_end: RateDate,
}

impl RateRequest {
    /// Validate raw argument tokens against a single clock observation.
    ///
    /// Expects exactly `[currency, start_date, end_date]`. Pure in its inputs
    /// plus the one reading taken from `clock`, so identical arguments under
    /// an identical reading always produce the identical result.
    pub fn from_args(args: &[String], clock: &dyn Clock) -> Result<Self, ValidationError> {
        let reading = clock.read();

        let [currency, start, end] = args else {
            return Err(ValidationError::WrongArgumentCount {
                received: args.len(),
            });
        };

        let currency = currency.parse::<Currency>()?;
        let date_start = RateDate::parse(start, DateField::Start)?;
        let date_end = RateDate::parse(end, DateField::End)?;

        validate_range(date_start, date_end, reading)?;

        Ok(Self {
            currency,
            date_start,
            date_end,
        })
    }
}

fn validate_range(
    start: RateDate,
    end: RateDate,
    reading: ClockReading,
) -> Result<(), ValidationError> {
    let ClockReading {
        today,
        time_of_day,
    } = reading;
    let before_cutoff = time_of_day < PUBLICATION_CUTOFF;

    if start < DATABASE_START_DATE {
        return Err(ValidationError::StartBeforeDatabase {
            start,
            min_allowed: DATABASE_START_DATE,
        });
    }

    if start > today {
        return Err(ValidationError::StartInFuture { start, today });
    }

    if start == today && before_cutoff {
        return Err(ValidationError::TableNotYetPublished {
            field: DateField::Start,
            date: today,
            cutoff: PUBLICATION_CUTOFF,
        });
    }

    if end > today {
        return Err(ValidationError::EndInFuture { end, today });
    }

    if end == today && before_cutoff {
        return Err(ValidationError::TableNotYetPublished {
            field: DateField::End,
            date: today,
            cutoff: PUBLICATION_CUTOFF,
        });
    }

    if end < start {
        return Err(ValidationError::EndBeforeStart { start, end });
    }

    Ok(())
}
