// Test library for request validation behavior tests
pub use fxtable_core::{
    Clock, ClockReading, Currency, DateField, FixedClock, RateDate, RateRequest, SystemClock,
    ValidationError, DATABASE_START_DATE, PUBLICATION_CUTOFF,
};
