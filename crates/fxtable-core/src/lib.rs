//! Core contracts for fxtable.
//!
//! This crate contains:
//! - Domain vocabulary: supported currencies, strict calendar dates, clocks
//! - The request validation pipeline producing [`RateRequest`]
//! - Structured validation errors
//!
//! Validation is synchronous and free of side effects apart from a single
//! clock observation per call; the resulting [`RateRequest`] is the immutable
//! hand-off to whatever fetches or reports rates.

pub mod domain;
pub mod error;
pub mod request;

pub use domain::{Clock, ClockReading, Currency, DateField, FixedClock, RateDate, SystemClock};
pub use error::ValidationError;
pub use request::{RateRequest, DATABASE_START_DATE, PUBLICATION_CUTOFF};
