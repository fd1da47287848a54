//! CLI argument definitions for fxtable.
//!
//! The request tokens are collected free-form rather than as fixed clap
//! positionals so the core validator stays the single source of truth for
//! arity and its usage message.
//!
//! # Examples
//!
//! ```bash
//! # Validate a request for euro rates over a historical range
//! fxtable EUR 2013-01-28 2013-01-31
//!
//! # Emit the validated request as JSON for downstream tooling
//! fxtable chf 2013-01-28 2013-01-31 --format json --pretty
//! ```

use clap::{Parser, ValueEnum};

/// Validate a historical FX-rate table request.
///
/// Checks a currency code and a start/end date range against the rate
/// table's coverage window and daily publication cutoff, then emits the
/// normalized request.
#[derive(Debug, Parser)]
#[command(name = "fxtable", version, about = "Validate a historical FX-rate table request")]
pub struct Cli {
    /// Request tokens: CURRENCY START_DATE END_DATE.
    ///
    /// CURRENCY is matched case-insensitively against EUR, USD, GBP, CHF;
    /// both dates must be calendar dates in YYYY-MM-DD form.
    #[arg(value_name = "TOKEN", num_args = 0..)]
    pub tokens: Vec<String>,

    /// Output format for the validated request.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Pretty-print JSON output with indentation.
    #[arg(long, default_value_t = false)]
    pub pretty: bool,
}

/// Output format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Aligned key/value lines for terminal display.
    Text,
    /// Single JSON object output.
    Json,
}
