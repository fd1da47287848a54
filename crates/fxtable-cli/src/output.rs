use std::io::{self, Write};

use fxtable_core::RateRequest;

use crate::cli::OutputFormat;
use crate::error::CliError;

pub fn render(request: &RateRequest, format: OutputFormat, pretty: bool) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match format {
        OutputFormat::Json => {
            let payload = if pretty {
                serde_json::to_string_pretty(request)?
            } else {
                serde_json::to_string(request)?
            };
            writeln!(out, "{payload}")?;
        }
        OutputFormat::Text => {
            writeln!(out, "currency  : {}", request.currency)?;
            writeln!(out, "date_start: {}", request.date_start)?;
            writeln!(out, "date_end  : {}", request.date_end)?;
        }
    }

    Ok(())
}
