//! Batch command implementation.
//!
//! Reads one JSON request per line and writes one JSON response per line,
//! all against the same store, so later requests see earlier writes.

use super::CliError;
use maltak_api::ApiServer;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::info;

/// Totals for one batch run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Requests handled.
    pub requests: usize,
    /// Requests answered with a 4xx or 5xx status.
    pub failures: usize,
}

/// Runs the batch command.
///
/// Blank lines are skipped. A failed request does not stop the batch.
pub fn run<R, W>(server: &ApiServer, input: R, mut output: W) -> Result<BatchSummary, CliError>
where
    R: BufRead,
    W: Write,
{
    let mut summary = BatchSummary::default();

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let response = server.handle_json(&line);
        summary.requests += 1;
        if !response.is_success() {
            summary.failures += 1;
        }
        serde_json::to_writer(&mut output, &response)?;
        writeln!(output)?;
    }
    output.flush()?;

    info!(
        requests = summary.requests,
        failures = summary.failures,
        "batch complete"
    );
    Ok(summary)
}
