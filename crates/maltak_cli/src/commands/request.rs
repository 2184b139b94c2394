//! Single-request commands.

use super::CliError;
use maltak_api::{ApiRequest, ApiServer};
use tracing::debug;

/// Runs one request and prints the response body to stdout.
///
/// A non-success status is still printed, then reported as an error so
/// the process exits non-zero.
pub fn run(server: &ApiServer, request: ApiRequest, pretty: bool) -> Result<(), CliError> {
    let response = server.handle(request);
    debug!(status = response.status, "response");

    let output = if pretty {
        serde_json::to_string_pretty(&response.body)?
    } else {
        serde_json::to_string(&response.body)?
    };
    println!("{output}");

    if response.is_success() {
        Ok(())
    } else {
        Err(CliError::Request {
            status: response.status,
            message: response.message().unwrap_or_default().to_string(),
        })
    }
}
