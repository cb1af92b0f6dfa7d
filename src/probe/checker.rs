//! Endpoint checker.
//!
//! # Responsibilities
//! - Issue one `HEAD` request against a single endpoint
//! - Abandon the request as soon as the race is cancelled
//! - Classify the response and time it

use reqwest::{Client, StatusCode};
use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use crate::probe::{Endpoint, ProbeResult};

/// Why a check did not produce a result.
///
/// Never leaves the checker task; the coordinator only sees successes.
#[derive(Debug, thiserror::Error)]
pub enum CheckFailure {
    #[error("non-success status {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("race cancelled")]
    Cancelled,
}

/// Statuses 200 through 399 count as a healthy endpoint.
pub fn is_ok_like(status: StatusCode) -> bool {
    (200..400).contains(&status.as_u16())
}

/// Probe one endpoint.
///
/// Elapsed time runs from request start to the response headers. Once a
/// response is in hand it is classified even if `cancel` fires meanwhile.
pub async fn check(
    endpoint: &Endpoint,
    client: &Client,
    cancel: &CancellationToken,
) -> Result<ProbeResult, CheckFailure> {
    let start = Instant::now();

    let response = tokio::select! {
        biased;
        _ = cancel.cancelled() => return Err(CheckFailure::Cancelled),
        res = client.head(endpoint.as_str()).send() => res?,
    };

    let elapsed = start.elapsed();
    let status = response.status();
    // Body is never read; dropping the response releases the connection.
    drop(response);

    if !is_ok_like(status) {
        return Err(CheckFailure::Status(status));
    }

    Ok(ProbeResult {
        endpoint: endpoint.clone(),
        elapsed,
    })
}
