//! Default request client construction.

use reqwest::Client;
use std::time::Duration;

use crate::config::ProbeSettings;
use crate::error::ProbeError;

/// Per-request deadline for a race bounded by `timeout`.
///
/// The client gives up `margin` before the race does so the race's own
/// deadline decides the outcome. A timeout no longer than the margin is used
/// as is.
pub fn request_deadline(timeout: Duration, margin: Duration) -> Duration {
    match timeout.checked_sub(margin) {
        Some(d) if !d.is_zero() => d,
        _ => timeout,
    }
}

/// Build the client used when the caller supplies none.
pub fn default_client(timeout: Duration, settings: &ProbeSettings) -> Result<Client, ProbeError> {
    let deadline = request_deadline(timeout, settings.safety_margin());

    let client = Client::builder()
        .timeout(deadline)
        .user_agent(settings.user_agent.as_str())
        .build()?;

    tracing::trace!(deadline_ms = deadline.as_millis() as u64, "Built default probe client");
    Ok(client)
}
