//! Race-level error definitions.
//!
//! Per-endpoint failures never appear here; they are absorbed by the checker
//! and only show up as an endpoint missing from the results.

use std::time::Duration;
use thiserror::Error;

/// Outcomes that end a race without the requested success condition.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The race deadline elapsed before the success condition was met.
    #[error("probe timeout: deadline exceeded after {after:?}")]
    Timeout { after: Duration },

    /// The caller's cancellation token fired before the race was decided.
    #[error("probe cancelled by caller")]
    Cancelled,

    /// Every endpoint finished, but some of them did not answer successfully.
    #[error("{failed} of {total} endpoints did not respond successfully")]
    Unreachable { failed: usize, total: usize },

    /// A race needs at least one endpoint.
    #[error("no endpoints to probe")]
    NoEndpoints,

    /// The default request client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}

impl ProbeError {
    /// True when the race ran out of time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ProbeError::Timeout { .. })
    }

    /// True when the caller cancelled the race.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ProbeError::Cancelled)
    }
}
