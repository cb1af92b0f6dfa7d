//! Probe results and survey reports.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::time::Duration;

use crate::error::ProbeError;
use crate::probe::Endpoint;

/// A successful check: the endpoint and the time to its response headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub endpoint: Endpoint,
    pub elapsed: Duration,
}

impl Serialize for ProbeResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("ProbeResult", 2)?;
        state.serialize_field("url", &self.endpoint)?;
        state.serialize_field("elapsed_ms", &(self.elapsed.as_micros() as f64 / 1000.0))?;
        state.end()
    }
}

/// Outcome of an exhaustive race.
///
/// `probes` is in arrival order. `error` is set when the race did not collect
/// a success from every endpoint; the partial probes are kept either way.
#[derive(Debug)]
pub struct Survey {
    pub probes: Vec<ProbeResult>,
    pub error: Option<ProbeError>,
}

impl Survey {
    /// True when every endpoint answered successfully.
    pub fn is_complete(&self) -> bool {
        self.error.is_none()
    }

    /// Endpoints in arrival order.
    pub fn endpoints(&self) -> impl Iterator<Item = &Endpoint> {
        self.probes.iter().map(|p| &p.endpoint)
    }

    /// Drop the partial probes when the survey is incomplete.
    pub fn into_result(self) -> Result<Vec<ProbeResult>, ProbeError> {
        match self.error {
            Some(e) => Err(e),
            None => Ok(self.probes),
        }
    }
}
