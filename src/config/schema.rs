//! Configuration schema definitions.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Root configuration for the prober.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProbeConfig {
    /// Race settings.
    pub probe: ProbeSettings,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Settings applied to every race.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ProbeSettings {
    /// Total race timeout in milliseconds.
    pub timeout_ms: u64,

    /// How much earlier than the race the default client gives up, in milliseconds.
    pub safety_margin_ms: u64,

    /// User-Agent sent by the default client.
    pub user_agent: String,
}

impl ProbeSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    pub fn safety_margin(&self) -> Duration {
        Duration::from_millis(self.safety_margin_ms)
    }
}

impl Default for ProbeSettings {
    fn default() -> Self {
        Self {
            timeout_ms: 30_000,
            safety_margin_ms: 100,
            user_agent: concat!("http-probe/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}
