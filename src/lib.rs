//! Concurrent HTTP endpoint prober.
//!
//! Races lightweight `HEAD` checks against a set of mirror or replica URLs and
//! reports the fastest healthy one, or every healthy one within a time budget.

pub mod client;
pub mod config;
pub mod error;
pub mod observability;
pub mod probe;
pub mod race;

pub use config::ProbeConfig;
pub use error::ProbeError;
pub use probe::{Endpoint, ProbeResult, Survey};
pub use race::{
    select, select_all, select_all_with_cancel, select_urls, select_urls_idx,
    select_urls_idx_with_cancel, select_with_cancel, Race,
};
pub use tokio_util::sync::CancellationToken;
