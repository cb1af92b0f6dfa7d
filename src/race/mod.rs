//! Racing subsystem.
//!
//! # Data Flow
//! ```text
//! Race::first / first_index / all (coordinator.rs)
//!     → Deadline::start (timeout.rs), measured from race start
//!     → RaceScope (cancel.rs): child token of the caller's token
//!     → one checker task per endpoint, all sharing
//!         - the cancel token
//!         - an mpsc channel with one slot per endpoint
//!     → wait on { caller cancelled | result | deadline }
//!     → single winner: fire the token, return
//!       all: keep collecting until every checker finished or the deadline
//!     → RaceScope dropped: token fired, leftover checkers aborted
//! ```
//!
//! # Design Decisions
//! - "First" means first to arrive on the channel, not first in the input
//! - Caller cancellation takes precedence over the deadline
//! - No retries; a failed check is final for that race
//!
//! The free functions below are shorthands for common [`Race`] setups.

mod cancel;
pub mod coordinator;
mod timeout;

pub use coordinator::Race;

use reqwest::Client;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::error::ProbeError;
use crate::probe::Survey;

fn build<S: AsRef<str>>(urls: &[S], timeout: Duration, client: Option<&Client>) -> Race {
    let race = Race::new(urls.iter().map(|u| u.as_ref())).timeout(timeout);
    match client {
        Some(client) => race.client(client.clone()),
        None => race,
    }
}

/// The fastest URL that answered OK within `timeout`.
pub async fn select<S: AsRef<str>>(
    urls: &[S],
    timeout: Duration,
    client: Option<&Client>,
) -> Result<String, ProbeError> {
    let winner = build(urls, timeout, client).first().await?;
    Ok(winner.to_string())
}

/// [`select`], abandoned with [`ProbeError::Cancelled`] when `parent` fires.
pub async fn select_with_cancel<S: AsRef<str>>(
    parent: &CancellationToken,
    urls: &[S],
    timeout: Duration,
    client: Option<&Client>,
) -> Result<String, ProbeError> {
    let winner = build(urls, timeout, client)
        .cancel_on(parent.clone())
        .first()
        .await?;
    Ok(winner.to_string())
}

/// The fastest URL, rendered as a string.
pub async fn select_urls(
    urls: &[Url],
    timeout: Duration,
    client: Option<&Client>,
) -> Result<String, ProbeError> {
    select(urls, timeout, client).await
}

/// Index into `urls` of the fastest URL.
pub async fn select_urls_idx(
    urls: &[Url],
    timeout: Duration,
    client: Option<&Client>,
) -> Result<usize, ProbeError> {
    build(urls, timeout, client).first_index().await
}

/// [`select_urls_idx`], abandoned with [`ProbeError::Cancelled`] when `parent` fires.
pub async fn select_urls_idx_with_cancel(
    parent: &CancellationToken,
    urls: &[Url],
    timeout: Duration,
    client: Option<&Client>,
) -> Result<usize, ProbeError> {
    build(urls, timeout, client)
        .cancel_on(parent.clone())
        .first_index()
        .await
}

/// Every URL that answered OK, with latency, in the order they answered.
pub async fn select_all<S: AsRef<str>>(
    urls: &[S],
    timeout: Duration,
    client: Option<&Client>,
) -> Survey {
    build(urls, timeout, client).all().await
}

/// [`select_all`], stopped early with [`ProbeError::Cancelled`] when `parent` fires.
pub async fn select_all_with_cancel<S: AsRef<str>>(
    parent: &CancellationToken,
    urls: &[S],
    timeout: Duration,
    client: Option<&Client>,
) -> Survey {
    build(urls, timeout, client)
        .cancel_on(parent.clone())
        .all()
        .await
}
