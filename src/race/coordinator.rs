//! Race coordinator.
//!
//! # Responsibilities
//! - Fan endpoints out to one checker task each
//! - Wait on {caller cancelled, result arrived, deadline} and act on the first
//! - Apply the selection policy (first winner, winner index, all successes)

use reqwest::Client;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::client::default_client;
use crate::config::ProbeSettings;
use crate::error::ProbeError;
use crate::probe::{check, Endpoint, ProbeResult, Survey};
use crate::race::cancel::RaceScope;
use crate::race::timeout::Deadline;

/// A batch of endpoints raced under one timeout.
///
/// A `Race` is a description; every call to [`first`](Race::first),
/// [`first_index`](Race::first_index) or [`all`](Race::all) runs a fresh race
/// with its own channel, cancel token and deadline.
#[derive(Debug, Clone)]
pub struct Race {
    endpoints: Vec<Endpoint>,
    timeout: Duration,
    client: Option<Client>,
    parent: Option<CancellationToken>,
    settings: ProbeSettings,
}

/// Live state of one running race.
struct Launched {
    results: mpsc::Receiver<(usize, ProbeResult)>,
    scope: RaceScope,
    deadline: Deadline,
}

impl Race {
    pub fn new<I, E>(endpoints: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<Endpoint>,
    {
        let settings = ProbeSettings::default();
        Self {
            endpoints: endpoints.into_iter().map(Into::into).collect(),
            timeout: settings.timeout(),
            client: None,
            parent: None,
            settings,
        }
    }

    /// Bound on the total wait, measured from race start.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Use a pre-configured client instead of building the default one.
    pub fn client(mut self, client: Client) -> Self {
        self.client = Some(client);
        self
    }

    /// Abort the race with [`ProbeError::Cancelled`] when `parent` fires.
    pub fn cancel_on(mut self, parent: CancellationToken) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Replace settings; also adopts their timeout.
    pub fn settings(mut self, settings: ProbeSettings) -> Self {
        self.timeout = settings.timeout();
        self.settings = settings;
        self
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    /// The endpoint whose success arrives first.
    pub async fn first(&self) -> Result<Endpoint, ProbeError> {
        let (_, probe) = self.race_first("first").await?;
        Ok(probe.endpoint)
    }

    /// Zero-based input position of the endpoint whose success arrives first.
    pub async fn first_index(&self) -> Result<usize, ProbeError> {
        let (idx, _) = self.race_first("first_index").await?;
        Ok(idx)
    }

    /// Every success, in arrival order.
    ///
    /// Ends as soon as every checker has finished. When some endpoints failed
    /// the survey carries [`ProbeError::Unreachable`]; when the deadline hits
    /// first it carries [`ProbeError::Timeout`]. Collected probes are kept.
    pub async fn all(&self) -> Survey {
        let total = self.endpoints.len();
        let mut probes = Vec::with_capacity(total);

        let mut race = match self.launch("all") {
            Ok(race) => race,
            Err(e) => return Survey { probes, error: Some(e) },
        };
        let parent = self.parent.clone().unwrap_or_default();

        let error = loop {
            tokio::select! {
                biased;
                _ = parent.cancelled() => {
                    tracing::info!(collected = probes.len(), total, "Survey cancelled by caller");
                    break Some(ProbeError::Cancelled);
                }
                msg = race.results.recv() => match msg {
                    Some((_, probe)) => {
                        tracing::debug!(
                            endpoint = %probe.endpoint,
                            elapsed_ms = probe.elapsed.as_millis() as u64,
                            "Endpoint responded"
                        );
                        probes.push(probe);
                        if probes.len() == total {
                            break None;
                        }
                    }
                    // Every checker has finished; the rest failed.
                    None => {
                        let failed = total - probes.len();
                        tracing::debug!(failed, total, "Survey finished with failed endpoints");
                        break Some(ProbeError::Unreachable { failed, total });
                    }
                },
                _ = race.deadline.expired() => {
                    tracing::warn!(
                        collected = probes.len(),
                        total,
                        timeout_ms = self.timeout.as_millis() as u64,
                        "Survey timed out"
                    );
                    break Some(race.deadline.error());
                }
            }
        };

        Survey { probes, error }
    }

    async fn race_first(&self, policy: &'static str) -> Result<(usize, ProbeResult), ProbeError> {
        let mut race = self.launch(policy)?;
        let parent = self.parent.clone().unwrap_or_default();

        // A closed channel means every checker failed; keep waiting on the
        // other branches so the outcome is still timeout or cancellation.
        tokio::select! {
            biased;
            _ = parent.cancelled() => {
                tracing::info!(policy, "Race cancelled by caller");
                Err(ProbeError::Cancelled)
            }
            Some((idx, probe)) = race.results.recv() => {
                race.scope.cancel();
                tracing::info!(
                    policy,
                    endpoint = %probe.endpoint,
                    index = idx,
                    elapsed_ms = probe.elapsed.as_millis() as u64,
                    "Race won"
                );
                Ok((idx, probe))
            }
            _ = race.deadline.expired() => {
                tracing::warn!(
                    policy,
                    endpoints = self.endpoints.len(),
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Race timed out without a winner"
                );
                Err(race.deadline.error())
            }
        }
    }

    /// Start the deadline and spawn one checker per endpoint.
    fn launch(&self, policy: &'static str) -> Result<Launched, ProbeError> {
        if self.endpoints.is_empty() {
            return Err(ProbeError::NoEndpoints);
        }

        let client = match &self.client {
            Some(client) => client.clone(),
            None => default_client(self.timeout, &self.settings)?,
        };

        tracing::debug!(
            policy,
            endpoints = self.endpoints.len(),
            timeout_ms = self.timeout.as_millis() as u64,
            "Race starting"
        );

        let deadline = Deadline::start(self.timeout);
        let mut scope = RaceScope::new(self.parent.as_ref());
        // One slot per endpoint: a checker never waits on the coordinator.
        let (tx, results) = mpsc::channel(self.endpoints.len());

        for (idx, endpoint) in self.endpoints.iter().cloned().enumerate() {
            let tx = tx.clone();
            let client = client.clone();
            let token = scope.token().clone();

            scope.spawn(async move {
                match check(&endpoint, &client, &token).await {
                    Ok(probe) => {
                        // Fails only when the race is already decided.
                        let _ = tx.try_send((idx, probe));
                    }
                    Err(failure) => {
                        // Per-endpoint failures are not part of the race outcome.
                        tracing::debug!(endpoint = %endpoint, reason = %failure, "Probe discarded");
                    }
                }
            });
        }

        Ok(Launched {
            results,
            scope,
            deadline,
        })
    }
}
