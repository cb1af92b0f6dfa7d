//! Race cancellation scope.
//!
//! # Responsibilities
//! - Own the race's cancellation token, derived from the caller's token
//! - Own every checker task spawned for the race
//! - Fire the token and abandon unfinished checkers on teardown
//!
//! Firing is idempotent. Checkers already holding a response may still
//! deliver it after the token fires; nobody reads it once the race is decided.

use std::future::Future;
use tokio::task::JoinSet;
use tokio_util::sync::CancellationToken;

pub(crate) struct RaceScope {
    token: CancellationToken,
    tasks: JoinSet<()>,
}

impl RaceScope {
    /// A scope cancelled with `parent`, or standalone.
    pub fn new(parent: Option<&CancellationToken>) -> Self {
        let token = parent.map(CancellationToken::child_token).unwrap_or_default();
        Self {
            token,
            tasks: JoinSet::new(),
        }
    }

    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    pub fn spawn<F>(&mut self, task: F)
    where
        F: Future<Output = ()> + Send + 'static,
    {
        self.tasks.spawn(task);
    }

    /// Tell in-flight checkers to give up.
    pub fn cancel(&self) {
        self.token.cancel();
    }
}

impl Drop for RaceScope {
    fn drop(&mut self) {
        self.token.cancel();
        self.tasks.abort_all();
    }
}
