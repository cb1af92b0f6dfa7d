//! Race deadline.
//!
//! One fixed deadline measured from race start. Activity does not extend it.

use std::pin::Pin;
use std::time::Duration;
use tokio::time::{sleep, Sleep};

use crate::error::ProbeError;

pub(crate) struct Deadline {
    timeout: Duration,
    sleep: Pin<Box<Sleep>>,
}

impl Deadline {
    pub fn start(timeout: Duration) -> Self {
        Self {
            timeout,
            sleep: Box::pin(sleep(timeout)),
        }
    }

    /// Resolves once the deadline has passed. Safe to poll again in a loop.
    pub async fn expired(&mut self) {
        self.sleep.as_mut().await;
    }

    pub fn error(&self) -> ProbeError {
        ProbeError::Timeout {
            after: self.timeout,
        }
    }
}
