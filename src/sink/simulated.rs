//! Timer-backed stand-in for a real network sink

use super::{SubmissionSink, SubmitError};
use crate::state::{FormSnapshot, FIELD_MESSAGE};
use async_trait::async_trait;
use std::time::Duration;

/// Longest message the simulated endpoint accepts, in characters
pub const MAX_MESSAGE_CHARS: usize = 5000;

/// Waits for a fixed delay, then reports success (or a configured failure)
#[derive(Debug, Clone)]
pub struct SimulatedSink {
    delay: Duration,
    fail: bool,
}

impl SimulatedSink {
    pub fn new(delay: Duration, fail: bool) -> Self {
        Self { delay, fail }
    }
}

#[async_trait]
impl SubmissionSink for SimulatedSink {
    async fn send(&self, payload: FormSnapshot) -> Result<(), SubmitError> {
        match serde_json::to_string(&payload) {
            Ok(json) => tracing::info!("sending {:?} payload: {json}", payload.panel),
            Err(err) => tracing::warn!("could not encode payload for logging: {err}"),
        }

        tokio::time::sleep(self.delay).await;

        let length = payload.get(FIELD_MESSAGE).map_or(0, |m| m.chars().count());
        if length > MAX_MESSAGE_CHARS {
            return Err(SubmitError::Rejected(format!(
                "message is {length} characters, the limit is {MAX_MESSAGE_CHARS}"
            )));
        }
        if self.fail {
            return Err(SubmitError::Unavailable("simulated network failure".to_string()));
        }
        Ok(())
    }
}
