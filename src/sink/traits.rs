//! Trait abstraction for the submission sink to enable mocking in tests

use crate::state::FormSnapshot;
use async_trait::async_trait;
use thiserror::Error;

/// Why a send did not go through. Always recoverable by retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    /// The receiving side refused the message
    #[error("submission rejected: {0}")]
    Rejected(String),
    /// The receiving side could not be reached
    #[error("sink unavailable: {0}")]
    Unavailable(String),
}

/// The single external operation a panel submission performs
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubmissionSink: Send + Sync {
    /// Deliver one form snapshot
    async fn send(&self, payload: FormSnapshot) -> Result<(), SubmitError>;
}
