//! Submission sink: where captured form data is sent
//!
//! The state machine only knows the [`SubmissionSink`] trait. [`dispatch`]
//! runs one send on the runtime and reports the outcome over a channel so the
//! event loop can apply it when it gets to it.

mod simulated;
mod traits;

pub use simulated::SimulatedSink;
pub use traits::{SubmissionSink, SubmitError};

#[cfg(test)]
pub use traits::MockSubmissionSink;

use crate::state::{FormSnapshot, SubmissionOutcome, SubmissionTicket};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;

/// Run `sink.send(payload)` in the background and forward the result
pub fn dispatch(
    sink: Arc<dyn SubmissionSink>,
    ticket: SubmissionTicket,
    payload: FormSnapshot,
    outcomes: UnboundedSender<SubmissionOutcome>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let result = sink.send(payload).await;
        if outcomes.send(SubmissionOutcome { ticket, result }).is_err() {
            tracing::debug!("outcome receiver gone, dropping result for {}", ticket.attempt);
        }
    })
}
