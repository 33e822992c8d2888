//! Submission state machine for one panel instance

use super::forms::FormState;
use super::PanelId;
use crate::sink::SubmitError;
use uuid::Uuid;

/// Status of the current submission attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed,
}

impl SubmissionState {
    /// Label for the submit button
    pub fn button_label(self) -> &'static str {
        match self {
            Self::Idle => "Send",
            Self::Sending => "Sending…",
            Self::Succeeded => "Sent",
            Self::Failed => "Retry",
        }
    }
}

/// Identifies one submission attempt of one panel instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmissionTicket {
    pub panel: PanelId,
    pub instance: u64,
    pub attempt: Uuid,
}

/// Result of a send, routed back to the panel that started it
#[derive(Debug)]
pub struct SubmissionOutcome {
    pub ticket: SubmissionTicket,
    pub result: Result<(), SubmitError>,
}

/// What the owning panel should do after a completion was applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionEffect {
    /// Send succeeded; the panel should begin closing
    RequestClose,
    /// Send failed; panel and form stay as they are
    StayOpen,
    /// Stale or unknown completion, nothing changed
    Ignored,
}

/// At most one send in flight; retries allowed after a failure.
///
/// Once cancelled (the panel was dismissed) every later completion is dropped.
#[derive(Debug)]
pub struct SubmissionController {
    panel: PanelId,
    instance: u64,
    state: SubmissionState,
    attempt: Option<Uuid>,
    cancelled: bool,
    last_error: Option<String>,
}

impl SubmissionController {
    pub fn new(panel: PanelId, instance: u64) -> Self {
        Self {
            panel,
            instance,
            state: SubmissionState::Idle,
            attempt: None,
            cancelled: false,
            last_error: None,
        }
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// Whether a new attempt may start right now for this form
    pub fn can_submit(&self, form: &FormState) -> bool {
        !self.cancelled
            && matches!(self.state, SubmissionState::Idle | SubmissionState::Failed)
            && form.is_submittable()
    }

    /// Start a new attempt. Returns `None` when the form is not submittable,
    /// a send is already in flight, or the last attempt succeeded.
    pub fn submit(&mut self, form: &FormState) -> Option<SubmissionTicket> {
        if !self.can_submit(form) {
            tracing::debug!(
                "submit ignored for {:?} (state {:?})",
                self.panel,
                self.state
            );
            return None;
        }

        let attempt = Uuid::new_v4();
        self.attempt = Some(attempt);
        self.state = SubmissionState::Sending;
        self.last_error = None;
        Some(SubmissionTicket {
            panel: self.panel,
            instance: self.instance,
            attempt,
        })
    }

    /// Apply the result of a send
    pub fn complete(
        &mut self,
        ticket: &SubmissionTicket,
        result: Result<(), SubmitError>,
    ) -> SubmissionEffect {
        let current = self.attempt == Some(ticket.attempt)
            && ticket.instance == self.instance
            && ticket.panel == self.panel;
        if self.cancelled || !current || self.state != SubmissionState::Sending {
            tracing::debug!("dropping stale submission result {}", ticket.attempt);
            return SubmissionEffect::Ignored;
        }

        match result {
            Ok(()) => {
                tracing::info!("submission {} for {:?} succeeded", ticket.attempt, self.panel);
                self.state = SubmissionState::Succeeded;
                SubmissionEffect::RequestClose
            }
            Err(err) => {
                tracing::warn!("submission {} for {:?} failed: {err}", ticket.attempt, self.panel);
                self.state = SubmissionState::Failed;
                self.last_error = Some(err.to_string());
                SubmissionEffect::StayOpen
            }
        }
    }

    /// The owning panel was dismissed; drop whatever arrives later
    pub fn cancel(&mut self) {
        if self.state == SubmissionState::Sending {
            tracing::debug!("cancelling in-flight submission for {:?}", self.panel);
        }
        self.cancelled = true;
    }
}
