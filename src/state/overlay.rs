//! Overlay stack: which panels are showing and who receives dismissal input

use super::forms::{FormSnapshot, FormState};
use super::panel::{PanelState, PanelTransitionController};
use super::submission::{
    SubmissionController, SubmissionEffect, SubmissionOutcome, SubmissionTicket,
};
use crate::config::{FormDefaults, PanelsConfig};
use serde::{Deserialize, Serialize};
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

/// The panels the workspace can raise
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelId {
    /// Contact form sliding in from the right edge
    ContactSlideOver,
    /// Centered feedback dialog
    FeedbackModal,
}

impl PanelId {
    pub fn title(self) -> &'static str {
        match self {
            Self::ContactSlideOver => "Contact us",
            Self::FeedbackModal => "Send feedback",
        }
    }
}

/// Timing and form defaults shared by every panel the host creates
#[derive(Debug, Clone)]
pub struct OverlaySettings {
    pub open_duration: Duration,
    pub close_duration: Duration,
    pub contact_defaults: FormDefaults,
    pub feedback_defaults: FormDefaults,
}

impl From<&PanelsConfig> for OverlaySettings {
    fn from(config: &PanelsConfig) -> Self {
        Self {
            open_duration: config.open_duration(),
            close_duration: config.close_duration(),
            contact_defaults: config.contact_defaults.clone(),
            feedback_defaults: config.feedback_defaults.clone(),
        }
    }
}

/// One mounted panel and everything it owns
#[derive(Debug)]
pub struct PanelInstance {
    pub id: PanelId,
    pub instance: u64,
    pub transition: PanelTransitionController,
    pub form: FormState,
    pub submission: SubmissionController,
}

impl PanelInstance {
    pub fn state(&self) -> PanelState {
        self.transition.state()
    }

    /// Accepts input only while opening or open
    pub fn is_interactive(&self) -> bool {
        matches!(self.state(), PanelState::Opening | PanelState::Open)
    }
}

/// Ordered stack of mounted panels, most recently opened last.
///
/// Dismissal input only ever reaches the last entry. A panel is popped once
/// its exit animation has finished, wherever it sits in the stack.
#[derive(Debug)]
pub struct OverlayHost {
    stack: Vec<PanelInstance>,
    next_instance: u64,
    settings: OverlaySettings,
}

impl OverlayHost {
    pub fn new(settings: OverlaySettings) -> Self {
        Self {
            stack: Vec::new(),
            next_instance: 1,
            settings,
        }
    }

    pub fn push(&mut self, id: PanelId) -> Option<oneshot::Receiver<()>> {
        self.push_at(id, Instant::now())
    }

    /// Mount a fresh instance of `id` on top and start opening it.
    ///
    /// Returns the closed notification, or `None` if `id` is already mounted.
    pub fn push_at(&mut self, id: PanelId, now: Instant) -> Option<oneshot::Receiver<()>> {
        if self.contains(id) {
            tracing::warn!("{id:?} is already on the overlay stack");
            return None;
        }

        let instance = self.next_instance;
        self.next_instance += 1;

        let mut form = match id {
            PanelId::ContactSlideOver => FormState::contact(&self.settings.contact_defaults),
            PanelId::FeedbackModal => FormState::feedback(&self.settings.feedback_defaults),
        };
        form.focus_first_empty();
        let mut transition =
            PanelTransitionController::new(self.settings.open_duration, self.settings.close_duration);
        let closed = transition.subscribe_closed();
        transition.request_open(now);

        tracing::debug!("pushed {id:?} (instance {instance})");
        self.stack.push(PanelInstance {
            id,
            instance,
            transition,
            form,
            submission: SubmissionController::new(id, instance),
        });
        Some(closed)
    }

    pub fn request_top_close(&mut self) -> bool {
        self.request_top_close_at(Instant::now())
    }

    /// Backdrop click, escape key or the close affordance of the top panel
    pub fn request_top_close_at(&mut self, now: Instant) -> bool {
        let Some(top) = self.stack.last_mut() else {
            return false;
        };
        if !top.transition.request_close(now) {
            return false;
        }
        top.submission.cancel();
        true
    }

    /// Start a submission from the top panel
    pub fn submit_top(&mut self) -> Option<(SubmissionTicket, FormSnapshot)> {
        let top = self.stack.last_mut()?;
        if !top.is_interactive() {
            return None;
        }
        let ticket = top.submission.submit(&top.form)?;
        Some((ticket, top.form.snapshot(top.id)))
    }

    /// Route a sink result to the panel instance that started it
    pub fn deliver_at(&mut self, outcome: SubmissionOutcome, now: Instant) -> SubmissionEffect {
        let ticket = outcome.ticket;
        let Some(panel) = self
            .stack
            .iter_mut()
            .find(|p| p.id == ticket.panel && p.instance == ticket.instance)
        else {
            tracing::debug!("{:?} instance {} is gone, dropping result", ticket.panel, ticket.instance);
            return SubmissionEffect::Ignored;
        };

        let effect = panel.submission.complete(&ticket, outcome.result);
        if effect == SubmissionEffect::RequestClose {
            panel.transition.request_close(now);
        }
        effect
    }

    /// Advance every panel's animation and pop the ones that finished closing
    pub fn tick(&mut self, now: Instant) -> Vec<PanelId> {
        let mut closed = Vec::new();
        for panel in &mut self.stack {
            if panel.transition.tick(now) == Some(PanelState::Closed) {
                closed.push(panel.id);
            }
        }
        if !closed.is_empty() {
            self.stack.retain(|p| p.state() != PanelState::Closed);
            tracing::debug!("popped {closed:?}, stack now {:?}", self.ids());
        }
        closed
    }

    pub fn top(&self) -> Option<&PanelInstance> {
        self.stack.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut PanelInstance> {
        self.stack.last_mut()
    }

    /// Mounted panels, bottom to top
    pub fn panels(&self) -> &[PanelInstance] {
        &self.stack
    }

    pub fn ids(&self) -> Vec<PanelId> {
        self.stack.iter().map(|p| p.id).collect()
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.stack.iter().any(|p| p.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    pub fn is_animating(&self) -> bool {
        self.stack.iter().any(|p| p.state().is_animating())
    }
}
