//! Application state and core logic
//!
//! `App` is the single event-processing context: key and mouse input,
//! animation ticks and sink outcomes are all applied here, one at a time.

use crate::config::PanelsConfig;
use crate::platform::is_submit_chord;
use crate::sink::{self, SubmissionSink};
use crate::state::{
    OverlayHost, OverlaySettings, PanelId, SubmissionEffect, SubmissionOutcome, SubmissionState,
};
use crate::ui::components::PanelIcons;
use crate::ui::layout::panel_area;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::{Position, Rect};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::sync::oneshot;

/// Main application struct
pub struct App {
    /// Mounted overlay panels
    pub overlay: OverlayHost,
    /// Icons handed to the panels
    pub icons: PanelIcons,
    /// Transient message for the status bar
    pub status_message: Option<String>,
    /// Last known screen area, for mouse hit testing
    pub screen: Rect,
    sink: Arc<dyn SubmissionSink>,
    outcome_tx: UnboundedSender<SubmissionOutcome>,
    outcomes: UnboundedReceiver<SubmissionOutcome>,
    /// Pending "panel closed" notifications
    closed: Vec<(PanelId, oneshot::Receiver<()>)>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: &PanelsConfig, sink: Arc<dyn SubmissionSink>, icons: PanelIcons) -> Self {
        let (outcome_tx, outcomes) = mpsc::unbounded_channel();
        Self {
            overlay: OverlayHost::new(OverlaySettings::from(config)),
            icons,
            status_message: None,
            screen: Rect::default(),
            sink,
            outcome_tx,
            outcomes,
            closed: Vec::new(),
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Something is moving or waiting, so the loop should poll quickly
    pub fn is_busy(&self) -> bool {
        self.overlay.is_animating()
            || self
                .overlay
                .panels()
                .iter()
                .any(|p| p.submission.state() == SubmissionState::Sending)
    }

    /// Raise a panel on top of the stack
    pub fn open_panel(&mut self, id: PanelId) {
        if let Some(closed) = self.overlay.push(id) {
            tracing::info!("opened {id:?}");
            self.closed.push((id, closed));
        }
    }

    /// Advance animations and apply everything that arrived since the last tick
    pub fn tick(&mut self, now: Instant) {
        while let Ok(outcome) = self.outcomes.try_recv() {
            self.apply_outcome(outcome, now);
        }
        self.overlay.tick(now);
        self.poll_closed();
    }

    fn apply_outcome(&mut self, outcome: SubmissionOutcome, now: Instant) {
        match self.overlay.deliver_at(outcome, now) {
            SubmissionEffect::RequestClose => {
                self.status_message = Some("Thanks! Your message was sent.".to_string());
            }
            SubmissionEffect::StayOpen => {
                self.status_message = Some("Sending failed. Your message is still there.".to_string());
            }
            SubmissionEffect::Ignored => {}
        }
    }

    /// Consume "closed" notifications of panels that finished closing
    fn poll_closed(&mut self) {
        self.closed.retain_mut(|(id, rx)| match rx.try_recv() {
            Ok(()) => {
                tracing::info!("{id:?} closed");
                false
            }
            Err(oneshot::error::TryRecvError::Empty) => true,
            Err(oneshot::error::TryRecvError::Closed) => false,
        });
    }

    fn submit_top(&mut self) {
        let Some((ticket, payload)) = self.overlay.submit_top() else {
            return;
        };
        tracing::info!("submitting {:?} ({})", ticket.panel, ticket.attempt);
        sink::dispatch(self.sink.clone(), ticket, payload, self.outcome_tx.clone());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Clear any status messages on key press
        self.status_message = None;

        // Global shortcuts, usable on top of other panels
        match key.code {
            KeyCode::F(1) => self.open_panel(PanelId::ContactSlideOver),
            KeyCode::F(2) => self.open_panel(PanelId::FeedbackModal),
            _ if self.overlay.is_empty() => self.handle_workspace_key(key),
            _ => self.handle_panel_key(key),
        }
    }

    fn handle_workspace_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') => self.open_panel(PanelId::ContactSlideOver),
            KeyCode::Char('f') => self.open_panel(PanelId::FeedbackModal),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Keys go to the top panel only
    fn handle_panel_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.overlay.request_top_close();
            return;
        }
        if is_submit_chord(&key) {
            self.submit_top();
            return;
        }

        let Some(top) = self.overlay.top_mut() else {
            return;
        };
        if !top.is_interactive() {
            return;
        }
        if key.code == KeyCode::Enter && top.form.is_buttons_row_active() {
            self.submit_top();
            return;
        }

        let form = &mut top.form;
        match key.code {
            // Ctrl+U empties the focused field
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(name) = form.active_field().map(|f| f.name) {
                    form.set_field(name, "");
                }
            }
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Enter if form.is_active_field_multiline() => form.push_char('\n'),
            KeyCode::Enter => form.next_field(),
            KeyCode::Left => form.cycle_choice(false),
            KeyCode::Right => form.cycle_choice(true),
            KeyCode::Backspace => form.pop_char(),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                form.push_char(c)
            }
            _ => {}
        }
    }

    /// Handle a mouse event. A click outside the top panel is a backdrop click.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let Some(top) = self.overlay.top() else {
            return;
        };
        let area = panel_area(top.id, self.screen, top.transition.progress());
        if !area.contains(Position::new(mouse.column, mouse.row)) {
            tracing::debug!("backdrop click at {},{}", mouse.column, mouse.row);
            self.overlay.request_top_close();
        }
    }
}
