//! Screen geometry for the workspace, status bar and overlay panels

use crate::state::PanelId;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the contact slide-over when fully open
pub const SLIDE_OVER_WIDTH: u16 = 48;
/// Size of the feedback modal
pub const MODAL_WIDTH: u16 = 60;
pub const MODAL_HEIGHT: u16 = 20;
/// Rows the modal travels while fading in or out
const MODAL_TRAVEL: f32 = 4.0;

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Where a panel sits for a given eased visibility in [0, 1]
pub fn panel_area(id: PanelId, screen: Rect, progress: f32) -> Rect {
    let progress = progress.clamp(0.0, 1.0);
    match id {
        PanelId::ContactSlideOver => slide_over_area(screen, progress),
        PanelId::FeedbackModal => modal_area(screen, progress),
    }
}

/// Grows in from the right edge
fn slide_over_area(screen: Rect, progress: f32) -> Rect {
    let width = SLIDE_OVER_WIDTH.min(screen.width);
    let visible = (f32::from(width) * progress).round() as u16;
    Rect {
        x: screen.x + screen.width - visible,
        y: screen.y,
        width: visible,
        height: screen.height,
    }
}

/// Centered, dropping in from slightly above its resting row
fn modal_area(screen: Rect, progress: f32) -> Rect {
    let width = MODAL_WIDTH.min(screen.width);
    let height = MODAL_HEIGHT.min(screen.height);
    let x = screen.x + (screen.width - width) / 2;
    let rest_y = screen.y + (screen.height - height) / 2;
    let lift = ((1.0 - progress) * MODAL_TRAVEL).round() as u16;
    Rect {
        x,
        y: rest_y.saturating_sub(lift).max(screen.y),
        width,
        height,
    }
}
