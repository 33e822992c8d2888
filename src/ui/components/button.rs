//! Button component for TUI

use crate::state::SubmissionState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    content: &str,
    accent: Color,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = if is_selected && is_enabled {
        Style::default().fg(accent)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if !is_enabled {
        Style::default().fg(Color::DarkGray)
    } else if is_selected {
        Style::default().fg(accent).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render the submit button; its label and color follow the submission state
pub fn render_submit_button(
    frame: &mut Frame,
    area: Rect,
    state: SubmissionState,
    is_selected: bool,
    is_enabled: bool,
) {
    let accent = match state {
        SubmissionState::Failed => Color::Red,
        SubmissionState::Succeeded => Color::Green,
        SubmissionState::Idle | SubmissionState::Sending => Color::Cyan,
    };
    render_button(
        frame,
        area,
        state.button_label(),
        accent,
        is_selected,
        is_enabled,
    );
}
