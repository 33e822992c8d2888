//! Shared dimmed layer beneath the top-most panel

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    Frame,
};

/// Dim everything already drawn in `area`
pub fn draw(frame: &mut Frame, area: Rect) {
    let style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::DIM);
    frame.buffer_mut().set_style(area, style);
}
