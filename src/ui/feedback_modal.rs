//! Centered feedback modal

use super::components::{Icon, IconSize};
use super::forms::draw_panel_form;
use crate::state::PanelInstance;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

/// Draw the modal into `area` (already offset for the animation)
pub fn draw(frame: &mut Frame, area: Rect, panel: &PanelInstance, icon: &dyn Icon) {
    frame.render_widget(Clear, area);

    let title = Line::from(vec![
        Span::raw(" "),
        icon.render_at(IconSize::Small),
        Span::styled(
            format!(" {} ", panel.id.title()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ])
    .alignment(Alignment::Center);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Yellow))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    draw_panel_form(frame, inner, panel);
}
