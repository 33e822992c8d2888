//! Contact slide-over

use super::components::{Icon, IconSize};
use super::forms::draw_panel_form;
use crate::state::PanelInstance;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear},
    Frame,
};

/// Draw the slide-over into `area` (already offset for the animation)
pub fn draw(frame: &mut Frame, area: Rect, panel: &PanelInstance, icon: &dyn Icon) {
    if area.width < 3 {
        return;
    }
    frame.render_widget(Clear, area);

    let title = Line::from(vec![
        Span::raw(" "),
        icon.render_at(IconSize::Small),
        Span::styled(
            format!(" {} ", panel.id.title()),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    let block = Block::default()
        .title(title)
        .borders(Borders::LEFT | Borders::TOP | Borders::BOTTOM)
        .border_type(BorderType::Thick)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let body = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };
    draw_panel_form(frame, body, panel);
}
