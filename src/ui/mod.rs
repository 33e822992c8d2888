//! UI module for rendering the TUI

mod backdrop;
pub mod components;
mod contact_panel;
mod feedback_modal;
mod forms;
pub mod layout;
mod workspace;

use crate::app::App;
use crate::state::PanelId;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let (content_area, status_area) = layout::create_layout(area);

    workspace::draw(frame, content_area, app);
    draw_status_bar(frame, status_area, app);

    // Later panels stack above earlier ones; the backdrop sits just under the top one
    let panels = app.overlay.panels();
    for (idx, panel) in panels.iter().enumerate() {
        if !panel.state().is_visible() {
            continue;
        }
        if idx + 1 == panels.len() {
            backdrop::draw(frame, area);
        }
        let panel_area = layout::panel_area(panel.id, area, panel.transition.progress());
        let icon = app.icons.get(panel.id);
        match panel.id {
            PanelId::ContactSlideOver => contact_panel::draw(frame, panel_area, panel, icon),
            PanelId::FeedbackModal => feedback_modal::draw(frame, panel_area, panel, icon),
        }
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.status_message {
        Some(message) => Line::from(Span::styled(
            format!(" {message}"),
            Style::default().fg(Color::Green),
        )),
        None => Line::from(vec![
            Span::styled(" c", Style::default().fg(Color::Cyan)),
            Span::styled(" contact  ", Style::default().fg(Color::DarkGray)),
            Span::styled("f", Style::default().fg(Color::Cyan)),
            Span::styled(" feedback  ", Style::default().fg(Color::DarkGray)),
            Span::styled("q", Style::default().fg(Color::Cyan)),
            Span::styled(" quit", Style::default().fg(Color::DarkGray)),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}
