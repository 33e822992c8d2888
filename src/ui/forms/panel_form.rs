//! Form body shared by the overlay panels

use super::field_renderer::{draw_field, field_height};
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{PanelInstance, SubmissionState};
use crate::ui::components::{render_submit_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Draw fields, submit row and hint line inside `area`
pub fn draw_panel_form(frame: &mut Frame, area: Rect, panel: &PanelInstance) {
    let form = &panel.form;
    let interactive = panel.is_interactive();

    let mut constraints: Vec<Constraint> = form.fields().iter().map(field_height).collect();
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit row
    constraints.push(Constraint::Length(1)); // Status / error
    constraints.push(Constraint::Length(1)); // Help text

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, field) in form.fields().iter().enumerate() {
        let is_active = interactive && form.active_field_index == idx;
        draw_field(frame, chunks[idx], field, is_active);
    }

    let row = form.fields().len();
    let button_area = Rect {
        width: chunks[row].width.min(16),
        ..chunks[row]
    };
    render_submit_button(
        frame,
        button_area,
        panel.submission.state(),
        interactive && form.is_buttons_row_active(),
        panel.submission.can_submit(form),
    );

    let status = match (panel.submission.state(), panel.submission.last_error()) {
        (SubmissionState::Failed, Some(err)) => {
            Span::styled(format!("Could not send: {err}"), Style::default().fg(Color::Red))
        }
        (SubmissionState::Sending, _) => {
            Span::styled("Sending…", Style::default().fg(Color::Yellow))
        }
        _ if !form.is_submittable() => Span::styled(
            "Write a message to enable sending",
            Style::default().fg(Color::DarkGray),
        ),
        _ => Span::raw(""),
    };
    frame.render_widget(Paragraph::new(Line::from(status)), chunks[row + 1]);

    let help = Line::from(vec![
        Span::styled("Tab", Style::default().fg(Color::Cyan)),
        Span::styled(" next  ", Style::default().fg(Color::DarkGray)),
        Span::styled(SUBMIT_SHORTCUT, Style::default().fg(Color::Cyan)),
        Span::styled(" send  ", Style::default().fg(Color::DarkGray)),
        Span::styled("Esc", Style::default().fg(Color::Cyan)),
        Span::styled(" close", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(help), chunks[row + 2]);
}
