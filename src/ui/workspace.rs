//! Workspace landing view behind the overlays

use super::components::{Icon, IconSize};
use crate::app::App;
use crate::state::PanelId;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Shortcut shown on each tile
fn tile_key(id: PanelId) -> &'static str {
    match id {
        PanelId::ContactSlideOver => "c",
        PanelId::FeedbackModal => "f",
    }
}

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " Workspace ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Greeting
            Constraint::Length(5), // Tiles
            Constraint::Min(0),
        ])
        .margin(1)
        .split(inner);

    let greeting = vec![
        Line::from(Span::styled(
            "Welcome back",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Questions about a lesson or something not working? Reach out below.",
            Style::default().fg(Color::Gray),
        )),
    ];
    frame.render_widget(
        Paragraph::new(greeting).wrap(Wrap { trim: true }),
        chunks[0],
    );

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Length(28), Constraint::Min(0)])
        .split(chunks[1]);

    for (idx, id) in [PanelId::ContactSlideOver, PanelId::FeedbackModal]
        .into_iter()
        .enumerate()
    {
        draw_tile(frame, tiles[idx], id, app.icons.get(id), app.overlay.contains(id));
    }
}

fn draw_tile(frame: &mut Frame, area: Rect, id: PanelId, icon: &dyn Icon, is_open: bool) {
    let border = if is_open { Color::Cyan } else { Color::DarkGray };
    let lines = vec![
        Line::from(icon.render_at(IconSize::Large)),
        Line::from(vec![
            Span::styled(tile_key(id), Style::default().fg(Color::Cyan)),
            Span::raw(format!(" {}", id.title())),
        ]),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border));
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block),
        area,
    );
}
