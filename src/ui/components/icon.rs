//! Decorative icons supplied from outside the panels
//!
//! Panels never look inside an icon; they only ask it to render at a size.

use crate::state::PanelId;
use ratatui::{
    style::{Color, Style},
    text::Span,
};
use std::fmt::Debug;
use std::sync::Arc;

/// Size an icon is asked to render at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// Inline next to a title
    Small,
    /// Standalone, e.g. on a workspace tile
    Large,
}

/// Render-at-size capability
pub trait Icon: Debug + Send + Sync {
    fn render_at(&self, size: IconSize) -> Span<'static>;
}

/// Single glyph icon with a color
#[derive(Debug, Clone)]
pub struct GlyphIcon {
    glyph: &'static str,
    color: Color,
}

impl GlyphIcon {
    pub fn new(glyph: &'static str, color: Color) -> Self {
        Self { glyph, color }
    }
}

impl Icon for GlyphIcon {
    fn render_at(&self, size: IconSize) -> Span<'static> {
        let text = match size {
            IconSize::Small => self.glyph.to_string(),
            IconSize::Large => format!("[ {} ]", self.glyph),
        };
        Span::styled(text, Style::default().fg(self.color))
    }
}

/// Icons for each panel, injected by whoever builds the app
#[derive(Debug, Clone)]
pub struct PanelIcons {
    pub contact: Arc<dyn Icon>,
    pub feedback: Arc<dyn Icon>,
}

impl PanelIcons {
    pub fn get(&self, id: PanelId) -> &dyn Icon {
        match id {
            PanelId::ContactSlideOver => self.contact.as_ref(),
            PanelId::FeedbackModal => self.feedback.as_ref(),
        }
    }
}

impl Default for PanelIcons {
    fn default() -> Self {
        Self {
            contact: Arc::new(GlyphIcon::new("✉", Color::Cyan)),
            feedback: Arc::new(GlyphIcon::new("★", Color::Yellow)),
        }
    }
}
