//! Reusable UI components

mod button;
mod icon;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use icon::{Icon, IconSize, PanelIcons};
