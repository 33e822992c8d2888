//! Form rendering module
//!
//! - `field_renderer`: one bordered field
//! - `panel_form`: the full form body shared by the slide-over and the modal

mod field_renderer;
mod panel_form;

pub use panel_form::draw_panel_form;
