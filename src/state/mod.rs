//! Panel interaction state

mod forms;
mod overlay;
mod panel;
mod submission;

pub use forms::*;
pub use overlay::*;
pub use panel::*;
pub use submission::*;
