//! Form domain layer
//!
//! Field values for the contact and feedback panels, focus handling and the
//! snapshot handed to the submission sink.

mod field;
mod form_state;

pub use field::*;
pub use form_state::*;
