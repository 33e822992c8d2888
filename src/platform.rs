//! Platform-specific key handling

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Submit shortcut display for form help text
/// - macOS: "Cmd+S" (Ctrl+S also works)
/// - Linux/Windows: "Ctrl+S"
#[cfg(target_os = "macos")]
pub const SUBMIT_SHORTCUT: &str = "Cmd+S";

#[cfg(not(target_os = "macos"))]
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Modifiers accepted for the submit chord
#[cfg(target_os = "macos")]
const SUBMIT_MODIFIERS: &[KeyModifiers] = &[KeyModifiers::SUPER, KeyModifiers::CONTROL];

#[cfg(not(target_os = "macos"))]
const SUBMIT_MODIFIERS: &[KeyModifiers] = &[KeyModifiers::CONTROL];

/// Whether `key` is the platform's submit chord
pub fn is_submit_chord(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('s') | KeyCode::Char('S'))
        && SUBMIT_MODIFIERS.iter().any(|m| key.modifiers.contains(*m))
}
