//! Keyboard bridge for selection commands.

use crate::pointer::Modifiers;

/// A page command derived from a keyboard event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    /// Remove the selected object.
    DeleteSelection,
    /// Duplicate the selected object and select the copy.
    DuplicateSelection,
}

/// Map a key press to an editor command.
///
/// Keys use the web naming convention ("Delete", "Backspace", letter keys
/// as typed). Returns None while a text-editing control has focus so typing
/// never mutates the page.
pub fn key_command(key: &str, modifiers: Modifiers, text_input_focused: bool) -> Option<KeyCommand> {
    if text_input_focused {
        return None;
    }
    match key {
        "Delete" | "Backspace" => Some(KeyCommand::DeleteSelection),
        "d" | "D" if modifiers.command() => Some(KeyCommand::DuplicateSelection),
        _ => None,
    }
}
