use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::view::fields::Focus;

/// Window action produced by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// "Insert" button.
    Insert,
    /// "Delete" button.
    Delete,
    /// "Obtain" button.
    Obtain,
    /// Search panel "Search" button.
    Search,
    /// Search panel "Show all" button.
    ShowAll,
    /// Move focus to the next widget.
    FocusNext,
    /// Move focus to the previous widget.
    FocusPrevious,
    /// Select the row below.
    SelectNext,
    /// Select the row above.
    SelectPrevious,
    /// Type into the focused entry.
    Type(char),
    /// Erase from the focused entry.
    Backspace,
    /// Close the window.
    Quit,
}

/// Maps a key press to a command given the focused widget.
///
/// Function keys act as the window's buttons; Enter triggers the button that
/// belongs to the focused area.
pub fn command_for(key: KeyEvent, focus: Focus) -> Option<Command> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let alt = key.modifiers.contains(KeyModifiers::ALT);

    match key.code {
        KeyCode::Char('c') if ctrl => Some(Command::Quit),
        KeyCode::Esc => Some(Command::Quit),
        KeyCode::F(1) => Some(Command::Insert),
        KeyCode::F(2) => Some(Command::Delete),
        KeyCode::F(3) => Some(Command::Obtain),
        KeyCode::F(5) => Some(Command::Search),
        KeyCode::F(6) => Some(Command::ShowAll),
        KeyCode::Tab => Some(Command::FocusNext),
        KeyCode::BackTab => Some(Command::FocusPrevious),
        KeyCode::Down => Some(Command::SelectNext),
        KeyCode::Up => Some(Command::SelectPrevious),
        KeyCode::Enter => Some(match focus {
            Focus::Id | Focus::Name | Focus::Phone => Command::Insert,
            Focus::Table => Command::Obtain,
            Focus::Search => Command::Search,
        }),
        KeyCode::Delete if focus == Focus::Table => Some(Command::Delete),
        KeyCode::Backspace if focus.is_editable() => Some(Command::Backspace),
        KeyCode::Char(ch) if !ctrl && !alt && focus.is_editable() => Some(Command::Type(ch)),
        _ => None,
    }
}
