use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// User actions from keyboard events
#[derive(Debug, PartialEq)]
pub enum Action {
    Quit,
    NextPage,
    PreviousPage,
    FirstPage,
    LastPage,
    JumpToPage(usize),
    ExportJson,
    ExportCsv,
    None,
}

/// Poll for keyboard events and convert to actions
pub fn poll_event(timeout: Duration) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind == KeyEventKind::Press
    {
        return Ok(key_to_action(key));
    }
    Ok(Action::None)
}

fn key_to_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Char('q'), _) | (KeyCode::Esc, _) => Action::Quit,

        // Paging
        (KeyCode::Left, _) | (KeyCode::PageUp, _) | (KeyCode::Char('p'), KeyModifiers::NONE) => {
            Action::PreviousPage
        }
        (KeyCode::Right, _) | (KeyCode::PageDown, _) | (KeyCode::Char('n'), KeyModifiers::NONE) => {
            Action::NextPage
        }
        (KeyCode::Home, _) => Action::FirstPage,
        (KeyCode::End, _) => Action::LastPage,
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::JumpToPage(c as usize - '0' as usize)
        }

        // Export
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ExportJson,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::ExportCsv,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_quit_actions() {
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_to_action(ctrl_c), Action::Quit);
        assert_eq!(key_to_action(key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(key_to_action(key(KeyCode::Esc)), Action::Quit);
    }

    #[test]
    fn test_page_navigation() {
        assert_eq!(key_to_action(key(KeyCode::Left)), Action::PreviousPage);
        assert_eq!(key_to_action(key(KeyCode::PageUp)), Action::PreviousPage);
        assert_eq!(key_to_action(key(KeyCode::Char('p'))), Action::PreviousPage);

        assert_eq!(key_to_action(key(KeyCode::Right)), Action::NextPage);
        assert_eq!(key_to_action(key(KeyCode::PageDown)), Action::NextPage);
        assert_eq!(key_to_action(key(KeyCode::Char('n'))), Action::NextPage);

        assert_eq!(key_to_action(key(KeyCode::Home)), Action::FirstPage);
        assert_eq!(key_to_action(key(KeyCode::End)), Action::LastPage);
    }

    #[test]
    fn test_digit_jumps() {
        assert_eq!(key_to_action(key(KeyCode::Char('1'))), Action::JumpToPage(1));
        assert_eq!(key_to_action(key(KeyCode::Char('9'))), Action::JumpToPage(9));
        assert_eq!(key_to_action(key(KeyCode::Char('0'))), Action::None);
    }

    #[test]
    fn test_export_keys() {
        assert_eq!(key_to_action(key(KeyCode::Char('j'))), Action::ExportJson);
        assert_eq!(key_to_action(key(KeyCode::Char('c'))), Action::ExportCsv);
    }

    #[test]
    fn test_unknown_key() {
        assert_eq!(key_to_action(key(KeyCode::F(1))), Action::None);
        assert_eq!(key_to_action(key(KeyCode::Char('x'))), Action::None);
    }
}
