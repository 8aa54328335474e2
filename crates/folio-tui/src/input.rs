use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    HalfPageDown,
    HalfPageUp,
    PageDown,
    PageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    JumpToSection(usize),
    ToggleMenu,
    ToggleTheme,
    NextFilter,
    PrevFilter,
    OpenForm,
    NextField,
    PrevField,
    Submit,
    InputChar(char),
    Backspace,
    CloseOverlay,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    // The contact form captures text input while focused
    if app.form_focus.is_some() {
        return handle_form_mode(key);
    }

    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::HalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::HalfPageUp,
        (KeyCode::Char('f'), KeyModifiers::CONTROL) => Action::PageDown,
        (KeyCode::Char('b'), KeyModifiers::CONTROL) => Action::PageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Char('G'), KeyModifiers::SHIFT) => Action::JumpToBottom,

        // Nav links by number
        (KeyCode::Char(c @ '1'..='9'), KeyModifiers::NONE) => {
            Action::JumpToSection(c as usize - '0' as usize)
        }

        // Page controls
        (KeyCode::Char('m'), KeyModifiers::NONE) => Action::ToggleMenu,
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::ToggleTheme,
        (KeyCode::Tab, KeyModifiers::NONE) => Action::NextFilter,
        (KeyCode::BackTab, KeyModifiers::SHIFT) => Action::PrevFilter,
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::OpenForm,

        (KeyCode::Esc, KeyModifiers::NONE) => Action::CloseOverlay,

        _ => Action::None,
    }
}

/// Key events while the contact form is focused
fn handle_form_mode(key: KeyEvent) -> Action {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Action::Quit,
            _ => Action::None,
        };
    }
    match key.code {
        KeyCode::Esc => Action::CloseOverlay,
        KeyCode::Enter => Action::Submit,
        KeyCode::Tab => Action::NextField,
        KeyCode::BackTab => Action::PrevField,
        KeyCode::Backspace => Action::Backspace,
        KeyCode::Char(c) => Action::InputChar(c),
        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    use folio_core::{EngineConfig, PageModel, Preferences};

    fn app() -> App {
        App::new(
            EngineConfig::default(),
            PageModel::sample(),
            Preferences::default(),
            PathBuf::from("/tmp/folio-input-test.toml"),
        )
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_normal_mode_bindings() {
        let app = app();
        assert_eq!(handle_key_event(key(KeyCode::Char('q')), &app), Action::Quit);
        assert_eq!(
            handle_key_event(key(KeyCode::Char('j')), &app),
            Action::ScrollDown
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('t')), &app),
            Action::ToggleTheme
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('3')), &app),
            Action::JumpToSection(3)
        );
    }

    #[test]
    fn test_double_g_jumps_to_top() {
        let mut app = app();
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app),
            Action::PendingG
        );
        app.pending_key = Some('g');
        assert_eq!(
            handle_key_event(key(KeyCode::Char('g')), &app),
            Action::JumpToTop
        );
    }

    #[test]
    fn test_form_mode_captures_text() {
        let mut app = app();
        app.form_focus = Some(folio_core::form::Field::Name);

        // Letters that are commands in normal mode become input
        assert_eq!(
            handle_key_event(key(KeyCode::Char('q')), &app),
            Action::InputChar('q')
        );
        assert_eq!(handle_key_event(key(KeyCode::Enter), &app), Action::Submit);
        assert_eq!(
            handle_key_event(key(KeyCode::Esc), &app),
            Action::CloseOverlay
        );
    }
}
