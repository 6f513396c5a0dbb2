//! Key handling for amount entry

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;

/// Apply one key press to the app
pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('c') if ctrl => app.cancel(),
        KeyCode::Char('u') if ctrl => app.clear(),
        KeyCode::Char('r') if ctrl => app.reset(),
        KeyCode::Char('q') if !app.focused => app.cancel(),
        KeyCode::Char(c) => app.type_char(c),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Tab | KeyCode::BackTab => app.toggle_focus(),
        KeyCode::Enter => app.confirm(),
        KeyCode::Esc => app.cancel(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::app::EntryOutcome;

    fn press(app: &mut App, code: KeyCode) {
        handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn ctrl(app: &mut App, c: char) {
        handle_key(app, KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL));
    }

    #[test]
    fn test_keystrokes_build_amount() {
        let mut app = App::new("Amount", None);
        for c in ['1', '0', '0', '0', '0', '0'] {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.field.display(), "$1,000.00");

        press(&mut app, KeyCode::Backspace);
        assert_eq!(app.field.display(), "$100.00");
    }

    #[test]
    fn test_letters_are_ignored() {
        let mut app = App::new("Amount", None);
        press(&mut app, KeyCode::Char('a'));
        press(&mut app, KeyCode::Char('$'));
        assert_eq!(app.field.display(), "");
    }

    #[test]
    fn test_enter_confirms() {
        let mut app = App::new("Amount", None);
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.outcome, Some(EntryOutcome::Confirmed(0.05)));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new("Amount", None);
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit());

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char('q'));
        assert_eq!(app.outcome, Some(EntryOutcome::Cancelled));

        let mut app = App::new("Amount", None);
        ctrl(&mut app, 'c');
        assert!(app.should_quit());
    }

    #[test]
    fn test_ctrl_shortcuts() {
        let mut app = App::new("Amount", Some(12.0));
        press(&mut app, KeyCode::Char('3'));
        ctrl(&mut app, 'u');
        assert_eq!(app.field.display(), "");
        ctrl(&mut app, 'r');
        assert_eq!(app.field.display(), "$12.00");
    }

    #[test]
    fn test_release_events_are_ignored() {
        let mut app = App::new("Amount", None);
        let mut key = KeyEvent::new(KeyCode::Char('9'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.field.display(), "");
    }
}
