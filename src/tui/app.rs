//! Application state for interactive amount entry

use std::cell::Cell;
use std::rc::Rc;

use crate::input::currency::CurrencyField;

/// How an entry session ended
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EntryOutcome {
    /// The user confirmed; carries the committed value
    Confirmed(f64),
    /// The user backed out
    Cancelled,
}

type FormCallback = Box<dyn FnMut(f64)>;

/// State of the amount entry screen
///
/// The screen plays the owning form: the currency field reports into
/// `form_value` on every change and on blur.
pub struct App {
    /// The currency field being edited
    pub field: CurrencyField<FormCallback>,
    /// Field label
    pub label: String,
    /// Whether the field has focus
    pub focused: bool,
    /// Message shown under the field
    pub status: Option<String>,
    /// Set once the session is over
    pub outcome: Option<EntryOutcome>,
    form_value: Rc<Cell<f64>>,
    initial: Option<f64>,
}

impl App {
    /// Mount the field, optionally prefilled by the form
    pub fn new(label: impl Into<String>, initial: Option<f64>) -> Self {
        let form_value = Rc::new(Cell::new(0.0));
        let sink = Rc::clone(&form_value);
        let callback: FormCallback = Box::new(move |value| sink.set(value));
        let field = CurrencyField::with_value(initial, callback);
        form_value.set(field.value());

        Self {
            field,
            label: label.into(),
            focused: true,
            status: None,
            outcome: None,
            form_value,
            initial,
        }
    }

    /// Last value the field reported to the form
    pub fn form_value(&self) -> f64 {
        self.form_value.get()
    }

    /// Whether the event loop should stop
    pub fn should_quit(&self) -> bool {
        self.outcome.is_some()
    }

    /// Move focus into or out of the field
    pub fn toggle_focus(&mut self) {
        if self.focused {
            self.field.commit_on_blur();
            let shown = match self.field.display() {
                "" => "(empty)",
                display => display,
            };
            self.status = Some(format!("Committed {}", shown));
        } else {
            self.status = None;
        }
        self.focused = !self.focused;
    }

    /// Type a character
    pub fn type_char(&mut self, c: char) {
        if self.focused {
            self.field.push_digit(c);
        }
    }

    /// Erase the last digit
    pub fn backspace(&mut self) {
        if self.focused {
            self.field.pop_digit();
        }
    }

    /// Paste text at the end of the field
    pub fn paste(&mut self, text: &str) {
        if self.focused {
            let edited = format!("{}{}", self.field.display(), text);
            self.field.append_or_replace(&edited);
        }
    }

    /// Empty the field
    pub fn clear(&mut self) {
        self.field.append_or_replace("");
        self.status = Some("Cleared".to_string());
    }

    /// Put back the amount the form supplied at mount
    pub fn reset(&mut self) {
        self.field.set_from_numeric_value(self.initial);
        self.status = Some("Reset".to_string());
    }

    /// Commit and finish
    pub fn confirm(&mut self) {
        let value = self.field.commit_on_blur();
        self.outcome = Some(EntryOutcome::Confirmed(value));
    }

    /// Finish without committing
    pub fn cancel(&mut self) {
        self.outcome = Some(EntryOutcome::Cancelled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typing_reports_to_form() {
        let mut app = App::new("Amount", None);
        for c in "1234".chars() {
            app.type_char(c);
        }
        assert_eq!(app.field.display(), "$12.34");
        assert_eq!(app.form_value(), 12.34);
    }

    #[test]
    fn test_prefilled_value() {
        let app = App::new("Amount", Some(42.5));
        assert_eq!(app.field.display(), "$42.50");
        assert_eq!(app.form_value(), 42.5);
    }

    #[test]
    fn test_unfocused_field_ignores_typing() {
        let mut app = App::new("Amount", None);
        app.type_char('5');
        app.toggle_focus();
        assert!(!app.focused);
        assert_eq!(app.status.as_deref(), Some("Committed $0.05"));

        app.type_char('6');
        app.backspace();
        assert_eq!(app.field.display(), "$0.05");
    }

    #[test]
    fn test_paste_keeps_digits_only() {
        let mut app = App::new("Amount", None);
        app.paste("$1,000");
        assert_eq!(app.field.display(), "$10.00");
    }

    #[test]
    fn test_reset_and_clear() {
        let mut app = App::new("Amount", Some(3.0));
        app.type_char('9');
        assert_eq!(app.field.display(), "$30.09");

        app.reset();
        assert_eq!(app.field.display(), "$3.00");

        app.clear();
        assert_eq!(app.field.display(), "");
        assert_eq!(app.form_value(), 0.0);
    }

    #[test]
    fn test_confirm_and_cancel() {
        let mut app = App::new("Amount", None);
        app.type_char('7');
        app.confirm();
        assert_eq!(app.outcome, Some(EntryOutcome::Confirmed(0.07)));
        assert!(app.should_quit());

        let mut app = App::new("Amount", None);
        app.cancel();
        assert_eq!(app.outcome, Some(EntryOutcome::Cancelled));
    }
}
