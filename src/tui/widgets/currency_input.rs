//! Currency input widget
//!
//! Renders a currency field's display text right-aligned with the cursor
//! pinned to the cents end, where every edit lands.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// A single-line currency input
#[derive(Debug, Clone, Default)]
pub struct CurrencyInput<'a> {
    label: &'a str,
    display: &'a str,
    placeholder: &'a str,
    focused: bool,
}

impl<'a> CurrencyInput<'a> {
    /// Create an input showing `display`
    pub fn new(display: &'a str) -> Self {
        Self {
            display,
            ..Self::default()
        }
    }

    /// Set the label
    pub fn label(mut self, label: &'a str) -> Self {
        self.label = label;
        self
    }

    /// Text shown while the field is empty and unfocused
    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Set focused state
    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for CurrencyInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let label_width = if self.label.is_empty() {
            0
        } else {
            u16::try_from(self.label.width())
                .unwrap_or(u16::MAX)
                .saturating_add(2)
        };

        if label_width > 0 {
            let label_line = Line::from(vec![
                Span::styled(self.label, Style::default().fg(Color::Cyan)),
                Span::raw(": "),
            ]);
            buf.set_line(area.x, area.y, &label_line, label_width);
        }

        let input_start = area.x + label_width.min(area.width);
        let input_width = area.width.saturating_sub(label_width);
        if input_width == 0 {
            return;
        }

        let (text, style) = if self.display.is_empty() && !self.focused {
            (self.placeholder, Style::default().fg(Color::DarkGray))
        } else if self.focused {
            (
                self.display,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )
        } else {
            (self.display, Style::default().fg(Color::Yellow))
        };

        // Leave one column for the cursor when focused
        let cursor_width = u16::from(self.focused);
        let text_room = input_width.saturating_sub(cursor_width) as usize;
        let (shown, shown_width) = visible_tail(text, text_room);

        let text_x = input_start + (text_room - shown_width) as u16;
        buf.set_string(text_x, area.y, shown, style);

        if self.focused {
            let cursor_x = input_start + input_width - 1;
            buf.set_string(
                cursor_x,
                area.y,
                "_",
                Style::default().fg(Color::Black).bg(Color::Cyan),
            );
        }
    }
}

/// The longest suffix of `text` that fits in `room` columns, and its width
///
/// The cents end is what matters, so overflow is cut from the left.
fn visible_tail(text: &str, room: usize) -> (&str, usize) {
    let mut width = 0;
    let mut start = text.len();
    for (i, c) in text.char_indices().rev() {
        let w = c.width().unwrap_or(0);
        if width + w > room {
            break;
        }
        width += w;
        start = i;
    }
    (&text[start..], width)
}
