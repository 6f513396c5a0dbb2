//! Currency digit buffer
//!
//! Calculator-style currency entry: the field keeps only the digits the user
//! typed and always treats the last two as cents, so typing "1", "2", "3"
//! shows "$0.01", "$0.12", "$1.23". Display text and numeric value are both
//! derived from the digit string on every change, never from each other.
//!
//! All operations here are total. Anything that is not a digit is dropped.

use std::fmt;

use crate::models::money::{group_thousands, Money};

/// Strip every non-digit character from `text`
pub fn extract_digits(text: &str) -> String {
    text.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Split a digit string into its dollar and two-character cents components
///
/// Buffers of two digits or fewer are all cents; the dollar component is
/// then "0".
fn split_components(digits: &str) -> (&str, String) {
    if digits.len() <= 2 {
        ("0", format!("{:0>2}", digits))
    } else {
        let (dollars, cents) = digits.split_at(digits.len() - 2);
        (dollars, cents.to_string())
    }
}

/// Drop leading zeros, keeping a single "0" when nothing else remains
fn trim_leading_zeros(dollars: &str) -> &str {
    let trimmed = dollars.trim_start_matches('0');
    if trimmed.is_empty() {
        "0"
    } else {
        trimmed
    }
}

/// Format a digit string for display, e.g. "123456" -> "$1,234.56"
///
/// An empty buffer formats to an empty string.
pub fn format_display(digits: &str) -> String {
    if digits.is_empty() {
        return String::new();
    }

    let (dollars, cents) = split_components(digits);
    let dollars = trim_leading_zeros(dollars);
    let dollars = if dollars == "0" {
        dollars.to_string()
    } else {
        group_thousands(dollars)
    };

    format!("${}.{}", dollars, cents)
}

/// Decimal text of the amount held by a digit string, e.g. "123456" -> "1234.56"
///
/// This is the lossless form of the value: it is built by splitting the
/// string, so no floating-point division is involved. Empty buffers give "0".
pub fn numeric_text(digits: &str) -> String {
    if digits.is_empty() {
        return "0".to_string();
    }

    let (dollars, cents) = split_components(digits);
    format!("{}.{}", trim_leading_zeros(dollars), cents)
}

/// Numeric value of a digit string
///
/// Parses [`numeric_text`], so the result is the closest `f64` to the exact
/// decimal amount.
pub fn numeric_value(digits: &str) -> f64 {
    // numeric_text only ever yields digits with at most one '.'
    numeric_text(digits).parse().unwrap_or(0.0)
}

/// Derive a digit string from an externally supplied amount
///
/// Absent, non-finite, zero and negative values all give an empty buffer, so
/// an amount of exactly zero clears the field rather than showing "$0.00".
pub fn digits_from_value(value: Option<f64>) -> String {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => format!("{:.0}", (v * 100.0).round()),
        _ => String::new(),
    }
}

/// Everything derived from a digit buffer at one point in time
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Raw digits, no formatting
    pub raw_digits: String,
    /// Formatted display string ("" when empty)
    pub display: String,
    /// Numeric value (0 when empty)
    pub value: f64,
}

impl Snapshot {
    fn from_digits(raw_digits: String) -> Self {
        let display = format_display(&raw_digits);
        let value = numeric_value(&raw_digits);
        Self {
            raw_digits,
            display,
            value,
        }
    }

    /// Exact decimal text of the value
    pub fn numeric_text(&self) -> String {
        numeric_text(&self.raw_digits)
    }

    /// Whether the buffer holds no digits
    pub fn is_empty(&self) -> bool {
        self.raw_digits.is_empty()
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// The digits typed into a currency field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DigitBuffer {
    raw_digits: String,
}

impl DigitBuffer {
    /// Create an empty buffer
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a buffer reverse-derived from an amount
    pub fn from_value(value: Option<f64>) -> Self {
        Self {
            raw_digits: digits_from_value(value),
        }
    }

    /// Raw digits currently held
    pub fn raw_digits(&self) -> &str {
        &self.raw_digits
    }

    /// Current derived values
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_digits(self.raw_digits.clone())
    }

    /// Formatted display string
    pub fn display(&self) -> String {
        format_display(&self.raw_digits)
    }

    /// Numeric value
    pub fn value(&self) -> f64 {
        numeric_value(&self.raw_digits)
    }

    /// Replace the buffer with the digits found in the edited field text
    ///
    /// `input_text` is the whole content of the field after the edit, not
    /// just the new character.
    pub fn append_or_replace(&mut self, input_text: &str) -> Snapshot {
        self.raw_digits = extract_digits(input_text);
        self.snapshot()
    }

    /// Replace the buffer from an amount supplied by the owning form
    pub fn set_from_numeric_value(&mut self, value: Option<f64>) -> Snapshot {
        self.raw_digits = digits_from_value(value);
        self.snapshot()
    }

    /// Amount as [`Money`], or `None` if it does not fit in i64 cents
    pub fn to_money(&self) -> Option<Money> {
        if self.raw_digits.is_empty() {
            return Some(Money::zero());
        }
        self.raw_digits.parse::<i64>().ok().map(Money::from_cents)
    }
}

/// A currency field bound to an owning form
///
/// Every change and every blur hands the numeric value to the form through
/// the `on_change` callback.
pub struct CurrencyField<F>
where
    F: FnMut(f64),
{
    buffer: DigitBuffer,
    display: String,
    on_change: F,
}

impl<F> CurrencyField<F>
where
    F: FnMut(f64),
{
    /// Mount an empty field
    pub fn new(on_change: F) -> Self {
        Self {
            buffer: DigitBuffer::new(),
            display: String::new(),
            on_change,
        }
    }

    /// Mount a field showing an initial amount
    pub fn with_value(value: Option<f64>, on_change: F) -> Self {
        let buffer = DigitBuffer::from_value(value);
        let display = buffer.display();
        Self {
            buffer,
            display,
            on_change,
        }
    }

    /// Text currently shown in the field
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Raw digits behind the display
    pub fn raw_digits(&self) -> &str {
        self.buffer.raw_digits()
    }

    /// Current numeric value
    pub fn value(&self) -> f64 {
        self.buffer.value()
    }

    /// Underlying buffer
    pub fn buffer(&self) -> &DigitBuffer {
        &self.buffer
    }

    /// Handle an edit of the field text
    pub fn append_or_replace(&mut self, input_text: &str) -> Snapshot {
        let snapshot = self.buffer.append_or_replace(input_text);
        self.apply(snapshot)
    }

    /// Handle an amount pushed down by the owning form
    pub fn set_from_numeric_value(&mut self, value: Option<f64>) -> Snapshot {
        let snapshot = self.buffer.set_from_numeric_value(value);
        self.apply(snapshot)
    }

    /// Type one character at the end of the field
    pub fn push_digit(&mut self, c: char) -> Snapshot {
        let edited = format!("{}{}", self.display, c);
        self.append_or_replace(&edited)
    }

    /// Erase the last character of the field
    ///
    /// Erasing a formatting character still removes the last digit because
    /// the cents end is the only place edits land.
    pub fn pop_digit(&mut self) -> Snapshot {
        let mut digits = self.buffer.raw_digits().to_string();
        digits.pop();
        self.append_or_replace(&digits)
    }

    /// Reformat from the held digits and report the value to the form
    pub fn commit_on_blur(&mut self) -> f64 {
        self.display = self.buffer.display();
        let value = self.buffer.value();
        (self.on_change)(value);
        value
    }

    fn apply(&mut self, snapshot: Snapshot) -> Snapshot {
        self.display = snapshot.display.clone();
        (self.on_change)(snapshot.value);
        snapshot
    }
}

impl<F> fmt::Debug for CurrencyField<F>
where
    F: FnMut(f64),
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CurrencyField")
            .field("buffer", &self.buffer)
            .field("display", &self.display)
            .finish()
    }
}
