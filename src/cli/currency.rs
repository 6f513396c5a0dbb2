//! Currency field CLI commands
//!
//! Drive the digit buffer from the command line: format pasted text, replay
//! keystrokes, or push a value down the way a form would.

use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};

use crate::error::{CashlyError, CashlyResult};
use crate::input::currency::{CurrencyField, DigitBuffer, Snapshot};

/// Key that stands for Backspace in a replayed key sequence
pub const BACKSPACE_KEY: char = '<';

#[derive(Serialize)]
struct SnapshotReport<'a> {
    raw_digits: &'a str,
    display: &'a str,
    value: f64,
    exact: String,
}

impl<'a> From<&'a Snapshot> for SnapshotReport<'a> {
    fn from(s: &'a Snapshot) -> Self {
        Self {
            raw_digits: &s.raw_digits,
            display: &s.display,
            value: s.value,
            exact: s.numeric_text(),
        }
    }
}

fn print_snapshot(snapshot: &Snapshot, json: bool) -> CashlyResult<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&SnapshotReport::from(snapshot))?
        );
        return Ok(());
    }

    let display = if snapshot.display.is_empty() {
        "(empty)"
    } else {
        snapshot.display.as_str()
    };
    println!("Display: {}", display);
    println!("Value:   {}", snapshot.numeric_text());
    println!("Digits:  {}", snapshot.raw_digits);
    Ok(())
}

/// Handle `cashly format`
pub fn handle_format(text: &str, json: bool) -> CashlyResult<()> {
    let mut buffer = DigitBuffer::new();
    let snapshot = buffer.append_or_replace(text);
    print_snapshot(&snapshot, json)
}

/// Parse a value argument; "none" and "" mean absent
pub fn parse_value_arg(value: Option<&str>) -> CashlyResult<Option<f64>> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) if v.eq_ignore_ascii_case("none") => Ok(None),
        Some(v) => v
            .parse::<f64>()
            .map(Some)
            .map_err(|_| CashlyError::Validation(format!("Not a number: {}", v))),
    }
}

/// Handle `cashly set`
pub fn handle_set(value: Option<&str>, json: bool) -> CashlyResult<()> {
    let value = parse_value_arg(value)?;
    let mut buffer = DigitBuffer::new();
    let snapshot = buffer.set_from_numeric_value(value);
    print_snapshot(&snapshot, json)
}

/// One replayed keystroke
#[derive(Debug, Clone, Tabled)]
pub struct KeystrokeRow {
    #[tabled(rename = "#")]
    pub step: usize,
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Display")]
    pub display: String,
    #[tabled(rename = "Form value")]
    pub value: f64,
}

/// Replay a key sequence through a currency field
///
/// Each character is typed at the end of the field; [`BACKSPACE_KEY`]
/// erases. Finishes with a blur, whose row is labelled "blur".
pub fn replay_keys(keys: &str) -> Vec<KeystrokeRow> {
    let mut reported = Vec::new();
    let mut rows = Vec::new();
    {
        let mut field = CurrencyField::new(|v| reported.push(v));
        for (i, key) in keys.chars().enumerate() {
            let snapshot = if key == BACKSPACE_KEY {
                field.pop_digit()
            } else {
                field.push_digit(key)
            };
            rows.push(KeystrokeRow {
                step: i + 1,
                key: if key == BACKSPACE_KEY {
                    "Bksp".to_string()
                } else {
                    key.to_string()
                },
                display: snapshot.display,
                value: snapshot.value,
            });
        }

        let value = field.commit_on_blur();
        rows.push(KeystrokeRow {
            step: rows.len() + 1,
            key: "blur".to_string(),
            display: field.display().to_string(),
            value,
        });
    }

    debug_assert_eq!(reported.len(), rows.len());
    rows
}

/// Handle `cashly type`
pub fn handle_type(keys: &str) -> CashlyResult<()> {
    let rows = replay_keys(keys);
    let mut table = Table::new(&rows);
    table.with(Style::rounded());
    println!("{}", table);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_keys() {
        let rows = replay_keys("123");
        let shown: Vec<_> = rows.iter().map(|r| r.display.as_str()).collect();
        assert_eq!(shown, vec!["$0.01", "$0.12", "$1.23", "$1.23"]);
        assert_eq!(rows.last().unwrap().key, "blur");
        assert_eq!(rows.last().unwrap().value, 1.23);
    }

    #[test]
    fn test_replay_backspace() {
        let rows = replay_keys("12<<");
        assert_eq!(rows[2].key, "Bksp");
        assert_eq!(rows[2].display, "$0.01");
        assert_eq!(rows[3].display, "");
        assert_eq!(rows[4].value, 0.0);
    }

    #[test]
    fn test_parse_value_arg() {
        assert_eq!(parse_value_arg(None).unwrap(), None);
        assert_eq!(parse_value_arg(Some("none")).unwrap(), None);
        assert_eq!(parse_value_arg(Some(" 42.5 ")).unwrap(), Some(42.5));
        assert!(parse_value_arg(Some("forty"))
            .unwrap_err()
            .is_validation());
    }
}
