//! `cashly normalize`: convert an API response into its view-model form

use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::api::envelope::{decode_list, normalize, Page};
use crate::error::{CashlyError, CashlyResult};

/// Read a response body from a file, or stdin when no path is given
fn read_body(file: Option<&Path>) -> CashlyResult<Value> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path).map_err(|e| {
            CashlyError::Io(format!("Failed to read {}: {}", path.display(), e))
        })?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&text)?)
}

/// Normalize a body; `list` forces the paginated-list form
pub fn normalize_body(body: Value, list: bool) -> CashlyResult<Value> {
    if list {
        let page: Page<Value> = decode_list(body)?;
        Ok(serde_json::to_value(page)?)
    } else {
        normalize(body)
    }
}

/// Handle `cashly normalize`
pub fn handle_normalize(file: Option<&Path>, list: bool) -> CashlyResult<()> {
    let body = read_body(file)?;
    let normalized = normalize_body(body, list)?;
    println!("{}", serde_json::to_string_pretty(&normalized)?);
    Ok(())
}
