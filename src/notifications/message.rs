//! Notification messages as they arrive on the socket

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::api::envelope::decode;
use crate::error::CashlyResult;

/// A notification pushed by the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    #[serde(default, deserialize_with = "id_as_string")]
    pub id: Option<String>,

    /// Category such as "budget_alert" or "sync_complete"
    #[serde(default, rename = "type")]
    pub kind: Option<String>,

    #[serde(default)]
    pub title: Option<String>,

    pub message: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    /// Sent as `is_read`; some older frames say `read`
    #[serde(default, alias = "isRead")]
    pub read: bool,

    /// Anything else the server attached
    #[serde(default)]
    pub data: Option<Value>,
}

impl Notification {
    /// Parse one text frame
    ///
    /// Frames may be bare or wrapped in the usual API envelope; keys are
    /// camelized before decoding.
    pub fn parse(frame: &str) -> CashlyResult<Self> {
        let value: Value = serde_json::from_str(frame)?;
        decode(value)
    }

    /// One-line rendering for terminals and logs
    pub fn summary(&self) -> String {
        match (&self.kind, &self.title) {
            (Some(kind), Some(title)) => format!("[{}] {}: {}", kind, title, self.message),
            (Some(kind), None) => format!("[{}] {}", kind, self.message),
            (None, Some(title)) => format!("{}: {}", title, self.message),
            (None, None) => self.message.clone(),
        }
    }
}

/// Servers send ids as numbers or strings
fn id_as_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => None,
        Some(Value::String(s)) => Some(s),
        Some(other) => Some(other.to_string()),
    })
}
