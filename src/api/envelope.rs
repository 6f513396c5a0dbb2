//! Response envelope handling
//!
//! Endpoints answer in one of a few shapes:
//!
//! - an envelope `{"status": ..., "data": ..., "message": ...}`
//! - a paginated list `{"results": [...], "next": ..., "previous": ..., "count": ...}`,
//!   either bare or inside an envelope's `data`
//! - the bare payload itself
//!
//! The helpers here peel those layers, camelize keys and decode into view
//! models.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::case::camelize_keys;
use crate::error::{CashlyError, CashlyResult};

/// The `{status, data, message}` wrapper
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    pub status: Value,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Whether the status marks a failed request
    pub fn is_error(&self) -> bool {
        status_is_error(&self.status)
    }
}

/// One page of a list endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

impl<T> Page<T> {
    /// Wrap a plain list as a page with no neighbours
    pub fn single(results: Vec<T>) -> Self {
        let count = results.len() as u64;
        Self {
            results,
            next: None,
            previous: None,
            count: Some(count),
        }
    }

    /// Whether another page follows
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// Whether a page precedes this one
    pub fn has_previous(&self) -> bool {
        self.previous.is_some()
    }
}

fn status_is_error(status: &Value) -> bool {
    match status {
        Value::Bool(ok) => !ok,
        Value::String(s) => matches!(
            s.to_ascii_lowercase().as_str(),
            "error" | "fail" | "failed" | "failure"
        ),
        Value::Number(n) => n.as_u64().map(|code| code >= 400).unwrap_or(false),
        _ => false,
    }
}

fn is_status_marker(status: &Value) -> bool {
    match status {
        Value::Bool(_) | Value::Number(_) => true,
        Value::String(s) => matches!(
            s.to_ascii_lowercase().as_str(),
            "success" | "ok" | "error" | "fail" | "failed" | "failure"
        ),
        _ => false,
    }
}

/// An object is an envelope when its `status` is a recognised marker and it
/// carries `data`, or nothing but a `message` beside the status.
///
/// Records that merely have a `status` field (`"unread"`, `"active"`) are
/// payloads, even when they also hold `message` or `data`.
fn is_envelope(value: &Value) -> bool {
    let Value::Object(map) = value else {
        return false;
    };
    match map.get("status") {
        Some(status) if is_status_marker(status) => {
            map.contains_key("data") || map.keys().all(|k| k == "status" || k == "message")
        }
        _ => false,
    }
}

/// Strip the envelope from a response body if there is one
///
/// Error envelopes become [`CashlyError::Api`] carrying the server's message.
/// An envelope without `data` yields `null`.
pub fn unwrap_payload(body: Value) -> CashlyResult<Value> {
    if !is_envelope(&body) {
        return Ok(body);
    }

    let envelope: ApiEnvelope<Value> = serde_json::from_value(body)?;
    if envelope.is_error() {
        let message = envelope
            .message
            .unwrap_or_else(|| format!("request failed with status {}", envelope.status));
        return Err(CashlyError::Api(message));
    }

    Ok(envelope.data.unwrap_or(Value::Null))
}

/// Unwrap, camelize and decode a single record
pub fn decode<T: DeserializeOwned>(body: Value) -> CashlyResult<T> {
    let payload = camelize_keys(unwrap_payload(body)?);
    Ok(serde_json::from_value(payload)?)
}

/// Unwrap, camelize and decode a list, paginated or not
pub fn decode_list<T: DeserializeOwned>(body: Value) -> CashlyResult<Page<T>> {
    match camelize_keys(unwrap_payload(body)?) {
        Value::Array(items) => {
            let results = items
                .into_iter()
                .map(serde_json::from_value)
                .collect::<Result<Vec<T>, _>>()?;
            Ok(Page::single(results))
        }
        page @ Value::Object(_) if page.get("results").is_some() => {
            Ok(serde_json::from_value(page)?)
        }
        other => Err(CashlyError::Shape(format!(
            "expected a list or a paginated object, got {}",
            describe(&other)
        ))),
    }
}

/// Unwrap and camelize without decoding
pub fn normalize(body: Value) -> CashlyResult<Value> {
    Ok(camelize_keys(unwrap_payload(body)?))
}

fn describe(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object without results",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Deserialize, PartialEq)]
    #[serde(rename_all = "camelCase")]
    struct Goal {
        goal_id: u32,
        target_amount: f64,
        #[serde(default)]
        is_completed: bool,
    }

    #[test]
    fn test_unwrap_envelope() {
        let body = json!({"status": "success", "data": {"goal_id": 1}, "message": "ok"});
        assert_eq!(unwrap_payload(body).unwrap(), json!({"goal_id": 1}));
    }

    #[test]
    fn test_bare_payload_passes_through() {
        let body = json!({"goal_id": 1, "status": "active"});
        assert_eq!(unwrap_payload(body.clone()).unwrap(), body);
    }

    #[test]
    fn test_record_with_status_and_message_is_not_an_envelope() {
        let body = json!({
            "id": 9,
            "type": "budget_alert",
            "status": "unread",
            "message": "Over budget"
        });
        assert_eq!(unwrap_payload(body.clone()).unwrap(), body);
        assert_eq!(
            normalize(body).unwrap(),
            json!({"id": 9, "type": "budget_alert", "status": "unread", "message": "Over budget"})
        );
    }

    #[test]
    fn test_record_with_status_and_data_is_not_an_envelope() {
        let body = json!({"status": "unread", "message": "Sync done", "data": {"account_id": 2}});
        assert_eq!(unwrap_payload(body.clone()).unwrap(), body);
    }

    #[test]
    fn test_unknown_status_with_message_only_is_payload() {
        let body = json!({"status": "pending", "message": "Awaiting review"});
        assert_eq!(unwrap_payload(body.clone()).unwrap(), body);
    }

    #[test]
    fn test_error_envelope() {
        let body = json!({"status": "error", "data": null, "message": "Goal not found"});
        let err = unwrap_payload(body).unwrap_err();
        assert!(err.is_api());
        assert_eq!(err.to_string(), "API error: Goal not found");
    }

    #[test]
    fn test_error_envelope_variants() {
        assert!(unwrap_payload(json!({"status": false, "message": "nope"})).is_err());
        assert!(unwrap_payload(json!({"status": 404, "data": null})).is_err());
        assert!(unwrap_payload(json!({"status": 200, "data": 5})).is_ok());
    }

    #[test]
    fn test_error_envelope_without_message() {
        let err = unwrap_payload(json!({"status": "fail", "data": null})).unwrap_err();
        assert_eq!(err.to_string(), "API error: request failed with status \"fail\"");
    }

    #[test]
    fn test_envelope_without_data_is_null() {
        let body = json!({"status": "success", "message": "deleted"});
        assert_eq!(unwrap_payload(body).unwrap(), Value::Null);
    }

    #[test]
    fn test_decode_record() {
        let body = json!({
            "status": "success",
            "data": {"goal_id": 3, "target_amount": 2500.0, "is_completed": true}
        });
        let goal: Goal = decode(body).unwrap();
        assert_eq!(
            goal,
            Goal {
                goal_id: 3,
                target_amount: 2500.0,
                is_completed: true
            }
        );
    }

    #[test]
    fn test_decode_list_paginated() {
        let body = json!({
            "results": [{"goal_id": 1, "target_amount": 10.0}],
            "next": "https://api.example.com/goals?page=2",
            "previous": null,
            "count": 11
        });
        let page: Page<Goal> = decode_list(body).unwrap();
        assert_eq!(page.results.len(), 1);
        assert!(page.has_next());
        assert!(!page.has_previous());
        assert_eq!(page.count, Some(11));
    }

    #[test]
    fn test_decode_list_enveloped_page() {
        let body = json!({
            "status": "success",
            "data": {"results": [], "next": null, "previous": "p1"}
        });
        let page: Page<Goal> = decode_list(body).unwrap();
        assert!(page.results.is_empty());
        assert!(page.has_previous());
    }

    #[test]
    fn test_decode_list_bare_array() {
        let body = json!([
            {"goal_id": 1, "target_amount": 10.0},
            {"goal_id": 2, "target_amount": 20.0}
        ]);
        let page: Page<Goal> = decode_list(body).unwrap();
        assert_eq!(page.results[1].goal_id, 2);
        assert_eq!(page.count, Some(2));
        assert!(!page.has_next());
    }

    #[test]
    fn test_decode_list_wrong_shape() {
        let err = decode_list::<Goal>(json!({"goal_id": 1})).unwrap_err();
        assert!(matches!(err, CashlyError::Shape(_)));
    }

    #[test]
    fn test_normalize() {
        let body = json!({"status": "ok", "data": {"net_worth": 100}});
        assert_eq!(normalize(body).unwrap(), json!({"netWorth": 100}));
    }
}
