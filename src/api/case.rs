//! Key case conversion for API payloads
//!
//! The backend speaks snake_case; view models use camelCase.

use serde_json::{Map, Value};

/// Convert a snake_case identifier to camelCase
///
/// Leading underscores are kept, other underscores are removed and the
/// character after them is uppercased. Identifiers that contain no inner
/// underscore come back unchanged.
pub fn snake_to_camel(key: &str) -> String {
    let body = key.trim_start_matches('_');
    let prefix = &key[..key.len() - body.len()];

    let mut out = String::with_capacity(key.len());
    out.push_str(prefix);

    let mut upper_next = false;
    for c in body.chars() {
        if c == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(c.to_uppercase());
            upper_next = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// Recursively camelize every object key in a JSON value
///
/// Only keys are rewritten; string values are left alone. When two keys map
/// to the same name (`account_id` and `accountId`), the key that was already
/// in camelCase keeps its value.
pub fn camelize_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => {
            let mut converted = Map::with_capacity(map.len());
            for (key, v) in map {
                let camel = snake_to_camel(&key);
                if camel != key && converted.contains_key(&camel) {
                    continue;
                }
                converted.insert(camel, camelize_keys(v));
            }
            Value::Object(converted)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(camelize_keys).collect()),
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_snake_to_camel() {
        assert_eq!(snake_to_camel("account_id"), "accountId");
        assert_eq!(snake_to_camel("created_at_utc"), "createdAtUtc");
        assert_eq!(snake_to_camel("amount"), "amount");
        assert_eq!(snake_to_camel("accountId"), "accountId");
    }

    #[test]
    fn test_snake_to_camel_odd_underscores() {
        assert_eq!(snake_to_camel("_private_field"), "_privateField");
        assert_eq!(snake_to_camel("double__under"), "doubleUnder");
        assert_eq!(snake_to_camel("trailing_"), "trailing");
        assert_eq!(snake_to_camel("address_line_1"), "addressLine1");
        assert_eq!(snake_to_camel(""), "");
    }

    #[test]
    fn test_camelize_nested() {
        let raw = json!({
            "account_id": 7,
            "plaid_item": {"institution_name": "First Bank"},
            "recent_transactions": [
                {"merchant_name": "Coffee_Shop", "amount_cents": 450}
            ]
        });

        let converted = camelize_keys(raw);
        assert_eq!(
            converted,
            json!({
                "accountId": 7,
                "plaidItem": {"institutionName": "First Bank"},
                "recentTransactions": [
                    {"merchantName": "Coffee_Shop", "amountCents": 450}
                ]
            })
        );
    }

    #[test]
    fn test_camelize_scalars_unchanged() {
        assert_eq!(camelize_keys(json!("snake_value")), json!("snake_value"));
        assert_eq!(camelize_keys(json!(null)), json!(null));
        assert_eq!(camelize_keys(json!([1, 2])), json!([1, 2]));
    }

    #[test]
    fn test_camel_key_wins_collision() {
        let snake_first = json!({"account_id": 1, "accountId": 2});
        assert_eq!(camelize_keys(snake_first), json!({"accountId": 2}));

        let mut camel_first = Map::new();
        camel_first.insert("accountId".into(), json!(2));
        camel_first.insert("account_id".into(), json!(1));
        assert_eq!(camelize_keys(Value::Object(camel_first)), json!({"accountId": 2}));
    }
}
