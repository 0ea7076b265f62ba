//! Form encoding of request parameters.
//!
//! Parameters are JSON objects. They are flattened into
//! `application/x-www-form-urlencoded` pairs the way the Stripe API expects:
//!
//! - `null` values are omitted entirely (no empty key is emitted)
//! - nested objects become `parent[child]=value`
//! - arrays of scalars become `list[]=value`, arrays of objects `list[0][key]=value`
//! - booleans are `true`/`false`
//!
//! Key order follows the input, so identical parameters always encode to
//! identical strings.
//!
//! # Example
//!
//! ```rust
//! use serde_json::json;
//! use stripe_api::clients::{encode_params, to_params};
//!
//! let params = to_params(json!({"count": null, "offset": 5, "sad": false})).unwrap();
//! assert_eq!(encode_params(&params), "offset=5&sad=false");
//!
//! let params = to_params(json!({"card": {"number": "4242", "cvc": null}})).unwrap();
//! assert_eq!(encode_params(&params), "card%5Bnumber%5D=4242");
//! ```

use serde_json::{Map, Value};

use crate::clients::errors::StripeError;

/// Request parameters, in insertion order.
pub type Params = Map<String, Value>;

/// Converts a JSON value into request parameters.
///
/// `null` is treated as "no parameters".
///
/// # Errors
///
/// Returns [`StripeError::InvalidRequest`] if the value is neither an object
/// nor `null`. No request is made in that case.
pub fn to_params(value: Value) -> Result<Params, StripeError> {
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Params::new()),
        other => Err(StripeError::invalid_request(format!(
            "Request parameters must be an object, got {other}"
        ))),
    }
}

/// Merges `extra` into `base`. Keys in `extra` override those in `base`;
/// new keys are appended after the existing ones.
#[must_use]
pub fn merge_params(base: &Params, extra: &Params) -> Params {
    let mut merged = base.clone();
    for (key, value) in extra {
        merged.insert(key.clone(), value.clone());
    }
    merged
}

/// Encodes parameters as a form/query string.
#[must_use]
pub fn encode_params(params: &Params) -> String {
    let mut pairs = Vec::new();
    for (key, value) in params {
        flatten(key.clone(), value, &mut pairs);
    }
    pairs
        .iter()
        .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&")
}

fn flatten(key: String, value: &Value, out: &mut Vec<(String, String)>) {
    match value {
        Value::Null => {}
        Value::Bool(b) => out.push((key, b.to_string())),
        Value::Number(n) => out.push((key, n.to_string())),
        Value::String(s) => out.push((key, s.clone())),
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                if item.is_object() {
                    flatten(format!("{key}[{index}]"), item, out);
                } else {
                    flatten(format!("{key}[]"), item, out);
                }
            }
        }
        Value::Object(map) => {
            for (child, item) in map {
                flatten(format!("{key}[{child}]"), item, out);
            }
        }
    }
}
