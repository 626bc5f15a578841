//! PHP `http_build_query`-compatible serialization of request parameters
//!
//! The Scrinus API expects form-encoded bodies and query strings in the
//! shape PHP produces: nested maps become `parent[key]=value`, sequences
//! become `parent[0]=value&parent[1]=value`, and every key and value is
//! percent-encoded with RFC 3986 rules (space is `%20`, never `+`).
//!
//! Encoding is a pure function of the input. Key order follows the input's
//! iteration order, which `serde_json`'s `preserve_order` feature keeps at
//! insertion order, so repeated calls over the same value yield the same
//! string.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde_json::Value;

/// Everything except RFC 3986 unreserved characters, matching PHP's
/// `rawurlencode`.
const RAW_URLENCODE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Serialize `input` into a URL-encoded query string.
///
/// A bare scalar input is percent-encoded directly and returned without a
/// key. Numeric keys at the top level carry no prefix; see
/// [`build_query_prefixed`] to supply one.
pub fn build_query(input: &Value) -> String {
    build_query_prefixed(input, "")
}

/// Serialize `input`, prefixing top-level numeric (sequence-index) keys
/// with `numeric_prefix`.
pub fn build_query_prefixed(input: &Value, numeric_prefix: &str) -> String {
    encode_value(input, numeric_prefix, "")
}

fn encode_value(input: &Value, numeric_prefix: &str, prefix: &str) -> String {
    match input {
        Value::Object(map) => {
            let parts: Vec<String> = map
                .iter()
                .map(|(key, value)| encode_member(key, value, numeric_prefix, prefix))
                .collect();
            parts.join("&")
        }
        Value::Array(items) => {
            let parts: Vec<String> = items
                .iter()
                .enumerate()
                .map(|(index, value)| {
                    encode_member(&index.to_string(), value, numeric_prefix, prefix)
                })
                .collect();
            parts.join("&")
        }
        scalar => raw_urlencode(&scalar_text(scalar)),
    }
}

fn encode_member(key: &str, value: &Value, numeric_prefix: &str, prefix: &str) -> String {
    let name = if prefix.is_empty() {
        if is_numeric_key(key) {
            format!("{numeric_prefix}{key}")
        } else {
            key.to_string()
        }
    } else {
        format!("{prefix}[{key}]")
    };

    // Empty containers terminate recursion as empty-string leaves.
    if is_populated_container(value) {
        encode_value(value, numeric_prefix, &name)
    } else {
        format!("{}={}", raw_urlencode(&name), raw_urlencode(&leaf_text(value)))
    }
}

fn is_populated_container(value: &Value) -> bool {
    match value {
        Value::Object(map) => !map.is_empty(),
        Value::Array(items) => !items.is_empty(),
        _ => false,
    }
}

fn is_numeric_key(key: &str) -> bool {
    !key.is_empty() && key.bytes().all(|b| b.is_ascii_digit())
}

/// Leaf rendering for values in key=value position. Empty containers
/// collapse to the empty string.
fn leaf_text(value: &Value) -> String {
    match value {
        Value::Object(_) | Value::Array(_) => String::new(),
        scalar => scalar_text(scalar),
    }
}

/// PHP string conversion for scalars: numbers in decimal form, `true` is
/// `1`, `false` and `null` are empty.
fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(true) => "1".to_string(),
        Value::Bool(false) | Value::Null => String::new(),
        Value::Object(_) | Value::Array(_) => String::new(),
    }
}

fn raw_urlencode(input: &str) -> String {
    utf8_percent_encode(input, RAW_URLENCODE).to_string()
}
