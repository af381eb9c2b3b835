//! URL-form encoding of parameter maps.
//!
//! The API accepts PHP-style bracket notation for nested values:
//! `{"a": {"b": 1}}` encodes as `a[b]=1` and `{"a": [1, 2]}` as
//! `a[0]=1&a[1]=2`, recursively.

use serde_json::{Map, Value};
use url::form_urlencoded::Serializer;

/// Encodes a parameter map as a URL-encoded form string.
///
/// Null values are skipped entirely; booleans encode as `1`/`0`.
pub(crate) fn form_encode(params: &Map<String, Value>) -> String {
    let mut serializer = Serializer::new(String::new());
    for (key, value) in params {
        append_value(&mut serializer, key, value);
    }
    serializer.finish()
}

fn append_value(serializer: &mut Serializer<'_, String>, key: &str, value: &Value) {
    match value {
        Value::Null => {}
        Value::Bool(flag) => {
            serializer.append_pair(key, if *flag { "1" } else { "0" });
        }
        Value::Number(number) => {
            serializer.append_pair(key, &number.to_string());
        }
        Value::String(text) => {
            serializer.append_pair(key, text);
        }
        Value::Array(items) => {
            for (index, item) in items.iter().enumerate() {
                append_value(serializer, &format!("{key}[{index}]"), item);
            }
        }
        Value::Object(map) => {
            for (name, nested) in map {
                append_value(serializer, &format!("{key}[{name}]"), nested);
            }
        }
    }
}
