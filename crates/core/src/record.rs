//! Borrowed, schema-less views over API response records.
//!
//! Upstream responses are plain JSON objects with no guaranteed shape. A
//! [`Record`] never fails on lookup: a missing key, a `null`, or a value of the
//! wrong type all degrade to a placeholder when rendered.

use std::fmt;

use serde_json::{Map, Value};

/// Text rendered in place of any absent field
pub const PLACEHOLDER: &str = "N/A";

/// A read-only view over a JSON object that treats everything else as empty
#[derive(Clone, Copy, Debug, Default)]
pub struct Record<'a> {
    map: Option<&'a Map<String, Value>>,
}

impl<'a> Record<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            map: value.as_object(),
        }
    }

    /// Key presence, whatever the value is (including `null`)
    pub fn contains(&self, key: &str) -> bool {
        self.map.is_some_and(|map| map.contains_key(key))
    }

    pub fn get(&self, key: &str) -> Option<&'a Value> {
        self.map.and_then(|map| map.get(key))
    }

    /// Field rendered as [`PLACEHOLDER`] when absent
    pub fn field(&self, key: &str) -> Field<'a> {
        self.field_or(key, PLACEHOLDER)
    }

    pub fn field_or(&self, key: &str, fallback: &'static str) -> Field<'a> {
        Field {
            value: self.get(key),
            fallback,
        }
    }

    /// Child view; absent or non-object children are empty
    pub fn nested(&self, key: &str) -> Record<'a> {
        Record {
            map: self.get(key).and_then(Value::as_object),
        }
    }

    pub fn is_truthy(&self, key: &str) -> bool {
        self.get(key).is_some_and(is_truthy)
    }

    /// Child views over a JSON array, in order. Anything but an array yields nothing.
    pub fn items(&self, key: &str) -> impl Iterator<Item = Record<'a>> + use<'a> {
        self.get(key)
            .and_then(Value::as_array)
            .into_iter()
            .flatten()
            .map(Record::new)
    }
}

/// A single looked-up value paired with the text to show when it is missing
#[derive(Clone, Copy, Debug)]
pub struct Field<'a> {
    value: Option<&'a Value>,
    fallback: &'static str,
}

impl Field<'_> {
    /// Whether rendering will fall back to the placeholder
    pub fn is_missing(&self) -> bool {
        matches!(self.value, None | Some(Value::Null))
    }
}

impl fmt::Display for Field<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            None | Some(Value::Null) => f.write_str(self.fallback),
            Some(Value::String(s)) => f.write_str(s),
            Some(Value::Bool(true)) => f.write_str("True"),
            Some(Value::Bool(false)) => f.write_str("False"),
            // numbers as written, containers as compact JSON
            Some(other) => write!(f, "{other}"),
        }
    }
}

/// Loose truthiness: `false`, `null`, zero, and empty strings/arrays/objects are false
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_field_renders_placeholder() {
        let data = json!({"a": "x"});
        let record = Record::new(&data);
        assert_eq!(record.field("b").to_string(), "N/A");
        assert_eq!(record.field_or("b", "unknown").to_string(), "unknown");
        assert!(record.field("b").is_missing());
    }

    #[test]
    fn test_null_is_treated_as_missing() {
        let data = json!({"state": null});
        let record = Record::new(&data);
        assert!(record.contains("state"));
        assert_eq!(record.field("state").to_string(), "N/A");
    }

    #[test]
    fn test_scalar_rendering() {
        let data = json!({
            "s": "hello",
            "i": 100,
            "f": 1.5,
            "t": true,
            "n": false,
        });
        let record = Record::new(&data);
        assert_eq!(record.field("s").to_string(), "hello");
        assert_eq!(record.field("i").to_string(), "100");
        assert_eq!(record.field("f").to_string(), "1.5");
        assert_eq!(record.field("t").to_string(), "True");
        assert_eq!(record.field("n").to_string(), "False");
    }

    #[test]
    fn test_container_rendering_is_compact_json() {
        let data = json!({"o": {"k": [1, "two"]}});
        let record = Record::new(&data);
        assert_eq!(record.field("o").to_string(), r#"{"k":[1,"two"]}"#);
    }

    #[test]
    fn test_non_object_is_empty_view() {
        let data = json!("just a string");
        let record = Record::new(&data);
        assert!(!record.contains("anything"));
        assert_eq!(record.field("anything").to_string(), "N/A");
    }

    #[test]
    fn test_nested_defaults_to_empty() {
        let data = json!({"request": "oops", "response": {"state": "done"}});
        let record = Record::new(&data);
        assert!(record.nested("request").field("action").is_missing());
        assert!(!record.nested("request").contains("action"));
        assert!(record.nested("missing").field("state").is_missing());
        assert_eq!(record.nested("response").field("state").to_string(), "done");
    }

    #[test]
    fn test_truthiness() {
        for falsy in [json!(null), json!(false), json!(0), json!(0.0), json!(""), json!([]), json!({})] {
            assert!(!is_truthy(&falsy), "{falsy} should be falsy");
        }
        for truthy in [json!(true), json!(1), json!(-0.5), json!("no"), json!([0]), json!({"a": 1})] {
            assert!(is_truthy(&truthy), "{truthy} should be truthy");
        }
    }

    #[test]
    fn test_items_keeps_order_and_skips_non_arrays() {
        let data = json!({
            "items": [{"id": "a"}, 7, {"id": "b"}],
            "not_items": {"id": "c"},
        });
        let record = Record::new(&data);
        let ids: Vec<String> = record
            .items("items")
            .map(|item| item.field("id").to_string())
            .collect();
        assert_eq!(ids, vec!["a", "N/A", "b"]);
        assert_eq!(record.items("not_items").count(), 0);
        assert_eq!(record.items("missing").count(), 0);
    }
}
