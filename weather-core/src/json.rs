//! Presence-checked traversal of upstream payloads.
//!
//! CWA responses are treated as untrusted trees: every step returns `Option`
//! so callers decide explicitly whether a missing node drops a record or
//! becomes an unavailable field.

use serde_json::Value;

/// Object member lookup. `None` if `value` is not an object or lacks `key`.
pub fn field<'a>(value: &'a Value, key: &str) -> Option<&'a Value> {
    value.as_object()?.get(key)
}

/// Walks nested object members, e.g. `path(eq, &["earthquakeInfo", "depth", "value"])`.
pub fn path<'a>(value: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().try_fold(value, |node, key| field(node, key))
}

/// Scalar as display text. Numbers are rendered the way JSON spells them;
/// `null`, objects and arrays have no text.
pub fn text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// `text` of a nested member.
pub fn text_at(value: &Value, keys: &[&str]) -> Option<String> {
    path(value, keys).and_then(text)
}

/// Array member as a slice; absent or non-array members read as empty.
pub fn list<'a>(value: &'a Value, keys: &[&str]) -> &'a [Value] {
    path(value, keys)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// First entry of `elements` whose `elementName` equals `name` exactly.
pub fn element_named<'a>(elements: &'a [Value], name: &str) -> Option<&'a Value> {
    elements
        .iter()
        .find(|el| field(el, "elementName").and_then(Value::as_str) == Some(name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn path_stops_at_first_missing_step() {
        let v = json!({ "a": { "b": { "c": 1 } } });

        assert_eq!(path(&v, &["a", "b", "c"]), Some(&json!(1)));
        assert_eq!(path(&v, &["a", "x", "c"]), None);
        assert_eq!(path(&json!("scalar"), &["a"]), None);
    }

    #[test]
    fn text_renders_numbers_verbatim() {
        assert_eq!(text(&json!("多雲")).as_deref(), Some("多雲"));
        assert_eq!(text(&json!(4.5)).as_deref(), Some("4.5"));
        assert_eq!(text(&json!(12)).as_deref(), Some("12"));
        assert_eq!(text(&Value::Null), None);
        assert_eq!(text(&json!({})), None);
    }

    #[test]
    fn list_of_missing_member_is_empty() {
        let v = json!({ "records": { "location": "not-a-list" } });

        assert!(list(&v, &["records", "location"]).is_empty());
        assert!(list(&v, &["records", "missing"]).is_empty());
    }

    #[test]
    fn element_named_requires_exact_match() {
        let elements = vec![
            json!({ "elementName": "MinT" }),
            json!({ "elementName": "Wx" }),
            json!({ "noName": true }),
        ];

        assert_eq!(element_named(&elements, "Wx"), Some(&elements[1]));
        assert_eq!(element_named(&elements, "wx"), None);
        assert_eq!(element_named(&elements, "MaxT"), None);
    }
}
