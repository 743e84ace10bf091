use serde_json::Value;

/// Check if a JSON value has no members.
///
/// Empty arrays, empty objects and the empty string are empty, and so are
/// `null`, numbers and booleans, which have no enumerable members at all.
///
/// # Examples
///
/// ```
/// use glue_util::is_empty;
/// use serde_json::json;
///
/// assert!(is_empty(&json!({})));
/// assert!(is_empty(&json!(42)));
/// assert!(!is_empty(&json!([0])));
/// assert!(!is_empty(&json!("a")));
/// ```
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Object(map) => map.is_empty(),
        Value::Array(arr) => arr.is_empty(),
        Value::String(s) => s.is_empty(),
        Value::Null | Value::Bool(_) | Value::Number(_) => true,
    }
}
