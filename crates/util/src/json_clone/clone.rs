use serde_json::Value;

/// Creates a fully independent deep copy of a JSON value.
///
/// `Value` is an owned tree, so this is `Value::clone`. It stays a named
/// helper so the snapshot step sits next to `deep_equal`, its counterpart in
/// the diff.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use glue_util::json_clone::clone;
///
/// let mut live = json!({"list": [1, 2, 3]});
/// let snapshot = clone(&live);
/// live["list"][0] = json!(9);
/// assert_eq!(snapshot, json!({"list": [1, 2, 3]}));
/// ```
pub fn clone(value: &Value) -> Value {
    value.clone()
}
