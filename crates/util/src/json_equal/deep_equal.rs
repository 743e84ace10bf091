use serde_json::Value;

/// Performs a deep equality check between two JSON values.
///
/// Arrays are equal when they have the same length and pairwise equal
/// elements. Objects are equal when they have the same key set and equal
/// values under every key; key order is irrelevant. Values of different
/// types are never equal, so `0`, `false`, `""` and `null` are all distinct.
///
/// `serde_json` numbers cannot hold NaN, so numeric equality needs no NaN
/// special case.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use glue_util::json_equal::deep_equal;
///
/// assert!(deep_equal(&json!({"a": [1, 2]}), &json!({"a": [1, 2]})));
/// assert!(!deep_equal(&json!({"a": [1, 2]}), &json!({"a": [2, 1]})));
/// ```
pub fn deep_equal(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => number_equal(x, y),
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| deep_equal(x, y))
        }
        (Value::Object(xs), Value::Object(ys)) => {
            if xs.len() != ys.len() {
                return false;
            }
            xs.iter().all(|(key, x)| match ys.get(key) {
                Some(y) => deep_equal(x, y),
                None => false,
            })
        }
        // Remaining scalars compare structurally; mixed kinds never match.
        _ => a == b,
    }
}

/// Deep equality over possibly absent values.
///
/// Two absent values are equal; an absent value never equals a present one,
/// not even `null`.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use glue_util::json_equal::deep_equal_opt;
///
/// assert!(deep_equal_opt(None, None));
/// assert!(!deep_equal_opt(None, Some(&json!(null))));
/// ```
pub fn deep_equal_opt(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => deep_equal(a, b),
        _ => false,
    }
}

// `1` and `1.0` are the same JavaScript number; serde_json keeps them apart.
fn number_equal(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    if a == b {
        return true;
    }
    match (a.as_f64(), b.as_f64()) {
        (Some(x), Some(y)) => x == y,
        _ => false,
    }
}
