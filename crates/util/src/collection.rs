//! Array helpers over JSON values.
//!
//! JSON arrays are dense, so none of these helpers need a notion of holes:
//! every index below the length holds a value (possibly `null`), and every
//! element is visited.

use serde_json::Value;

use crate::json_equal::deep_equal;

/// Returns the elements for which `predicate` holds, in order.
///
/// # Examples
///
/// ```
/// use glue_util::filter;
/// use serde_json::json;
///
/// let items = [json!(1), json!(null), json!(2)];
/// assert_eq!(filter(&items, |v| !v.is_null()), vec![json!(1), json!(2)]);
/// ```
pub fn filter<F>(items: &[Value], mut predicate: F) -> Vec<Value>
where
    F: FnMut(&Value) -> bool,
{
    items.iter().filter(|item| predicate(*item)).cloned().collect()
}

/// Returns `f` applied to every element, in order.
///
/// # Examples
///
/// ```
/// use glue_util::map;
/// use serde_json::json;
///
/// let items = [json!({"id": 1}), json!({"id": 2})];
/// assert_eq!(map(&items, |v| v["id"].clone()), vec![json!(1), json!(2)]);
/// ```
pub fn map<F>(items: &[Value], f: F) -> Vec<Value>
where
    F: FnMut(&Value) -> Value,
{
    items.iter().map(f).collect()
}

/// Returns the elements of `a` that have no deep-equal counterpart in `b`.
///
/// # Examples
///
/// ```
/// use glue_util::difference;
/// use serde_json::json;
///
/// let a = [json!(1), json!({"x": 1}), json!(3)];
/// let b = [json!({"x": 1})];
/// assert_eq!(difference(&a, &b), vec![json!(1), json!(3)]);
/// ```
pub fn difference(a: &[Value], b: &[Value]) -> Vec<Value> {
    a.iter()
        .filter(|x| !b.iter().any(|y| deep_equal(*x, y)))
        .cloned()
        .collect()
}

/// Returns the elements of `a` followed by those of `b`, dropping any element
/// deep-equal to one already taken.
///
/// # Examples
///
/// ```
/// use glue_util::union;
/// use serde_json::json;
///
/// let a = [json!(1), json!(2), json!(1)];
/// let b = [json!(2), json!(3)];
/// assert_eq!(union(&a, &b), vec![json!(1), json!(2), json!(3)]);
/// ```
pub fn union(a: &[Value], b: &[Value]) -> Vec<Value> {
    let mut out: Vec<Value> = Vec::with_capacity(a.len() + b.len());
    for item in a.iter().chain(b) {
        if !out.iter().any(|seen| deep_equal(seen, item)) {
            out.push(item.clone());
        }
    }
    out
}
