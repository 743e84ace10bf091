//! Writing through paths.
//!
//! Writes never create intermediate structure: the container addressed by
//! everything but the last segment must already exist.

use serde_json::Value;

use crate::format_path;
use crate::get::get_mut;
use crate::parser::PathParser;
use crate::types::{LeafKey, Segment};
use crate::util::parse_index;
use crate::validate::{PathError, MAX_ARRAY_GAP};

/// Split a path into its container path and leaf key.
///
/// The split happens at whichever comes last of the final `.` and the final
/// `[`. The root path has nothing to split and yields [`PathError::Root`].
///
/// # Example
///
/// ```
/// use glue_path::{split_for_write, LeafKey};
///
/// assert_eq!(
///     split_for_write("a.b[2]").unwrap(),
///     ("a.b".to_string(), LeafKey::Index(2))
/// );
/// assert_eq!(
///     split_for_write("a[0].name").unwrap(),
///     ("a[0]".to_string(), LeafKey::Property("name".to_string()))
/// );
/// assert_eq!(
///     split_for_write("top").unwrap(),
///     ("".to_string(), LeafKey::Property("top".to_string()))
/// );
/// ```
pub fn split_for_write(path: &str) -> Result<(String, LeafKey), PathError> {
    let segments = PathParser::parse(path)?;
    let (leaf, parent) = segments.split_last().ok_or(PathError::Root)?;
    let leaf = match leaf {
        Segment::Key(key) => LeafKey::Property(key.clone()),
        Segment::Index(idx) => LeafKey::Index(*idx),
    };
    Ok((format_path(parent), leaf))
}

/// Assign `value` at `path`, returning the value it replaced.
///
/// Writing the root path replaces the whole document. Writing an array index
/// equal to the length appends; writing past the end fills the gap with
/// `null`, up to [`MAX_ARRAY_GAP`] of them.
///
/// # Errors
///
/// - [`PathError::MissingContainer`] if the container does not exist
/// - [`PathError::NotAContainer`] if the container cannot hold the leaf key
/// - [`PathError::IndexOutOfBounds`] if the index leaves too large a gap
///
/// # Example
///
/// ```
/// use glue_path::set;
/// use serde_json::json;
///
/// let mut doc = json!({"a": {"b": 1}});
/// assert_eq!(set(&mut doc, "a.b", json!(2)).unwrap(), Some(json!(1)));
/// assert_eq!(doc, json!({"a": {"b": 2}}));
/// assert!(set(&mut doc, "x.y", json!(0)).is_err());
/// ```
pub fn set(root: &mut Value, path: &str, value: Value) -> Result<Option<Value>, PathError> {
    let (container_path, leaf) = match split_for_write(path) {
        Err(PathError::Root) => return Ok(Some(std::mem::replace(root, value))),
        other => other?,
    };
    let container = get_mut(root, &container_path)
        .ok_or_else(|| PathError::MissingContainer(container_path.clone()))?;
    match (container, &leaf) {
        (Value::Object(map), LeafKey::Property(key)) => Ok(map.insert(key.clone(), value)),
        (Value::Object(map), LeafKey::Index(idx)) => Ok(map.insert(idx.to_string(), value)),
        (Value::Array(arr), LeafKey::Index(idx)) => assign_index(arr, *idx, value),
        (Value::Array(arr), LeafKey::Property(key)) => match parse_index(key) {
            Some(idx) => assign_index(arr, idx, value),
            None => Err(PathError::NotAContainer(container_path)),
        },
        _ => Err(PathError::NotAContainer(container_path)),
    }
}

/// Delete the property at `path`, returning its previous value.
///
/// Object keys are removed while keeping the order of the remaining keys.
/// An array element addressed this way is replaced by `null` rather than
/// spliced out, so the indices of its siblings do not move.
///
/// # Example
///
/// ```
/// use glue_path::delete;
/// use serde_json::json;
///
/// let mut doc = json!({"a": 1, "b": 2, "c": 3});
/// assert_eq!(delete(&mut doc, "b").unwrap(), Some(json!(2)));
/// assert_eq!(doc.to_string(), r#"{"a":1,"c":3}"#);
/// ```
pub fn delete(root: &mut Value, path: &str) -> Result<Option<Value>, PathError> {
    let (container_path, leaf) = split_for_write(path)?;
    let container = get_mut(root, &container_path)
        .ok_or_else(|| PathError::MissingContainer(container_path.clone()))?;
    match (container, &leaf) {
        (Value::Object(map), LeafKey::Property(key)) => Ok(map.shift_remove(key)),
        (Value::Object(map), LeafKey::Index(idx)) => Ok(map.shift_remove(&idx.to_string())),
        (Value::Array(arr), LeafKey::Index(idx)) => Ok(clear_index(arr, *idx)),
        (Value::Array(arr), LeafKey::Property(key)) => {
            Ok(parse_index(key).and_then(|idx| clear_index(arr, idx)))
        }
        _ => Err(PathError::NotAContainer(container_path)),
    }
}

fn assign_index(arr: &mut Vec<Value>, idx: usize, value: Value) -> Result<Option<Value>, PathError> {
    if let Some(slot) = arr.get_mut(idx) {
        return Ok(Some(std::mem::replace(slot, value)));
    }
    if idx - arr.len() > MAX_ARRAY_GAP {
        return Err(PathError::IndexOutOfBounds {
            index: idx,
            len: arr.len(),
        });
    }
    arr.resize(idx, Value::Null);
    arr.push(value);
    Ok(None)
}

fn clear_index(arr: &mut [Value], idx: usize) -> Option<Value> {
    arr.get_mut(idx).map(|slot| std::mem::replace(slot, Value::Null))
}
