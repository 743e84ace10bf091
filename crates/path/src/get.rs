use serde_json::Value;

use crate::parser::PathParser;
use crate::types::Segment;
use crate::util::parse_index;

/// Get a value from a JSON document by path string.
///
/// Returns `None` if the path is malformed or any link along it is missing.
/// Never panics.
///
/// # Example
///
/// ```
/// use glue_path::get;
/// use serde_json::json;
///
/// let doc = json!({"foo": {"bar": [10, 20]}});
/// assert_eq!(get(&doc, "foo.bar[1]"), Some(&json!(20)));
/// assert_eq!(get(&doc, "foo.baz.qux"), None);
/// assert_eq!(get(&doc, "*"), Some(&doc));
/// ```
pub fn get<'a>(root: &'a Value, path: &str) -> Option<&'a Value> {
    let segments = PathParser::parse(path).ok()?;
    get_segments(root, &segments)
}

/// Get a mutable reference to a value in a JSON document by path string.
pub fn get_mut<'a>(root: &'a mut Value, path: &str) -> Option<&'a mut Value> {
    let segments = PathParser::parse(path).ok()?;
    get_segments_mut(root, &segments)
}

/// Get a value from a JSON document by parsed segments.
pub fn get_segments<'a>(root: &'a Value, segments: &[Segment]) -> Option<&'a Value> {
    let mut current = root;
    for segment in segments {
        current = match (current, segment) {
            (Value::Object(map), Segment::Key(key)) => map.get(key)?,
            (Value::Object(map), Segment::Index(idx)) => map.get(&idx.to_string())?,
            (Value::Array(arr), Segment::Index(idx)) => arr.get(*idx)?,
            (Value::Array(arr), Segment::Key(key)) => arr.get(parse_index(key)?)?,
            _ => return None,
        };
    }
    Some(current)
}

/// Get a mutable reference to a value by parsed segments.
pub fn get_segments_mut<'a>(root: &'a mut Value, segments: &[Segment]) -> Option<&'a mut Value> {
    let mut current = root;
    for segment in segments {
        current = match (current, segment) {
            (Value::Object(map), Segment::Key(key)) => map.get_mut(key)?,
            (Value::Object(map), Segment::Index(idx)) => map.get_mut(&idx.to_string())?,
            (Value::Array(arr), Segment::Index(idx)) => arr.get_mut(*idx)?,
            (Value::Array(arr), Segment::Key(key)) => arr.get_mut(parse_index(key)?)?,
            _ => return None,
        };
    }
    Some(current)
}
