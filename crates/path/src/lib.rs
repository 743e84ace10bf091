//! Path grammar for glue.
//!
//! Paths address values inside a `serde_json::Value` tree with a compact,
//! JavaScript-like syntax: dotted properties and bracketed indices.
//!
//! ```text
//! ""            the whole document (so is "*")
//! "user.name"   property "name" of property "user"
//! "list[2].id"  property "id" of element 2 of "list"
//! "list[]"      every element of "list" (observer keys only)
//! ```
//!
//! # Example
//!
//! ```
//! use glue_path::{get, normalize_path, parse_path, Segment};
//!
//! let path = parse_path("list[2].id").unwrap();
//! assert_eq!(
//!     path,
//!     vec![
//!         Segment::Key("list".to_string()),
//!         Segment::Index(2),
//!         Segment::Key("id".to_string()),
//!     ]
//! );
//!
//! assert_eq!(normalize_path("*").unwrap(), "");
//!
//! let doc = serde_json::json!({"list": [0, 0, {"id": 7}]});
//! assert_eq!(get(&doc, "list[2].id"), Some(&serde_json::json!(7)));
//! ```

pub mod get;
pub mod parser;
pub mod types;
mod util;
pub mod validate;
pub mod write;

pub use get::{get, get_mut, get_segments, get_segments_mut};
pub use parser::PathParser;
pub use types::{IndexPrefix, LeafKey, Segment};
pub use util::parse_index;
pub use validate::{
    validate_path_depth, validate_path_length, PathError, MAX_ARRAY_GAP, MAX_PATH_DEPTH,
    MAX_PATH_LENGTH,
};
pub use write::{delete, set, split_for_write};

/// Suffix marking a generic (every array element) observer key.
pub const WILDCARD: &str = "[]";

/// Parse a path string into segments.
///
/// The root path (`""` or `"*"`) parses to an empty vec.
pub fn parse_path(path: &str) -> Result<Vec<Segment>, PathError> {
    PathParser::parse(path)
}

/// Format segments back into a path string.
///
/// # Example
///
/// ```
/// use glue_path::{format_path, Segment};
///
/// assert_eq!(format_path(&[]), "");
/// assert_eq!(
///     format_path(&[Segment::Index(0), Segment::Key("a".to_string())]),
///     "[0].a"
/// );
/// ```
pub fn format_path(segments: &[Segment]) -> String {
    let mut out = String::new();
    for segment in segments {
        if let Segment::Key(key) = segment {
            if !out.is_empty() {
                out.push('.');
            }
            out.push_str(key);
        } else {
            out.push_str(&segment.to_string());
        }
    }
    out
}

/// Parse then format a path, giving every spelling of the root the same
/// canonical form (`""`).
pub fn normalize_path(path: &str) -> Result<String, PathError> {
    Ok(format_path(&parse_path(path)?))
}

/// Normalize an observer key, which may end in the wildcard `[]`.
///
/// # Example
///
/// ```
/// use glue_path::normalize_key;
///
/// assert_eq!(normalize_key("*").unwrap(), "");
/// assert_eq!(normalize_key("list[]").unwrap(), "list[]");
/// assert_eq!(normalize_key("[]").unwrap(), "[]");
/// assert!(normalize_key("list[].id").is_err());
/// ```
pub fn normalize_key(key: &str) -> Result<String, PathError> {
    match key.strip_suffix(WILDCARD) {
        Some(base) => {
            let mut out = normalize_path(base)?;
            out.push_str(WILDCARD);
            Ok(out)
        }
        None => normalize_path(key),
    }
}

/// Whether an observer key addresses every element of an array.
pub fn is_generic(key: &str) -> bool {
    key.ends_with(WILDCARD)
}

/// The path of the array a generic key observes: `list[]` gives `list`.
///
/// Non-generic keys are returned unchanged.
pub fn generic_base(key: &str) -> &str {
    key.strip_suffix(WILDCARD).unwrap_or(key)
}

/// Every prefix of `path` that ends at a bracket index, shortest first.
///
/// # Example
///
/// ```
/// use glue_path::{index_prefixes, IndexPrefix};
///
/// let prefixes = index_prefixes("rows[1].cells[4].text");
/// assert_eq!(
///     prefixes,
///     vec![
///         IndexPrefix { specific: "rows[1]".into(), generic: "rows[]".into(), index: 1 },
///         IndexPrefix {
///             specific: "rows[1].cells[4]".into(),
///             generic: "rows[1].cells[]".into(),
///             index: 4,
///         },
///     ]
/// );
/// ```
pub fn index_prefixes(path: &str) -> Vec<IndexPrefix> {
    let Ok(segments) = parse_path(path) else {
        return Vec::new();
    };
    let mut out = Vec::new();
    for (i, segment) in segments.iter().enumerate() {
        if let Segment::Index(index) = segment {
            let parent = format_path(&segments[..i]);
            out.push(IndexPrefix {
                specific: format_path(&segments[..=i]),
                generic: format!("{parent}{WILDCARD}"),
                index: *index,
            });
        }
    }
    out
}

/// Whether `prefix` is `path` itself or one of its ancestors.
///
/// Matches only at segment boundaries, so `arr` prefixes `arr[]` and
/// `arr.x` but not `array[]`. The root path prefixes everything.
///
/// # Example
///
/// ```
/// use glue_path::is_path_prefix;
///
/// assert!(is_path_prefix("arr", "arr[]"));
/// assert!(is_path_prefix("", "anything"));
/// assert!(!is_path_prefix("arr", "array[]"));
/// ```
pub fn is_path_prefix(prefix: &str, path: &str) -> bool {
    if prefix.is_empty() {
        return true;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('.') || rest.starts_with('['),
        None => false,
    }
}
