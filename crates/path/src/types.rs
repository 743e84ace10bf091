//! Type definitions for glue paths.

use std::fmt;

/// A single step of a parsed path.
///
/// `Key` comes from a dotted identifier, `Index` from a bracketed integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
    Key(String),
    Index(usize),
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Key(key) => f.write_str(key),
            Segment::Index(idx) => write!(f, "[{idx}]"),
        }
    }
}

/// The last step of a path that is being written through.
///
/// Produced by [`split_for_write`](crate::split_for_write): whatever follows
/// the rightmost `.` is a property, whatever sits in the rightmost `[n]` is an
/// index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LeafKey {
    Property(String),
    Index(usize),
}

impl LeafKey {
    /// Returns the leaf as a path segment.
    pub fn to_segment(&self) -> Segment {
        match self {
            LeafKey::Property(key) => Segment::Key(key.clone()),
            LeafKey::Index(idx) => Segment::Index(*idx),
        }
    }
}

/// A prefix of a path that ends at a bracket index.
///
/// For `list[2].name` the only prefix is
/// `{ specific: "list[2]", generic: "list[]", index: 2 }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexPrefix {
    /// The prefix itself, e.g. `list[2]`.
    pub specific: String,
    /// The prefix with its final index replaced by the wildcard, e.g. `list[]`.
    pub generic: String,
    /// The final index of the prefix.
    pub index: usize,
}
