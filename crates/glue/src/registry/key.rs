//! Observer key grammar.
//!
//! ```text
//! keys       := key ("," key)*
//! key        := path [":" operations]
//! operations := name (whitespace name)*
//! ```
//!
//! `"user.name, list[]:push pop"` registers `user.name` for every operation
//! and `list[]` for `push` and `pop` only.

use std::collections::BTreeSet;

use glue_path::{is_generic, normalize_key, PathError};

use crate::error::GlueError;
use crate::message::Operation;

/// One parsed entry of an observer key string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObserverKey {
    /// Normalized path; the root is `""`, generic keys keep their `[]`.
    pub path: String,
    pub operations: BTreeSet<Operation>,
}

impl ObserverKey {
    pub fn is_generic(&self) -> bool {
        is_generic(&self.path)
    }
}

/// Split a comma-separated key string into normalized keys.
///
/// A lone `""` (or `"*"`) observes the root. Inside a list every piece must
/// name a path, so `"a,"` and `"a,,b"` are rejected rather than quietly
/// registering a root observer.
pub fn parse_keys(keys: &str) -> Result<Vec<ObserverKey>, GlueError> {
    if !keys.contains(',') {
        return Ok(vec![parse_key(keys)?]);
    }
    let mut offset = 0;
    let mut out = Vec::new();
    for piece in keys.split(',') {
        let path = piece.split_once(':').map_or(piece, |(path, _)| path);
        if path.trim().is_empty() {
            return Err(PathError::EmptySegment(offset).into());
        }
        out.push(parse_key(piece)?);
        offset += piece.len() + 1;
    }
    Ok(out)
}

fn parse_key(key: &str) -> Result<ObserverKey, GlueError> {
    let (path, operations) = match key.split_once(':') {
        Some((path, operations)) => (path, operations),
        None => (key, ""),
    };
    let operations = operations
        .split_whitespace()
        .map(str::parse)
        .collect::<Result<BTreeSet<Operation>, _>>()?;
    Ok(ObserverKey {
        path: normalize_key(path.trim())?,
        operations,
    })
}
