//! Errors and limits for glue paths.

use thiserror::Error;

/// Maximum allowed path string length in bytes.
pub const MAX_PATH_LENGTH: usize = 4096;

/// Maximum allowed number of segments in a path.
pub const MAX_PATH_DEPTH: usize = 256;

/// Largest run of `null`s a write past the end of an array may open up.
pub const MAX_ARRAY_GAP: usize = 1024;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("empty path segment at byte {0}")]
    EmptySegment(usize),
    #[error("unexpected character {ch:?} at byte {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("unexpected end of path")]
    UnexpectedEnd,
    #[error("invalid array index at byte {0}")]
    InvalidIndex(usize),
    #[error("wildcard `[]` is only allowed at the end of an observer key")]
    Wildcard,
    #[error("path too long")]
    PathTooLong,
    #[error("the root path has no parent container")]
    Root,
    #[error("no container at `{0}`")]
    MissingContainer(String),
    #[error("value at `{0}` cannot hold the addressed key")]
    NotAContainer(String),
    #[error("index {index} is too far past the end of an array of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
}

/// Validate the raw length of a path string.
///
/// # Example
///
/// ```
/// use glue_path::validate_path_length;
///
/// validate_path_length("a.b[0]").unwrap();
/// validate_path_length(&"a".repeat(5000)).unwrap_err();
/// ```
pub fn validate_path_length(path: &str) -> Result<(), PathError> {
    if path.len() > MAX_PATH_LENGTH {
        return Err(PathError::PathTooLong);
    }
    Ok(())
}

/// Validate the segment count of a parsed path.
pub fn validate_path_depth(depth: usize) -> Result<(), PathError> {
    if depth > MAX_PATH_DEPTH {
        return Err(PathError::PathTooLong);
    }
    Ok(())
}
