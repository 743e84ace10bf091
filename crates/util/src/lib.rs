//! glue-util - collection helpers for glue
//!
//! Pure functions over `serde_json::Value` that the observer engine relies on:
//! deep equality and deep cloning for snapshot diffs, plus the array helpers
//! behind `filter` and `sortBy`.

pub mod collection;
pub mod is_empty;
pub mod json_clone;
pub mod json_equal;
pub mod sort;

// Re-exports for convenience
pub use collection::{difference, filter, map, union};
pub use is_empty::is_empty;
pub use json_clone::clone;
pub use json_equal::{deep_equal, deep_equal_opt};
pub use sort::{compare_keys, sort_by, sort_by_in_place};
