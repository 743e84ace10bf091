//! Sorting utilities.
//!
//! Provides a stable keyed sort with a total order over partially ordered
//! keys.

mod sort_by;

pub use sort_by::{compare_keys, sort_by, sort_by_in_place};
