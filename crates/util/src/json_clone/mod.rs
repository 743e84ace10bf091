//! Deep copies used for before/after snapshots.

mod clone;

pub use clone::clone;
