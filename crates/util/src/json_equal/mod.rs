//! Structural equality over JSON values, present or absent.

mod deep_equal;

pub use deep_equal::{deep_equal, deep_equal_opt};
