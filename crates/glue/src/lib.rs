//! Observable JSON state.
//!
//! A [`Glue`] owns a `serde_json::Value` and a registry of observers keyed
//! by path. Mutations go through methods (`set`, `remove`, `swap`, `push`,
//! `pop`, `insert`, `filter`, `sort_by`) that diff a before/after snapshot
//! and call only the observers whose values changed.
//!
//! Observer keys:
//! - `user.name` observes one exact path;
//! - `list[]` observes every element of `list`, messages carry the index;
//! - `a, b` registers both keys;
//! - `a:set push` only hears `set` and `push`.

mod bus;
mod error;
mod glue;
mod message;
pub mod registry;

pub use bus::EventBus;
pub use error::{BoxError, GlueError};
pub use glue::Glue;
pub use message::{Message, Operation};
pub use registry::{Context, ObserverKey};
