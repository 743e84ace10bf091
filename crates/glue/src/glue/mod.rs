//! The `Glue` container: an owned JSON target plus its observers.

use serde_json::Value;
use std::rc::Rc;

use crate::error::GlueError;
use crate::message::Message;
use crate::registry::{parse_keys, Callback, Context, ObserverKey, Registry};

mod notify;
mod ops;

/// Observable JSON state.
///
/// Every mutation goes through a method that snapshots the target, mutates
/// it in place and then notifies the observers whose values actually
/// changed. Mutating the target through [`Glue::target_mut`] bypasses
/// notification entirely.
///
/// # Example
///
/// ```
/// use glue::{Glue, Operation};
/// use serde_json::json;
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
///
/// let mut glue = Glue::new(json!({"a": 1}));
/// glue.add_observer_at("a", move |_, _, msg| {
///     sink.borrow_mut().push(msg.clone());
///     Ok(())
/// })
/// .unwrap();
///
/// glue.set("a", json!(2)).unwrap();
/// glue.set("a", json!(2)).unwrap();
///
/// let seen = seen.borrow();
/// assert_eq!(seen.len(), 1);
/// assert_eq!(seen[0].operation, Operation::Set);
/// assert_eq!(seen[0].value, Some(json!(2)));
/// ```
#[derive(Debug)]
pub struct Glue {
    target: Value,
    registry: Registry,
}

impl Glue {
    pub fn new(target: Value) -> Self {
        Self {
            target,
            registry: Registry::new(),
        }
    }

    pub fn target(&self) -> &Value {
        &self.target
    }

    /// Direct mutable access to the target. Changes made here notify nobody.
    pub fn target_mut(&mut self) -> &mut Value {
        &mut self.target
    }

    /// Replace the target without notification, returning the old one.
    pub fn set_target(&mut self, target: Value) -> Value {
        std::mem::replace(&mut self.target, target)
    }

    pub fn into_target(self) -> Value {
        self.target
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Read the value at `path`. Never notifies; `None` when absent.
    pub fn get(&self, path: &str) -> Option<&Value> {
        glue_path::get(&self.target, path)
    }

    /// Read the value at `path` inside an arbitrary `source`.
    pub fn get_from<'a>(source: &'a Value, path: &str) -> Option<&'a Value> {
        glue_path::get(source, path)
    }

    /// Observe every change to the whole target.
    pub fn add_observer<F>(&mut self, callback: F) -> &mut Self
    where
        F: Fn(&mut Glue, &Context, &Message) -> Result<(), GlueError> + 'static,
    {
        self.add_observer_in(Context::Target, callback)
    }

    /// Observe every change to the whole target, under `context`.
    pub fn add_observer_in<F>(&mut self, context: impl Into<Context>, callback: F) -> &mut Self
    where
        F: Fn(&mut Glue, &Context, &Message) -> Result<(), GlueError> + 'static,
    {
        let key = ObserverKey {
            path: String::new(),
            operations: Default::default(),
        };
        self.registry.add(key, Rc::new(callback), context.into());
        self
    }

    /// Observe the keys in `keys`, e.g. `"user.name, list[]:push"`.
    pub fn add_observer_at<F>(&mut self, keys: &str, callback: F) -> Result<&mut Self, GlueError>
    where
        F: Fn(&mut Glue, &Context, &Message) -> Result<(), GlueError> + 'static,
    {
        self.add_observer_with(keys, Context::Target, callback)
    }

    /// Observe the keys in `keys` under `context`.
    ///
    /// Each key gets its own observer record sharing the one callback. The
    /// whole key string is validated before anything is registered.
    pub fn add_observer_with<F>(
        &mut self,
        keys: &str,
        context: impl Into<Context>,
        callback: F,
    ) -> Result<&mut Self, GlueError>
    where
        F: Fn(&mut Glue, &Context, &Message) -> Result<(), GlueError> + 'static,
    {
        let keys = parse_keys(keys)?;
        let callback: Callback = Rc::new(callback);
        let context = context.into();
        for key in keys {
            self.registry.add(key, Rc::clone(&callback), context.clone());
        }
        Ok(self)
    }

    /// Drop every observer.
    pub fn remove_all_observers(&mut self) {
        self.registry.clear();
    }

    /// Remove observers on `keys` regardless of context. Keys with an
    /// operation list (`"a:set"`) only unsubscribe those operations.
    pub fn remove_observers(&mut self, keys: &str) -> Result<(), GlueError> {
        for key in parse_keys(keys)? {
            self.registry.remove(&key, None);
        }
        Ok(())
    }

    /// Remove every observer registered with `context`, under any key.
    pub fn remove_observers_in(&mut self, context: &Context) {
        self.registry.remove_context(context);
    }

    /// Remove observers on `keys` registered with `context`.
    pub fn remove_observers_with(&mut self, keys: &str, context: &Context) -> Result<(), GlueError> {
        for key in parse_keys(keys)? {
            self.registry.remove(&key, Some(context));
        }
        Ok(())
    }

    /// Paths that currently have observers, specific ones first.
    pub fn observed_paths(&self) -> Vec<String> {
        let mut paths = self.registry.specific_paths();
        paths.extend(self.registry.generic_paths());
        paths
    }

    /// Number of observers registered on exactly `key`.
    pub fn observer_count(&self, key: &str) -> usize {
        match glue_path::normalize_key(key) {
            Ok(key) => self.registry.observer_count(&key),
            Err(_) => 0,
        }
    }
}
