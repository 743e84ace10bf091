//! Observer registry.
//!
//! Two insertion-ordered maps: `specific` holds exact paths, `generic` holds
//! keys ending in `[]`. A key never maps to an empty observer list; the entry
//! is dropped as soon as its last observer goes.

use indexmap::IndexMap;

mod key;
mod observer;

pub use key::{parse_keys, ObserverKey};
pub use observer::{Callback, Context, Observer};

use crate::message::Operation;

type ObserverMap = IndexMap<String, Vec<Observer>>;

#[derive(Debug, Default)]
pub struct Registry {
    specific: ObserverMap,
    generic: ObserverMap,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.specific.is_empty() && self.generic.is_empty()
    }

    /// Append an observer for `key`. Observers on one key run in the order
    /// they were added.
    pub fn add(&mut self, key: ObserverKey, callback: Callback, context: Context) {
        let is_generic = key.is_generic();
        let observer = Observer {
            callback,
            context,
            operations: key.operations,
        };
        self.map_mut(is_generic)
            .entry(key.path)
            .or_default()
            .push(observer);
    }

    /// Drop every observer on every key.
    pub fn clear(&mut self) {
        self.specific.clear();
        self.generic.clear();
    }

    /// Remove observers registered under `key`.
    ///
    /// With a `context`, only observers registered with an equal context are
    /// touched. If `key` carries operations, those are subtracted from each
    /// matching observer, which stays registered for whatever remains;
    /// otherwise matching observers are removed outright.
    pub fn remove(&mut self, key: &ObserverKey, context: Option<&Context>) {
        let map = self.map_mut(key.is_generic());
        let Some(observers) = map.get_mut(&key.path) else {
            return;
        };
        observers.retain_mut(|observer| {
            if context.is_some_and(|ctx| *ctx != observer.context) {
                return true;
            }
            if key.operations.is_empty() {
                return false;
            }
            observer.subtract(&key.operations)
        });
        if observers.is_empty() {
            map.shift_remove(&key.path);
        }
    }

    /// Remove every observer registered with `context`, under any key.
    pub fn remove_context(&mut self, context: &Context) {
        for map in [&mut self.specific, &mut self.generic] {
            for observers in map.values_mut() {
                observers.retain(|observer| observer.context != *context);
            }
            map.retain(|_, observers| !observers.is_empty());
        }
    }

    /// Exact paths with at least one observer, in registration order.
    pub fn specific_paths(&self) -> Vec<String> {
        self.specific.keys().cloned().collect()
    }

    /// Generic keys (ending in `[]`) with at least one observer.
    pub fn generic_paths(&self) -> Vec<String> {
        self.generic.keys().cloned().collect()
    }

    pub fn has_generic(&self, key: &str) -> bool {
        self.generic.contains_key(key)
    }

    /// Observers on `key` that listen to `operation`, in registration order.
    ///
    /// Returned by value so dispatch can run while the registry changes.
    pub fn observers_for(&self, key: &str, operation: Operation) -> Vec<Observer> {
        self.map(glue_path::is_generic(key))
            .get(key)
            .map(|observers| {
                observers
                    .iter()
                    .filter(|observer| observer.accepts(operation))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default()
    }

    pub fn observer_count(&self, key: &str) -> usize {
        self.map(glue_path::is_generic(key))
            .get(key)
            .map_or(0, Vec::len)
    }

    fn map(&self, generic: bool) -> &ObserverMap {
        if generic {
            &self.generic
        } else {
            &self.specific
        }
    }

    fn map_mut(&mut self, generic: bool) -> &mut ObserverMap {
        if generic {
            &mut self.generic
        } else {
            &mut self.specific
        }
    }
}
