//! Change notifier.
//!
//! Compares the pre-mutation snapshot with a fresh copy of the target and
//! dispatches to the observers whose values differ. Three passes run in
//! order:
//!
//! 1. every specific key in the registry, not only keys near the mutated
//!    path, since `swap` or shared structure can change any registered path;
//! 2. generic keys for each bracket prefix of the mutated path
//!    (`list[3].done` reaches `list[]` with index 3);
//! 3. generic keys at or below the mutated path, compared element by
//!    element over the longer of the old and new arrays. Filter and sort
//!    walk the indices from the top down.
//!
//! Callbacks run synchronously. The first error stops the pass and is
//! returned from the mutating call.

use glue_path::{generic_base, get, index_prefixes, is_path_prefix};
use glue_util::{clone, deep_equal_opt};
use serde_json::Value;
use tracing::trace;

use super::Glue;
use crate::error::GlueError;
use crate::message::{Message, Operation};

impl Glue {
    pub(crate) fn notify(
        &mut self,
        operation: Operation,
        paths: &[&str],
        before: &Value,
        reverse: bool,
    ) -> Result<(), GlueError> {
        if self.registry.is_empty() {
            return Ok(());
        }
        let current = clone(&self.target);

        for key in self.registry.specific_paths() {
            if deep_equal_opt(get(before, &key), get(&current, &key)) {
                continue;
            }
            self.dispatch(&key, operation, &key, None)?;
        }

        for path in paths {
            for prefix in index_prefixes(path) {
                if !self.registry.has_generic(&prefix.generic) {
                    continue;
                }
                if deep_equal_opt(get(before, &prefix.specific), get(&current, &prefix.specific)) {
                    continue;
                }
                self.dispatch(&prefix.generic, operation, &prefix.specific, Some(prefix.index))?;
            }

            let nested: Vec<String> = self
                .registry
                .generic_paths()
                .into_iter()
                .filter(|key| is_path_prefix(path, key))
                .collect();
            for key in nested {
                let base = generic_base(&key);
                let old = elements(before, base);
                let new = elements(&current, base);
                let max_range = old.len().max(new.len());
                let indices: Vec<usize> = if reverse {
                    (0..max_range).rev().collect()
                } else {
                    (0..max_range).collect()
                };
                for index in indices {
                    if deep_equal_opt(old.get(index), new.get(index)) {
                        continue;
                    }
                    let element = format!("{base}[{index}]");
                    self.dispatch(&key, operation, &element, Some(index))?;
                }
            }
        }
        Ok(())
    }

    /// Call the observers on `key` that accept `operation`, each with the
    /// live value at `value_path`.
    fn dispatch(
        &mut self,
        key: &str,
        operation: Operation,
        value_path: &str,
        index: Option<usize>,
    ) -> Result<(), GlueError> {
        for observer in self.registry.observers_for(key, operation) {
            let message = Message {
                operation,
                value: get(&self.target, value_path).cloned(),
                index,
            };
            trace!(key, index, operation = %operation, "dispatching change");
            (observer.callback)(self, &observer.context, &message)?;
        }
        Ok(())
    }
}

fn elements<'a>(root: &'a Value, path: &str) -> &'a [Value] {
    match get(root, path) {
        Some(Value::Array(arr)) => arr,
        _ => &[],
    }
}
