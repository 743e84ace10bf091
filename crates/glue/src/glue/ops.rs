//! Mutating operations.
//!
//! Each one snapshots the target, mutates it in place, then hands the
//! snapshot to the notifier. An empty path (or `*`) addresses the root.

use glue_path::{format_path, normalize_path, parse_path, PathError, Segment};
use glue_util::{clone, sort_by_in_place};
use serde_json::Value;
use tracing::debug;

use super::Glue;
use crate::error::GlueError;
use crate::message::Operation;

impl Glue {
    /// Write `value` at `path`. Intermediate containers must already exist.
    pub fn set(&mut self, path: &str, value: Value) -> Result<&mut Self, GlueError> {
        let path = normalize_path(path)?;
        debug!(operation = "set", path = %path, "mutating target");
        let before = clone(&self.target);
        glue_path::set(&mut self.target, &path, value)?;
        self.notify(Operation::Set, &[&path], &before, false)?;
        Ok(self)
    }

    /// Remove the value at `path` and return it.
    ///
    /// A path ending in `[n]` splices element `n` out of its array, shifting
    /// the elements after it; any other path deletes an object property.
    /// Notification is driven by `path` itself, so an `arr[]` observer hears
    /// about index `n` only, while observers on `arr` or its ancestors see
    /// the whole change.
    pub fn remove(&mut self, path: &str) -> Result<Option<Value>, GlueError> {
        let segments = parse_path(path)?;
        let Some((leaf, parent)) = segments.split_last() else {
            return Err(PathError::Root.into());
        };
        let path = format_path(&segments);
        debug!(operation = "remove", path = %path, "mutating target");
        let before = clone(&self.target);
        let removed = match leaf {
            Segment::Index(idx) => {
                let arr = array_at(&mut self.target, &format_path(parent))?;
                (*idx < arr.len()).then(|| arr.remove(*idx))
            }
            Segment::Key(_) => glue_path::delete(&mut self.target, &path)?,
        };
        self.notify(Operation::Remove, &[&path], &before, false)?;
        Ok(removed)
    }

    /// Exchange the values at `a` and `b`.
    ///
    /// Swapping a path with itself does nothing and notifies nobody. A side
    /// that does not resolve moves across as a deletion.
    pub fn swap(&mut self, a: &str, b: &str) -> Result<&mut Self, GlueError> {
        let a = normalize_path(a)?;
        let b = normalize_path(b)?;
        if a == b {
            return Ok(self);
        }
        debug!(operation = "swap", a = %a, b = %b, "mutating target");
        let before = clone(&self.target);
        let value_a = self.get(&a).cloned();
        let value_b = self.get(&b).cloned();
        self.put(&a, value_b)?;
        self.put(&b, value_a)?;
        self.notify(Operation::Swap, &[&a, &b], &before, false)?;
        Ok(self)
    }

    /// Append `value` to the array at `path`.
    pub fn push(&mut self, path: &str, value: Value) -> Result<&mut Self, GlueError> {
        let path = normalize_path(path)?;
        debug!(operation = "push", path = %path, "mutating target");
        let before = clone(&self.target);
        array_at(&mut self.target, &path)?.push(value);
        self.notify(Operation::Push, &[&path], &before, false)?;
        Ok(self)
    }

    /// Remove and return the last element of the array at `path`.
    pub fn pop(&mut self, path: &str) -> Result<Option<Value>, GlueError> {
        let path = normalize_path(path)?;
        debug!(operation = "pop", path = %path, "mutating target");
        let before = clone(&self.target);
        let popped = array_at(&mut self.target, &path)?.pop();
        self.notify(Operation::Pop, &[&path], &before, false)?;
        Ok(popped)
    }

    /// Insert `value` at `index` in the array at `path`, shifting later
    /// elements up. An index past the end appends.
    pub fn insert(&mut self, path: &str, index: usize, value: Value) -> Result<&mut Self, GlueError> {
        let path = normalize_path(path)?;
        debug!(operation = "insert", path = %path, index, "mutating target");
        let before = clone(&self.target);
        let arr = array_at(&mut self.target, &path)?;
        let index = index.min(arr.len());
        arr.insert(index, value);
        self.notify(Operation::Insert, &[&path], &before, false)?;
        Ok(self)
    }

    /// Keep only the elements of the array at `path` for which `predicate`
    /// holds. Returns the filtered array.
    pub fn filter<F>(&mut self, path: &str, predicate: F) -> Result<Vec<Value>, GlueError>
    where
        F: FnMut(&Value) -> bool,
    {
        let path = normalize_path(path)?;
        debug!(operation = "filter", path = %path, "mutating target");
        let before = clone(&self.target);
        let arr = array_at(&mut self.target, &path)?;
        let kept = glue_util::filter(arr, predicate);
        *arr = kept;
        let result = arr.clone();
        self.notify(Operation::Filter, &[&path], &before, true)?;
        Ok(result)
    }

    /// Stably sort the array at `path` by `key`. Returns the sorted array.
    pub fn sort_by<K, F>(&mut self, path: &str, key: F) -> Result<Vec<Value>, GlueError>
    where
        K: PartialOrd,
        F: FnMut(&Value) -> K,
    {
        let path = normalize_path(path)?;
        debug!(operation = "sortBy", path = %path, "mutating target");
        let before = clone(&self.target);
        let arr = array_at(&mut self.target, &path)?;
        sort_by_in_place(arr, key);
        let result = arr.clone();
        self.notify(Operation::SortBy, &[&path], &before, true)?;
        Ok(result)
    }

    fn put(&mut self, path: &str, value: Option<Value>) -> Result<(), GlueError> {
        match value {
            Some(value) => glue_path::set(&mut self.target, path, value)?,
            None => glue_path::delete(&mut self.target, path)?,
        };
        Ok(())
    }
}

fn array_at<'a>(target: &'a mut Value, path: &str) -> Result<&'a mut Vec<Value>, GlueError> {
    match glue_path::get_mut(target, path) {
        Some(Value::Array(arr)) => Ok(arr),
        Some(_) => Err(GlueError::NotAnArray(path.to_string())),
        None => Err(GlueError::MissingArray(path.to_string())),
    }
}
