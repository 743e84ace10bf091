//! Named-event bus.
//!
//! An explicitly constructed publish/subscribe hub, independent of any
//! [`Glue`](crate::Glue). Handlers run synchronously in subscription order.

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::BTreeMap;
use std::rc::Rc;
use tracing::trace;

type Handler = Rc<dyn Fn(&Value)>;

#[derive(Default)]
pub struct EventBus {
    next_id: u64,
    events: IndexMap<String, BTreeMap<u64, Handler>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `handler` to `event`. The returned id unsubscribes it.
    pub fn subscribe<F>(&mut self, event: &str, handler: F) -> u64
    where
        F: Fn(&Value) + 'static,
    {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.events
            .entry(event.to_string())
            .or_default()
            .insert(id, Rc::new(handler));
        id
    }

    pub fn unsubscribe(&mut self, id: u64) -> bool {
        let Some(event) = self
            .events
            .iter_mut()
            .find_map(|(event, handlers)| handlers.remove(&id).map(|_| event.clone()))
        else {
            return false;
        };
        if self.events.get(&event).is_some_and(BTreeMap::is_empty) {
            self.events.shift_remove(&event);
        }
        true
    }

    /// Drop every handler of `event`.
    pub fn clear(&mut self, event: &str) {
        self.events.shift_remove(event);
    }

    pub fn has_subscribers(&self, event: &str) -> bool {
        self.events.contains_key(event)
    }

    /// Call every handler of `event` with `payload`; returns how many ran.
    pub fn emit(&self, event: &str, payload: &Value) -> usize {
        let handlers: Vec<Handler> = match self.events.get(event) {
            Some(handlers) => handlers.values().cloned().collect(),
            None => return 0,
        };
        trace!(event, handlers = handlers.len(), "emitting event");
        for handler in &handlers {
            handler(payload);
        }
        handlers.len()
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("next_id", &self.next_id)
            .field("events", &self.events.keys().collect::<Vec<_>>())
            .finish()
    }
}
