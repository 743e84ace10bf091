use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use std::rc::Rc;

use crate::error::GlueError;
use crate::message::{Message, Operation};
use crate::Glue;

/// Shared observer callback.
///
/// Receives the `Glue` that dispatched the message, so an observer can read
/// or mutate the target from inside a notification.
pub type Callback = Rc<dyn Fn(&mut Glue, &Context, &Message) -> Result<(), GlueError>>;

/// The context an observer was registered with.
///
/// Observers registered without one get [`Context::Target`]. Contexts are
/// compared by value when removing observers.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Context {
    #[default]
    Target,
    Value(Value),
}

impl From<Value> for Context {
    fn from(value: Value) -> Self {
        Context::Value(value)
    }
}

impl From<&str> for Context {
    fn from(name: &str) -> Self {
        Context::Value(Value::String(name.to_string()))
    }
}

impl From<String> for Context {
    fn from(name: String) -> Self {
        Context::Value(Value::String(name))
    }
}

/// A registered observer. An empty operation set matches every operation.
#[derive(Clone)]
pub struct Observer {
    pub(crate) callback: Callback,
    pub(crate) context: Context,
    pub(crate) operations: BTreeSet<Operation>,
}

impl Observer {
    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn operations(&self) -> &BTreeSet<Operation> {
        &self.operations
    }

    pub fn accepts(&self, operation: Operation) -> bool {
        self.operations.is_empty() || self.operations.contains(&operation)
    }

    /// Stop listening to `operations`. Returns `false` once nothing is left.
    pub(crate) fn subtract(&mut self, operations: &BTreeSet<Operation>) -> bool {
        if self.operations.is_empty() {
            self.operations = Operation::ALL.into_iter().collect();
        }
        self.operations.retain(|op| !operations.contains(op));
        !self.operations.is_empty()
    }
}

impl fmt::Debug for Observer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observer")
            .field("context", &self.context)
            .field("operations", &self.operations)
            .finish_non_exhaustive()
    }
}
