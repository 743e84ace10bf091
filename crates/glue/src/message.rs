use serde_json::Value;
use std::fmt;
use std::str::FromStr;

use crate::error::GlueError;

/// The mutating operations a `Glue` performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operation {
    Set,
    Remove,
    Swap,
    Push,
    Pop,
    Insert,
    Filter,
    SortBy,
}

impl Operation {
    pub const ALL: [Operation; 8] = [
        Operation::Set,
        Operation::Remove,
        Operation::Swap,
        Operation::Push,
        Operation::Pop,
        Operation::Insert,
        Operation::Filter,
        Operation::SortBy,
    ];

    /// The name used in observer keys, e.g. `"sortBy"` in `"list[]:sortBy"`.
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Set => "set",
            Operation::Remove => "remove",
            Operation::Swap => "swap",
            Operation::Push => "push",
            Operation::Pop => "pop",
            Operation::Insert => "insert",
            Operation::Filter => "filter",
            Operation::SortBy => "sortBy",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = GlueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| GlueError::UnknownOperation(s.to_string()))
    }
}

/// Payload delivered to an observer.
///
/// `value` is read from the live target at dispatch time; `None` means the
/// observed path no longer resolves. `index` is set only for generic
/// (`path[]`) observers.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub operation: Operation,
    pub value: Option<Value>,
    pub index: Option<usize>,
}
