//! The choice entry type.

use choiceset_core::Value;
use serde::{Serialize, Serializer};
use std::fmt;

/// One finalized entry of a choice set.
#[derive(Debug, Clone)]
pub struct Choice {
    /// Symbolic name used at declaration time (e.g. `Male`).
    pub name: String,
    /// Externally visible value; the only part backing storage persists.
    pub value: Value,
    /// Human-readable label. Defaults to the lowercased name.
    pub label: String,
}

impl Choice {
    pub(crate) fn new(name: String, value: Value, label: String) -> Self {
        Self { name, value, label }
    }

    /// The `(value, label)` pair a form layer consumes.
    pub fn pair(&self) -> (&Value, &str) {
        (&self.value, &self.label)
    }
}

/// Choices compare by value; the label is presentation only.
impl PartialEq for Choice {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl PartialEq<Value> for Choice {
    fn eq(&self, other: &Value) -> bool {
        self.value == *other
    }
}

impl PartialEq<Choice> for Value {
    fn eq(&self, other: &Choice) -> bool {
        *self == other.value
    }
}

impl PartialEq<&str> for Choice {
    fn eq(&self, other: &&str) -> bool {
        self.value.as_str() == Some(*other)
    }
}

impl PartialEq<i64> for Choice {
    fn eq(&self, other: &i64) -> bool {
        self.value.as_int() == Some(*other)
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label)
    }
}

/// Storage persists only the value.
impl Serialize for Choice {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.value.serialize(serializer)
    }
}
