//! The finalized choice set - immutable bidirectional lookup.

use crate::Choice;
use choiceset_core::{LookupError, LookupResult, Value};
use std::collections::HashMap;
use std::fmt;

/// An immutable, ordered set of labeled values.
///
/// Addressable by symbolic name or by value. Iteration follows the
/// by-value index's insertion order, which for auto-numbered sets
/// coincides with declaration order.
#[derive(Debug, Clone)]
pub struct Choices {
    /// All entries in declaration order.
    entries: Vec<Choice>,
    /// Entry index by symbolic name.
    by_name: HashMap<String, usize>,
    /// Entry index by value, in insertion order. A later entry with an
    /// equal value overwrites the earlier mapping in place.
    by_value: Vec<(Value, usize)>,
}

impl Choices {
    /// Build the lookup indices (use ChoicesBuilder for construction).
    pub(crate) fn new(entries: Vec<Choice>) -> Self {
        let mut by_name = HashMap::with_capacity(entries.len());
        let mut by_value: Vec<(Value, usize)> = Vec::with_capacity(entries.len());

        for (i, choice) in entries.iter().enumerate() {
            by_name.insert(choice.name.clone(), i);
            match by_value.iter_mut().find(|(value, _)| *value == choice.value) {
                Some(slot) => slot.1 = i,
                None => by_value.push((choice.value.clone(), i)),
            }
        }

        Self {
            entries,
            by_name,
            by_value,
        }
    }

    /// Look up a choice by symbolic name first, then by value.
    pub fn get(&self, key: impl Into<Value>) -> LookupResult<&Choice> {
        let key = key.into();
        if let Value::Str(name) = &key {
            if let Some(choice) = self.get_by_name(name) {
                return Ok(choice);
            }
        }
        self.get_by_value(&key)
            .ok_or(LookupError::UnknownKey(key))
    }

    /// Get a choice by its symbolic name.
    pub fn get_by_name(&self, name: &str) -> Option<&Choice> {
        self.by_name.get(name).map(|&i| &self.entries[i])
    }

    /// Get a choice by its value.
    pub fn get_by_value(&self, value: &Value) -> Option<&Choice> {
        self.by_value
            .iter()
            .find(|(v, _)| v == value)
            .map(|&(_, i)| &self.entries[i])
    }

    /// Resolve a symbolic name directly to its assigned value.
    pub fn value_of(&self, name: &str) -> LookupResult<&Value> {
        self.get_by_name(name)
            .map(|choice| &choice.value)
            .ok_or_else(|| LookupError::UnknownKey(Value::from(name)))
    }

    /// Iterate `(value, choice)` pairs in by-value insertion order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            by_value: self.by_value.iter(),
            entries: &self.entries,
        }
    }

    /// All registered values, in iteration order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.by_value.iter().map(|(value, _)| value)
    }

    /// All symbolic names, in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|choice| choice.name.as_str())
    }

    /// The `(value, label)` pairs a form layer consumes as its closed
    /// choice set.
    pub fn labels(&self) -> impl Iterator<Item = (&Value, &str)> {
        self.iter().map(|(value, choice)| (value, choice.label.as_str()))
    }

    /// Check whether a name or value is registered.
    pub fn contains(&self, key: impl Into<Value>) -> bool {
        self.get(key).is_ok()
    }

    /// Number of declared entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no entries were declared.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Iterator over `(value, choice)` pairs.
pub struct Iter<'a> {
    by_value: std::slice::Iter<'a, (Value, usize)>,
    entries: &'a [Choice],
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a Value, &'a Choice);

    fn next(&mut self) -> Option<Self::Item> {
        self.by_value
            .next()
            .map(|(value, i)| (value, &self.entries[*i]))
    }
}

impl<'a> IntoIterator for &'a Choices {
    type Item = (&'a Value, &'a Choice);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders the by-name view, e.g. `{Male: m, Female: f}`.
impl fmt::Display for Choices {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, choice) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", choice.name, choice.value)?;
        }
        write!(f, "}}")
    }
}
