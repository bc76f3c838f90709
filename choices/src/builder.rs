//! ChoicesBuilder for constructing an immutable choice set.

use crate::{Choice, Choices};
use choiceset_core::Value;
use thiserror::Error;

/// Errors that can occur during choice set construction.
#[derive(Debug, Error)]
pub enum BuildError {
    /// An entry without a value was declared alongside explicit values.
    #[error("Cannot mix choices with and without values: '{0}' has no value")]
    MixedValues(String),

    /// Duplicate symbolic name within one declaration.
    #[error("Duplicate choice name: {0}")]
    DuplicateName(String),
}

/// A single declaration, before values are finalized.
#[derive(Debug)]
struct Pending {
    name: String,
    value: Option<Value>,
    label: Option<String>,
}

/// Builder for constructing an immutable [`Choices`] set.
///
/// Entries are declared in call order; that order is the declaration
/// order used for auto-numbering and iteration. Value assignment happens
/// at [`build`](ChoicesBuilder::build): explicit values are kept as
/// given, implicit entries are numbered from 0, and in literal mode each
/// value becomes its label.
#[derive(Debug, Default)]
pub struct ChoicesBuilder {
    entries: Vec<Pending>,
    literal: bool,
}

impl ChoicesBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder in literal mode: each value is forced equal to
    /// its label instead of being auto-numbered. Explicit values still
    /// win when every entry carries one.
    pub fn literal() -> Self {
        Self {
            entries: Vec::new(),
            literal: true,
        }
    }

    /// Declare a choice. Finish with [`ChoiceBuilder::done`].
    pub fn add(&mut self, name: impl Into<String>) -> ChoiceBuilder<'_> {
        ChoiceBuilder {
            builder: self,
            name: name.into(),
            value: None,
            label: None,
        }
    }

    /// Build the immutable choice set.
    pub fn build(self) -> Result<Choices, BuildError> {
        let has_values = self.entries.iter().any(|e| e.value.is_some());

        let mut next = 0i64;
        let mut finalized = Vec::with_capacity(self.entries.len());
        for entry in self.entries {
            let label = entry
                .label
                .unwrap_or_else(|| entry.name.to_lowercase());

            let value = if has_values {
                match entry.value {
                    Some(value) => value,
                    None => return Err(BuildError::MixedValues(entry.name)),
                }
            } else if self.literal {
                Value::from(label.as_str())
            } else {
                let value = Value::Int(next);
                next += 1;
                value
            };

            finalized.push(Choice::new(entry.name, value, label));
        }

        Ok(Choices::new(finalized))
    }
}

/// Builder for a single choice entry.
pub struct ChoiceBuilder<'a> {
    builder: &'a mut ChoicesBuilder,
    name: String,
    value: Option<Value>,
    label: Option<String>,
}

impl<'a> ChoiceBuilder<'a> {
    /// Set the explicit value.
    pub fn value(mut self, value: impl Into<Value>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the display label (defaults to the lowercased name).
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Finish declaring this choice.
    pub fn done(self) -> Result<(), BuildError> {
        if self.builder.entries.iter().any(|e| e.name == self.name) {
            return Err(BuildError::DuplicateName(self.name));
        }

        self.builder.entries.push(Pending {
            name: self.name,
            value: self.value,
            label: self.label,
        });
        Ok(())
    }
}
