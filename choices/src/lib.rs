//! Choiceset
//!
//! Declarative, ordered sets of labeled values ("choices") with
//! bidirectional lookup: by symbolic name and by stored value.
//! A set is immutable after construction via [`ChoicesBuilder`].
//!
//! ```
//! use choiceset::ChoicesBuilder;
//!
//! let mut builder = ChoicesBuilder::new();
//! builder.add("Male").value("m").done()?;
//! builder.add("Female").value("f").done()?;
//! builder.add("Other").value("o").done()?;
//! let gender = builder.build()?;
//!
//! assert_eq!(gender.value_of("Male")?, &choiceset::Value::from("m"));
//! assert_eq!(gender.get("m")?.label, "male");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod choices;
mod macros;
mod types;

pub use builder::{BuildError, ChoiceBuilder, ChoicesBuilder};
pub use choices::{Choices, Iter};
pub use types::Choice;

pub use choiceset_core::{LookupError, LookupResult, Value};

// Re-exported for the static form of the `choices!` macro.
#[doc(hidden)]
pub use once_cell::sync::Lazy as __Lazy;
