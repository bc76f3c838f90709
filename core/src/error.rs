//! Common error types for choiceset.

use crate::Value;
use thiserror::Error;

/// Errors that can occur when looking up a choice.
#[derive(Debug, Error)]
pub enum LookupError {
    /// Neither the by-name nor the by-value index contains the key.
    #[error("Key '{0}' does not exist")]
    UnknownKey(Value),
}

/// Result type for choice lookups.
pub type LookupResult<T> = Result<T, LookupError>;
