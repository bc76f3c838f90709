//! Choiceset Core Types
//!
//! This crate provides the foundational types for the choiceset engine:
//! - The scalar `Value` type (integer, float, string)
//! - Common error types

mod error;
mod value;

pub use error::*;
pub use value::*;
