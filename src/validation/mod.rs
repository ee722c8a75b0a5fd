//! Validation logic

pub mod input;

pub use input::{ValidationError, ValidationResult};
