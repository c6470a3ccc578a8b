//! Recipe table validation.

mod validate;

pub use validate::{validate_table, ValidationResult};
