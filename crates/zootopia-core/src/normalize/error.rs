//! Per-record normalization errors. Never fatal: the record is skipped.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum NormalizeError {
    /// The raw element is not a JSON object.
    #[error("record is not an object (found {found})")]
    NotAnObject { found: &'static str },

    /// A known field has a JSON type the record model cannot hold.
    #[error("field `{field}` should be {expected}, found {found}")]
    FieldShape {
        field: String,
        expected: &'static str,
        found: &'static str,
    },
}
