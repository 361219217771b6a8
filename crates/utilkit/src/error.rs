//! Error types for the utility helpers
//!
//! Each helper family has its own error enum so callers can match on the exact
//! failure. [`UtilError`] wraps all of them for code that mixes helpers and
//! just wants to propagate with `?`.

use thiserror::Error;

/// Failure of a by-name field lookup on a record
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldAccessError {
    /// No record was supplied
    #[error("target must be a reference to a struct, got none")]
    NullReference,

    /// The target has no named fields
    #[error("target must be a struct, got {type_name}")]
    NotAStruct { type_name: &'static str },

    /// No field with this name is registered for the record
    #[error("field {field} not found")]
    FieldNotFound { field: String },

    /// The field exists but exposes no getter
    #[error("field {field} cannot be accessed")]
    NotReadable { field: String },

    /// The field exists but exposes no setter
    #[error("field {field} cannot be set")]
    NotWritable { field: String },

    /// The requested value type differs from the field's declared type
    #[error("field {field} is {actual}, not {expected}")]
    TypeMismatch {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldAccessError {
    /// Create a field not found error
    pub fn not_found(field: impl Into<String>) -> Self {
        Self::FieldNotFound {
            field: field.into(),
        }
    }

    /// Create a type mismatch error
    pub fn type_mismatch(
        field: impl Into<String>,
        expected: &'static str,
        actual: &'static str,
    ) -> Self {
        Self::TypeMismatch {
            field: field.into(),
            expected,
            actual,
        }
    }
}

/// Failure of an index-based slice mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SliceError {
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Failure of a time zone or timestamp helper
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    /// The name is not in the IANA time zone database
    #[error("unknown time zone: {0}")]
    UnknownZone(String),

    /// A fixed offset must stay strictly within one day
    #[error("offset of {0} minutes is out of range")]
    OffsetOutOfRange(i32),

    /// The result is outside the representable timestamp range
    #[error("timestamp out of range")]
    OutOfRange,
}

/// Unified error type for all helpers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UtilError {
    #[error("Field access failed: {0}")]
    Field(#[from] FieldAccessError),

    #[error("Slice operation failed: {0}")]
    Slice(#[from] SliceError),

    #[error("Time operation failed: {0}")]
    Time(#[from] TimeError),
}
