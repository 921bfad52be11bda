//! Error types for SignForm

use thiserror::Error;

use crate::types::Field;

/// Errors raised while feeding input into a [`FormState`](crate::FormState).
///
/// These are plumbing errors, not validation results. A field that fails its
/// rule is reported through [`ValidationError`](crate::ValidationError).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Field name did not match any form field
    #[error("Unknown field: {0}")]
    UnknownField(String),

    /// Mode name did not match login or sign-up
    #[error("Unknown mode: {0}")]
    UnknownMode(String),

    /// A value of the wrong kind was sent to a field
    #[error("Field {field} expects a {expected} value")]
    ValueKindMismatch {
        field: Field,
        expected: &'static str,
    },
}

/// Result type alias using FormError
pub type FormResult<T> = Result<T, FormError>;
