//! Error types for form state.

use serde::Serialize;
use thiserror::Error;

use crate::form::FieldSet;

/// Errors raised while building or configuring a form.
///
/// Validation failures never show up here: they are stored per field as
/// [`FieldError`] values and read back by the caller.
#[derive(Debug, Error)]
pub enum FormError {
    /// The same field was described twice.
    #[error("field declared more than once: {0}")]
    DuplicateField(String),

    /// A member of the field set has no descriptor.
    #[error("missing field descriptor: {0}")]
    MissingField(String),

    /// A validation mode name that could not be parsed.
    #[error("unknown validation mode: {0}")]
    InvalidMode(String),

    /// Configuration or event script could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error while reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A single field's validation failure, carrying the message shown next to
/// the field.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[error("{message}")]
#[serde(transparent)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    /// Creates a validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Validation outcome of one field: `None` means "no error".
pub type FieldError = Option<ValidationError>;

/// Refusal returned by a gated submit.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError<F: FieldSet> {
    /// At least one field currently holds a validation error.
    #[error("submit blocked by invalid fields: {}", field_list(.fields))]
    Blocked {
        /// The fields in error, in declaration order.
        fields: Vec<F>,
    },
}

impl<F: FieldSet> SubmitError<F> {
    /// Returns the fields that blocked the submit.
    pub fn fields(&self) -> &[F] {
        match self {
            Self::Blocked { fields } => fields,
        }
    }
}

fn field_list<F: FieldSet>(fields: &[F]) -> String {
    fields
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::NameField;

    #[test]
    fn test_validation_error_displays_message() {
        let err = ValidationError::new("firstName invalid");
        assert_eq!(err.to_string(), "firstName invalid");
        assert_eq!(err.message(), "firstName invalid");
    }

    #[test]
    fn test_blocked_lists_field_identifiers() {
        let err = SubmitError::Blocked {
            fields: vec![NameField::FirstName, NameField::LastName],
        };
        assert_eq!(
            err.to_string(),
            "submit blocked by invalid fields: firstName, lastName"
        );
        assert_eq!(err.fields().len(), 2);
    }
}
