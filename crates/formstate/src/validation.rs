//! Field validators and per-field validation rules.

use std::fmt;

use crate::error::{FieldError, ValidationError};

/// Trait for field validators.
pub trait Validator: Send + Sync {
    /// Validates a value and returns an error message if invalid.
    fn validate(&self, value: &str) -> Result<(), String>;

    /// Returns the error message for this validator.
    fn message(&self) -> &str;
}

/// Validator that requires a non-empty value.
#[derive(Debug, Clone)]
pub struct RequiredValidator {
    message: String,
    trim: bool,
}

impl RequiredValidator {
    /// Creates a new RequiredValidator with default message.
    pub fn new() -> Self {
        Self::with_message("This field is required.")
    }

    /// Creates a new RequiredValidator with custom message.
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            trim: true,
        }
    }

    /// Only rejects a value of length zero; whitespace counts as content.
    #[must_use]
    pub fn untrimmed(mut self) -> Self {
        self.trim = false;
        self
    }
}

impl Default for RequiredValidator {
    fn default() -> Self {
        Self::new()
    }
}

impl Validator for RequiredValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        let value = if self.trim { value.trim() } else { value };
        if value.is_empty() {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// Validator that enforces a maximum length, counted in characters.
#[derive(Debug, Clone)]
pub struct MaxLengthValidator {
    max_length: usize,
    message: String,
}

impl MaxLengthValidator {
    /// Creates a new MaxLengthValidator.
    pub fn new(max_length: usize) -> Self {
        Self {
            max_length,
            message: format!("Ensure this value has at most {max_length} characters."),
        }
    }

    /// Creates a new MaxLengthValidator with custom message.
    pub fn with_message(max_length: usize, message: impl Into<String>) -> Self {
        Self {
            max_length,
            message: message.into(),
        }
    }

    /// Returns the inclusive upper bound.
    pub fn max_length(&self) -> usize {
        self.max_length
    }
}

impl Validator for MaxLengthValidator {
    fn validate(&self, value: &str) -> Result<(), String> {
        if value.chars().count() > self.max_length {
            Err(self.message.clone())
        } else {
            Ok(())
        }
    }

    fn message(&self) -> &str {
        &self.message
    }
}

/// An ordered chain of validators for one field.
///
/// Validators run in the order they were added and the first failure is the
/// field's error, so `required_max_length` never reports the length message
/// for an empty value.
#[derive(Default)]
pub struct ValidationRule {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidationRule {
    /// Creates an empty rule that accepts every value.
    pub fn new() -> Self {
        Self::default()
    }

    /// Alias of [`ValidationRule::new`] for fields without constraints.
    pub fn none() -> Self {
        Self::new()
    }

    /// Appends a validator to the chain.
    #[must_use]
    pub fn with(mut self, validator: impl Validator + 'static) -> Self {
        self.validators.push(Box::new(validator));
        self
    }

    /// `"<field> invalid"` when the trimmed value is empty.
    pub fn required(field: &str) -> Self {
        Self::new().with(RequiredValidator::with_message(format!("{field} invalid")))
    }

    /// `"<field> invalid"` when empty, otherwise
    /// `"<field> must be N characters or less"` when longer than `max_length`.
    pub fn required_max_length(field: &str, max_length: usize) -> Self {
        Self::new()
            .with(RequiredValidator::with_message(format!("{field} invalid")).untrimmed())
            .with(MaxLengthValidator::with_message(
                max_length,
                format!("{field} must be {max_length} characters or less"),
            ))
    }

    /// Evaluates the chain against a value.
    pub fn evaluate(&self, value: &str) -> FieldError {
        self.validators
            .iter()
            .find_map(|v| v.validate(value).err())
            .map(ValidationError::new)
    }

    /// Messages of every validator, in evaluation order.
    pub fn messages(&self) -> Vec<&str> {
        self.validators.iter().map(|v| v.message()).collect()
    }

    /// Returns whether the rule has no validators.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }
}

impl fmt::Debug for ValidationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.messages()).finish()
    }
}
