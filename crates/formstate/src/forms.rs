//! The first-name/last-name example form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::form::{FieldDescriptor, FieldSet, FormBuilder};
use crate::model::FormModel;
use crate::submit::{LogSink, SubmitSink};
use crate::validation::ValidationRule;

/// Default upper bound on the first name.
pub const FIRST_NAME_MAX_LENGTH: usize = 5;

/// Fields of the name form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NameField {
    /// `firstName`
    FirstName,
    /// `lastName`
    LastName,
}

impl NameField {
    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
        }
    }
}

impl FieldSet for NameField {
    const ALL: &'static [Self] = &[Self::FirstName, Self::LastName];

    fn as_str(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
        }
    }
}

impl fmt::Display for NameField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Field descriptors: first name required and at most `max_length`
/// characters, last name required.
pub fn name_fields(max_length: usize) -> FormBuilder<NameField> {
    let first = NameField::FirstName;
    let last = NameField::LastName;
    FormBuilder::new()
        .field(
            FieldDescriptor::new(first, first.label())
                .rule(ValidationRule::required_max_length(first.as_str(), max_length)),
        )
        .field(
            FieldDescriptor::new(last, last.label())
                .rule(ValidationRule::required(last.as_str())),
        )
}

/// The name form with the default limit, logging submitted data.
pub fn name_form() -> Result<FormModel<NameField>> {
    name_form_with_max(FIRST_NAME_MAX_LENGTH)
}

/// The name form with a custom first-name limit, logging submitted data.
pub fn name_form_with_max(max_length: usize) -> Result<FormModel<NameField>> {
    name_form_with_sink(max_length, LogSink)
}

/// The name form delivering submitted data to `sink`.
pub fn name_form_with_sink(
    max_length: usize,
    sink: impl SubmitSink<NameField> + 'static,
) -> Result<FormModel<NameField>> {
    name_fields(max_length).build_with_sink(sink)
}
