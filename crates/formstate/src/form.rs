//! Field sets, field descriptors and the form builder.

use std::fmt;

use crate::error::Result;
use crate::model::FormModel;
use crate::submit::{LogSink, SubmitSink};
use crate::validation::ValidationRule;

/// A closed set of field names, usually a fieldless enum.
///
/// `as_str` is the identifier used in validation messages and in the JSON
/// form of values and events.
pub trait FieldSet: Copy + Eq + Ord + fmt::Debug + 'static {
    /// Every field, in declaration order.
    const ALL: &'static [Self];

    /// The field's identifier.
    fn as_str(self) -> &'static str;

    /// Looks a field up by identifier.
    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

/// Definition of a form field.
#[derive(Debug)]
pub struct FieldDescriptor<F> {
    /// Field name.
    pub name: F,
    /// Field label, for the renderer.
    pub label: String,
    /// Value the field starts with and returns to on reset.
    pub initial: String,
    /// Rule applied by `validate_field`.
    pub rule: ValidationRule,
}

impl<F: FieldSet> FieldDescriptor<F> {
    /// Creates a field with an empty initial value and no rule.
    pub fn new(name: F, label: impl Into<String>) -> Self {
        Self {
            name,
            label: label.into(),
            initial: String::new(),
            rule: ValidationRule::none(),
        }
    }

    /// Sets initial value.
    #[must_use]
    pub fn initial(mut self, value: impl Into<String>) -> Self {
        self.initial = value.into();
        self
    }

    /// Sets the validation rule.
    #[must_use]
    pub fn rule(mut self, rule: ValidationRule) -> Self {
        self.rule = rule;
        self
    }
}

/// Collects field descriptors and builds a [`FormModel`].
#[derive(Debug)]
pub struct FormBuilder<F> {
    fields: Vec<FieldDescriptor<F>>,
}

impl<F: FieldSet> Default for FormBuilder<F> {
    fn default() -> Self {
        Self { fields: Vec::new() }
    }
}

impl<F: FieldSet> FormBuilder<F> {
    /// Creates a new form builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: FieldDescriptor<F>) -> Self {
        self.fields.push(field);
        self
    }

    /// Returns the field descriptors.
    pub fn into_fields(self) -> Vec<FieldDescriptor<F>> {
        self.fields
    }

    /// Builds a model that logs submitted payloads.
    pub fn build(self) -> Result<FormModel<F>> {
        self.build_with_sink(LogSink)
    }

    /// Builds a model that hands submitted payloads to `sink`.
    pub fn build_with_sink(self, sink: impl SubmitSink<F> + 'static) -> Result<FormModel<F>> {
        FormModel::new(self.fields, sink)
    }
}
