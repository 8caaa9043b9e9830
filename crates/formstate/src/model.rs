//! The per-form state container.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::{FieldError, FormError, Result, SubmitError, ValidationError};
use crate::form::{FieldDescriptor, FieldSet};
use crate::submit::SubmitSink;
use crate::validation::ValidationRule;
use crate::values::{FormErrors, FormValues};

/// Validation state of a single field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FieldState {
    /// Not validated since the form was created or reset.
    #[default]
    Untouched,
    /// Passed its rule at the last validation.
    Valid,
    /// Failed its rule at the last validation.
    Invalid,
}

/// Read-only copy of a form for renderers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormSnapshot<F: FieldSet> {
    /// Current field values.
    pub values: FormValues<F>,
    /// Stored validation outcomes.
    pub errors: FormErrors<F>,
}

/// Handle returned by [`FormModel::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener<F> = Box<dyn FnMut(&FormSnapshot<F>)>;

#[derive(Debug)]
struct FieldSlot {
    label: String,
    initial: String,
    rule: ValidationRule,
    value: String,
    error: FieldError,
    state: FieldState,
}

/// Values and validation errors of one form instance.
///
/// Setting a value never validates it: errors reflect the last call to
/// [`validate_field`](Self::validate_field), which callers make when the field
/// loses focus. Every mutation notifies subscribers with a fresh snapshot.
pub struct FormModel<F: FieldSet> {
    order: Vec<F>,
    // A slot exists for every member of `F::ALL`.
    slots: BTreeMap<F, FieldSlot>,
    sink: Box<dyn SubmitSink<F>>,
    listeners: Vec<(SubscriptionId, Listener<F>)>,
    next_subscription: u64,
}

impl<F: FieldSet> fmt::Debug for FormModel<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormModel")
            .field("order", &self.order)
            .field("slots", &self.slots)
            .field("listeners", &self.listeners.len())
            .finish_non_exhaustive()
    }
}

impl<F: FieldSet> FormModel<F> {
    /// Creates a model from one descriptor per field.
    pub fn new(
        fields: Vec<FieldDescriptor<F>>,
        sink: impl SubmitSink<F> + 'static,
    ) -> Result<Self> {
        let mut order = Vec::with_capacity(fields.len());
        let mut slots = BTreeMap::new();

        for field in fields {
            if slots.contains_key(&field.name) {
                return Err(FormError::DuplicateField(field.name.as_str().to_string()));
            }
            order.push(field.name);
            slots.insert(
                field.name,
                FieldSlot {
                    label: field.label,
                    value: field.initial.clone(),
                    initial: field.initial,
                    rule: field.rule,
                    error: None,
                    state: FieldState::Untouched,
                },
            );
        }

        if let Some(missing) = F::ALL.iter().find(|f| !slots.contains_key(*f)) {
            return Err(FormError::MissingField(missing.as_str().to_string()));
        }

        Ok(Self {
            order,
            slots,
            sink: Box::new(sink),
            listeners: Vec::new(),
            next_subscription: 0,
        })
    }

    fn slot(&self, name: F) -> &FieldSlot {
        &self.slots[&name]
    }

    fn slot_mut(&mut self, name: F) -> &mut FieldSlot {
        self.slots
            .get_mut(&name)
            .unwrap_or_else(|| unreachable!("no slot for {name:?}"))
    }

    /// Fields in declaration order.
    pub fn fields(&self) -> &[F] {
        &self.order
    }

    /// Overwrites a field's value verbatim.
    pub fn set_field(&mut self, name: F, value: impl Into<String>) {
        let value = value.into();
        debug!(field = name.as_str(), value = %value, "Setting field");
        self.slot_mut(name).value = value;
        self.notify();
    }

    /// Applies the field's rule to its current value and stores the result.
    pub fn validate_field(&mut self, name: F) {
        let slot = self.slot_mut(name);
        let error = slot.rule.evaluate(&slot.value);
        slot.state = if error.is_some() {
            FieldState::Invalid
        } else {
            FieldState::Valid
        };
        debug!(
            field = name.as_str(),
            error = error.as_ref().map(ValidationError::message),
            "Validated field"
        );
        slot.error = error;
        self.notify();
    }

    /// Validates every field in declaration order. Returns whether all passed.
    pub fn validate_all(&mut self) -> bool {
        for name in self.order.clone() {
            self.validate_field(name);
        }
        self.is_valid()
    }

    /// Returns the stored error of a field.
    pub fn field_error(&self, name: F) -> Option<&ValidationError> {
        self.slot(name).error.as_ref()
    }

    /// Returns the current value of a field.
    pub fn field_value(&self, name: F) -> &str {
        &self.slot(name).value
    }

    /// Returns the validation state of a field.
    pub fn field_state(&self, name: F) -> FieldState {
        self.slot(name).state
    }

    /// Returns the label of a field.
    pub fn field_label(&self, name: F) -> &str {
        &self.slot(name).label
    }

    /// Returns the rule of a field.
    pub fn field_rule(&self, name: F) -> &ValidationRule {
        &self.slot(name).rule
    }

    /// Returns whether no field holds an error.
    pub fn is_valid(&self) -> bool {
        self.slots.values().all(|slot| slot.error.is_none())
    }

    /// Current values of every field.
    pub fn values(&self) -> FormValues<F> {
        self.slots
            .iter()
            .map(|(name, slot)| (*name, slot.value.clone()))
            .collect()
    }

    /// Stored errors of every field.
    pub fn errors(&self) -> FormErrors<F> {
        FormErrors::from_map(
            self.slots
                .iter()
                .map(|(name, slot)| (*name, slot.error.clone()))
                .collect(),
        )
    }

    /// Returns a copy of values and errors.
    pub fn snapshot(&self) -> FormSnapshot<F> {
        FormSnapshot {
            values: self.values(),
            errors: self.errors(),
        }
    }

    /// Hands the current values, overlaid with `overrides`, to the sink.
    ///
    /// Blocked without side effects while any field holds an error. The
    /// stored values are not changed by `overrides`.
    pub fn submit(
        &mut self,
        overrides: FormValues<F>,
    ) -> std::result::Result<FormValues<F>, SubmitError<F>> {
        let invalid = self.invalid_fields();
        if !invalid.is_empty() {
            warn!(fields = ?invalid, "Submit blocked");
            return Err(SubmitError::Blocked { fields: invalid });
        }

        let mut payload = self.values();
        payload.merge(overrides);
        self.sink.submitted(&payload);
        Ok(payload)
    }

    /// Returns every field to its initial value with no error.
    pub fn reset(&mut self) {
        for slot in self.slots.values_mut() {
            slot.value.clone_from(&slot.initial);
            slot.error = None;
            slot.state = FieldState::Untouched;
        }
        debug!("Form reset");
        self.notify();
    }

    /// Registers a listener called with a snapshot after every mutation.
    pub fn subscribe(
        &mut self,
        listener: impl FnMut(&FormSnapshot<F>) + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    /// Removes a listener. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(existing, _)| *existing != id);
        self.listeners.len() != before
    }

    fn notify(&mut self) {
        if self.listeners.is_empty() {
            return;
        }
        let snapshot = self.snapshot();
        for (_, listener) in &mut self.listeners {
            listener(&snapshot);
        }
    }

    /// Fields that currently hold an error, in declaration order.
    pub fn invalid_fields(&self) -> Vec<F> {
        self.order
            .iter()
            .copied()
            .filter(|name| self.slot(*name).error.is_some())
            .collect()
    }
}
