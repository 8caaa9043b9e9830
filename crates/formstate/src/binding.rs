//! Routing of UI events into a [`FormModel`].
//!
//! A form migrated field by field to a registration-style form handler has two
//! kinds of fields. *Registered* fields are validated according to the
//! binding's [`BindingConfig`] and are all re-validated when a submit is
//! requested. The remaining store-style fields are validated on blur only and
//! are checked at submit time from their stored errors.

use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::config::{BindingConfig, ValidationMode};
use crate::error::SubmitError;
use crate::event::FormEvent;
use crate::form::FieldSet;
use crate::model::FormModel;
use crate::values::FormValues;

/// Outcome of a submit request.
pub type SubmitOutcome<F> = Result<FormValues<F>, SubmitError<F>>;

/// A [`FormModel`] together with the set of fields owned by the form handler.
#[derive(Debug)]
pub struct FormBinding<F: FieldSet> {
    model: FormModel<F>,
    registered: BTreeSet<F>,
    config: BindingConfig,
    submit_count: usize,
}

impl<F: FieldSet> FormBinding<F> {
    /// Binds a model with an explicit set of registered fields.
    pub fn new(
        model: FormModel<F>,
        registered: impl IntoIterator<Item = F>,
        config: BindingConfig,
    ) -> Self {
        Self {
            model,
            registered: registered.into_iter().collect(),
            config,
            submit_count: 0,
        }
    }

    /// Every field is store-style: validated on blur, never on submit.
    pub fn store(model: FormModel<F>) -> Self {
        Self::new(model, std::iter::empty(), BindingConfig::default())
    }

    /// Only `registered` fields belong to the form handler.
    pub fn gradual(
        model: FormModel<F>,
        registered: impl IntoIterator<Item = F>,
        config: BindingConfig,
    ) -> Self {
        Self::new(model, registered, config)
    }

    /// Every field belongs to the form handler.
    pub fn migrated(model: FormModel<F>, config: BindingConfig) -> Self {
        Self::new(model, F::ALL.iter().copied(), config)
    }

    /// Returns the bound model.
    pub fn model(&self) -> &FormModel<F> {
        &self.model
    }

    /// Returns the bound model mutably.
    pub fn model_mut(&mut self) -> &mut FormModel<F> {
        &mut self.model
    }

    /// Releases the model.
    pub fn into_model(self) -> FormModel<F> {
        self.model
    }

    /// Returns the active configuration.
    pub fn config(&self) -> BindingConfig {
        self.config
    }

    /// Returns whether the form handler owns `field`.
    pub fn is_registered(&self, field: F) -> bool {
        self.registered.contains(&field)
    }

    /// Number of submit requests seen so far.
    pub fn submit_count(&self) -> usize {
        self.submit_count
    }

    /// The trigger currently in effect for `field`.
    pub fn effective_mode(&self, field: F) -> ValidationMode {
        if !self.is_registered(field) {
            ValidationMode::OnBlur
        } else if self.submit_count == 0 {
            self.config.mode
        } else {
            self.config.revalidate_mode
        }
    }

    /// Applies one event. Only submit requests produce an outcome.
    pub fn dispatch(&mut self, event: FormEvent<F>) -> Option<SubmitOutcome<F>> {
        match event {
            FormEvent::Changed { field, value } => {
                self.model.set_field(field, value);
                if self.effective_mode(field) == ValidationMode::OnChange {
                    self.model.validate_field(field);
                }
                None
            }
            FormEvent::Blurred { field } => {
                if self.effective_mode(field) == ValidationMode::OnBlur {
                    self.model.validate_field(field);
                }
                None
            }
            FormEvent::SubmitRequested { overrides } => Some(self.request_submit(overrides)),
        }
    }

    /// Re-validates registered fields, then submits through the model's gate.
    pub fn request_submit(&mut self, overrides: FormValues<F>) -> SubmitOutcome<F> {
        self.submit_count += 1;

        let registered: Vec<F> = self
            .model
            .fields()
            .iter()
            .copied()
            .filter(|f| self.registered.contains(f))
            .collect();
        let mut registered_failed = false;
        for field in registered {
            self.model.validate_field(field);
            registered_failed |= self.model.field_error(field).is_some();
        }

        if registered_failed {
            let fields = self.model.invalid_fields();
            warn!(?fields, "Registered fields failed validation, submit not attempted");
            return Err(SubmitError::Blocked { fields });
        }

        debug!(attempt = self.submit_count, "Submitting through model");
        self.model.submit(overrides)
    }
}
