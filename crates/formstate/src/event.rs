//! Input events delivered by the UI toolkit.

use serde::{Deserialize, Serialize};

use crate::form::FieldSet;
use crate::values::FormValues;

/// One user interaction, in the order the UI delivers them.
///
/// In JSON an event is tagged by `type`:
/// `{"type": "changed", "field": "firstName", "value": "Bob"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FormEvent<F: FieldSet> {
    /// The field's value changed.
    Changed {
        /// Field that changed.
        field: F,
        /// Its new value.
        value: String,
    },
    /// The field lost focus.
    Blurred {
        /// Field that lost focus.
        field: F,
    },
    /// The submit button was pressed.
    SubmitRequested {
        /// Values laid over the model's own at submit time.
        #[serde(default = "FormValues::new")]
        overrides: FormValues<F>,
    },
}

impl<F: FieldSet> FormEvent<F> {
    /// Creates a value-changed event.
    pub fn changed(field: F, value: impl Into<String>) -> Self {
        Self::Changed {
            field,
            value: value.into(),
        }
    }

    /// Creates a blur event.
    pub fn blurred(field: F) -> Self {
        Self::Blurred { field }
    }

    /// Creates a submit request without overrides.
    pub fn submit() -> Self {
        Self::SubmitRequested {
            overrides: FormValues::new(),
        }
    }
}
