//! # formstate
//!
//! Form state for a fixed set of text fields: current values, per-field
//! validation triggered when a field loses focus, and a submit that is gated on
//! every field being valid.
//!
//! This crate provides:
//! - Typed field sets and field descriptors
//! - Ordered validation rules with exact error messages
//! - A per-form [`FormModel`] with explicit change notification
//! - [`FormBinding`], which routes UI events into a model
//!
//! ## Quick Start
//!
//! ```rust
//! use formstate::forms::{name_form, NameField};
//! use formstate::FormValues;
//!
//! let mut form = name_form().unwrap();
//!
//! form.set_field(NameField::FirstName, "Bob");
//! form.set_field(NameField::LastName, "Smith");
//! form.validate_field(NameField::FirstName);
//! form.validate_field(NameField::LastName);
//!
//! let payload = form.submit(FormValues::new()).unwrap();
//! assert_eq!(payload.get(NameField::FirstName), Some("Bob"));
//! ```
//!
//! ## Custom Forms
//!
//! ```rust
//! use formstate::{FieldDescriptor, FieldSet, FormBuilder, ValidationRule};
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
//! enum Login {
//!     Username,
//! }
//!
//! impl FieldSet for Login {
//!     const ALL: &'static [Self] = &[Login::Username];
//!
//!     fn as_str(self) -> &'static str {
//!         "username"
//!     }
//! }
//!
//! let mut form = FormBuilder::new()
//!     .field(
//!         FieldDescriptor::new(Login::Username, "Username")
//!             .rule(ValidationRule::required_max_length("username", 8)),
//!     )
//!     .build()
//!     .unwrap();
//!
//! form.set_field(Login::Username, "a-very-long-name");
//! form.validate_field(Login::Username);
//! assert_eq!(
//!     form.field_error(Login::Username).map(|e| e.message()),
//!     Some("username must be 8 characters or less"),
//! );
//! ```
//!
//! ## Events
//!
//! ```rust
//! use formstate::forms::{name_form, NameField};
//! use formstate::{BindingConfig, FormBinding, FormEvent};
//!
//! let mut binding = FormBinding::migrated(name_form().unwrap(), BindingConfig::default());
//! binding.dispatch(FormEvent::changed(NameField::FirstName, "Bob"));
//! let outcome = binding.dispatch(FormEvent::submit()).unwrap();
//! assert!(outcome.is_err()); // last name is still empty
//! ```

mod binding;
mod config;
mod error;
mod event;
mod form;
pub mod forms;
mod model;
mod submit;
pub mod validation;
mod values;

pub use binding::{FormBinding, SubmitOutcome};
pub use config::{BindingConfig, ValidationMode};
pub use error::{FieldError, FormError, Result, SubmitError, ValidationError};
pub use event::FormEvent;
pub use form::{FieldDescriptor, FieldSet, FormBuilder};
pub use model::{FieldState, FormModel, FormSnapshot, SubscriptionId};
pub use submit::{LogSink, RecordingSink, SubmitSink};
pub use validation::ValidationRule;
pub use values::{FormErrors, FormValues};
