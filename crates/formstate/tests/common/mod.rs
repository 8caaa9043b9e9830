#![allow(dead_code)]

use formstate::forms::{name_form_with_sink, NameField, FIRST_NAME_MAX_LENGTH};
use formstate::{FormModel, FormValues, RecordingSink};

pub use NameField::{FirstName, LastName};

pub fn form() -> (FormModel<NameField>, RecordingSink<NameField>) {
    let sink = RecordingSink::new();
    let model = name_form_with_sink(FIRST_NAME_MAX_LENGTH, sink.clone())
        .unwrap_or_else(|e| panic!("Failed to build name form: {e}"));
    (model, sink)
}

pub fn filled(first: &str, last: &str) -> (FormModel<NameField>, RecordingSink<NameField>) {
    let (mut model, sink) = form();
    model.set_field(FirstName, first);
    model.set_field(LastName, last);
    model.validate_field(FirstName);
    model.validate_field(LastName);
    (model, sink)
}

pub fn error_of(model: &FormModel<NameField>, field: NameField) -> Option<String> {
    model.field_error(field).map(|e| e.message().to_string())
}

pub fn values(first: &str, last: &str) -> FormValues<NameField> {
    FormValues::new().with(FirstName, first).with(LastName, last)
}
