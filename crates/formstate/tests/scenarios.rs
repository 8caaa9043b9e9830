//! End-to-end behaviour of the name form model.

mod common;
use common::*;

use formstate::{FieldSet, FieldState, FormValues, SubmitError};
use formstate::forms::NameField;

#[test]
fn set_field_round_trips_any_value() {
    let (mut model, _) = form();
    for value in ["", " ", "Bob", "  padded  ", "Zoë", "line\nbreak"] {
        for field in NameField::ALL {
            model.set_field(*field, value);
            assert_eq!(model.field_value(*field), value);
        }
    }
}

#[test]
fn no_error_before_first_validation() {
    let (mut model, _) = form();
    model.set_field(FirstName, "");
    model.set_field(LastName, "");
    for field in NameField::ALL {
        assert_eq!(error_of(&model, *field), None);
        assert_eq!(model.field_state(*field), FieldState::Untouched);
    }
}

#[test]
fn required_rule() {
    let (model, _) = filled("Bob", "");
    assert_eq!(error_of(&model, LastName), Some("lastName invalid".to_string()));

    let (model, _) = filled("Bob", "   ");
    assert_eq!(error_of(&model, LastName), Some("lastName invalid".to_string()));

    let (model, _) = filled("Bob", "S");
    assert_eq!(error_of(&model, LastName), None);
}

#[test]
fn max_length_boundary_is_inclusive() {
    let (model, _) = filled("Bobby", "Smith");
    assert_eq!(error_of(&model, FirstName), None);

    let (model, _) = filled("Bobbby", "Smith");
    assert_eq!(
        error_of(&model, FirstName),
        Some("firstName must be 5 characters or less".to_string())
    );
}

#[test]
fn empty_takes_precedence_over_length() {
    let (model, _) = filled("", "Smith");
    assert_eq!(error_of(&model, FirstName), Some("firstName invalid".to_string()));
}

#[test]
fn invalid_form_blocks_submit() {
    let (mut model, sink) = filled("", "Smith");
    assert_eq!(error_of(&model, LastName), None);

    let result = model.submit(FormValues::new());
    assert_eq!(
        result,
        Err(SubmitError::Blocked {
            fields: vec![FirstName]
        })
    );
    assert_eq!(sink.count(), 0);
}

#[test]
fn valid_form_submits_once_with_full_payload() {
    let (mut model, sink) = filled("Bob", "Smith");
    assert!(model.is_valid());

    let payload = model.submit(FormValues::new()).unwrap();
    assert_eq!(payload, values("Bob", "Smith"));
    assert_eq!(sink.received(), vec![values("Bob", "Smith")]);
}

#[test]
fn overrides_are_merged_into_payload() {
    let (mut model, sink) = filled("Bob", "Smith");

    let payload = model
        .submit(FormValues::new().with(FirstName, "Robert"))
        .unwrap();
    assert_eq!(payload, values("Robert", "Smith"));
    assert_eq!(sink.count(), 1);
    assert_eq!(model.field_value(FirstName), "Bob");
}

#[test]
fn fixing_a_value_needs_another_blur() {
    let (mut model, sink) = filled("", "Smith");
    model.set_field(FirstName, "Bob");
    assert!(model.submit(FormValues::new()).is_err());

    model.validate_field(FirstName);
    assert!(model.submit(FormValues::new()).is_ok());
    assert_eq!(sink.count(), 1);
}

#[test]
fn instances_do_not_share_state() {
    let (mut a, _) = form();
    let (b, _) = form();
    a.set_field(FirstName, "Bob");
    a.validate_field(LastName);

    assert_eq!(b.field_value(FirstName), "");
    assert_eq!(error_of(&b, LastName), None);
}
