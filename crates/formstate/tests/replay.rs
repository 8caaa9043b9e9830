//! Event scripts shipped under `demos/`.

mod common;
use common::*;

use formstate::forms::NameField;
use formstate::{BindingConfig, FormBinding, FormEvent};

const GRADUAL_SCRIPT: &str = include_str!("../../../demos/gradual.json");

#[test]
fn gradual_script_decodes() {
    let events: Vec<FormEvent<NameField>> = serde_json::from_str(GRADUAL_SCRIPT)
        .unwrap_or_else(|e| panic!("Failed to decode demos/gradual.json: {e}"));

    assert_eq!(events.len(), 8);
    assert_eq!(events[0], FormEvent::changed(FirstName, "Bobbby"));
    assert_eq!(events[4], FormEvent::submit());
}

#[test]
fn gradual_script_blocks_then_submits() {
    let events: Vec<FormEvent<NameField>> = serde_json::from_str(GRADUAL_SCRIPT).unwrap();
    let (model, sink) = form();
    let mut binding = FormBinding::gradual(model, [FirstName], BindingConfig::default());

    let outcomes: Vec<_> = events
        .into_iter()
        .filter_map(|event| binding.dispatch(event))
        .collect();

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].as_ref().unwrap_err().fields(), &[FirstName]);
    assert_eq!(outcomes[1], Ok(values("Bob", "Smith")));
    assert_eq!(sink.received(), vec![values("Bob", "Smith")]);
}
