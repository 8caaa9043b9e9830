//! Destinations for successfully submitted form data.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{info, warn};

use crate::form::FieldSet;
use crate::values::FormValues;

/// Receives the merged payload of every submit that passes the gate.
pub trait SubmitSink<F: FieldSet> {
    /// Called exactly once per successful submit.
    fn submitted(&mut self, payload: &FormValues<F>);
}

/// Logs submitted payloads as JSON through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl<F: FieldSet> SubmitSink<F> for LogSink {
    fn submitted(&mut self, payload: &FormValues<F>) {
        match serde_json::to_string(payload) {
            Ok(json) => info!(payload = %json, "Submitting form"),
            Err(e) => warn!(error = %e, "Submitted payload could not be encoded"),
        }
    }
}

/// Keeps every submitted payload. Clones share the same record.
pub struct RecordingSink<F: FieldSet> {
    received: Rc<RefCell<Vec<FormValues<F>>>>,
}

impl<F: FieldSet> RecordingSink<F> {
    /// Creates a sink with an empty record.
    pub fn new() -> Self {
        Self {
            received: Rc::new(RefCell::new(Vec::new())),
        }
    }

    /// Returns a copy of every payload received so far.
    pub fn received(&self) -> Vec<FormValues<F>> {
        self.received.borrow().clone()
    }

    /// Returns the number of payloads received.
    pub fn count(&self) -> usize {
        self.received.borrow().len()
    }
}

impl<F: FieldSet> Default for RecordingSink<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: FieldSet> Clone for RecordingSink<F> {
    fn clone(&self) -> Self {
        Self {
            received: Rc::clone(&self.received),
        }
    }
}

impl<F: FieldSet> fmt::Debug for RecordingSink<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecordingSink")
            .field("count", &self.count())
            .finish()
    }
}

impl<F: FieldSet> SubmitSink<F> for RecordingSink<F> {
    fn submitted(&mut self, payload: &FormValues<F>) {
        self.received.borrow_mut().push(payload.clone());
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;
    use crate::forms::NameField;

    #[test]
    fn test_recording_sink_shares_record() {
        let sink = RecordingSink::<NameField>::new();
        let mut handle = sink.clone();

        handle.submitted(&FormValues::new().with(NameField::FirstName, "Bob"));

        assert_eq!(sink.count(), 1);
        assert_eq!(sink.received()[0].get(NameField::FirstName), Some("Bob"));
    }

    #[derive(Clone, Default)]
    struct Buffer(Arc<Mutex<Vec<u8>>>);

    impl std::io::Write for Buffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_log_sink_emits_json_payload() {
        let buffer = Buffer::default();
        let writer = buffer.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .without_time()
            .finish();

        let payload = FormValues::new()
            .with(NameField::FirstName, "Bob")
            .with(NameField::LastName, "Smith");
        tracing::subscriber::with_default(subscriber, || {
            LogSink.submitted(&payload);
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("Submitting form"));
        assert!(output.contains(r#"{"firstName":"Bob","lastName":"Smith"}"#));
    }
}
