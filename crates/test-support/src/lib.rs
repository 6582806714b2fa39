//! Shared test utilities for the logging workspace.
//!
//! [`RecordingSink`] keeps every call it receives so tests can assert on the
//! exact sequence of `(priority, tag, text)` triples a logger produced.

use std::sync::{Mutex, MutexGuard, PoisonError};

use logging_sink::{LogSink, Priority};

/// One call observed by a [`RecordingSink`].
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Record {
    /// Priority the call was made with.
    pub priority: Priority,
    /// Tag the call was made with.
    pub tag: String,
    /// Text handed to the sink.
    pub text: String,
}

impl Record {
    /// Builds a record, mostly for comparisons in assertions.
    pub fn new(priority: Priority, tag: &str, text: &str) -> Self {
        Self {
            priority,
            tag: tag.to_owned(),
            text: text.to_owned(),
        }
    }
}

/// [`LogSink`] that records every call in order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    records: Mutex<Vec<Record>>,
}

impl RecordingSink {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of everything recorded so far.
    pub fn records(&self) -> Vec<Record> {
        self.lock().clone()
    }

    /// Returns the recorded texts in order.
    pub fn texts(&self) -> Vec<String> {
        self.lock().iter().map(|r| r.text.clone()).collect()
    }

    /// Number of calls received.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Reports whether no call has been received.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Removes and returns everything recorded so far.
    pub fn take(&self) -> Vec<Record> {
        std::mem::take(&mut *self.lock())
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Record>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl LogSink for RecordingSink {
    fn write(&self, priority: Priority, tag: &str, text: &str) -> i32 {
        self.lock().push(Record::new(priority, tag, text));
        i32::try_from(text.len()).unwrap_or(i32::MAX)
    }
}
