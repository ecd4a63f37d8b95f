//! Side channel for human inspection of pruning decisions. Nothing written
//! here influences the search; sinks are injected per [`StateSpace`] so there
//! is no process-wide logger.
//!
//! [`StateSpace`]: crate::search::StateSpace

use std::cell::RefCell;
use std::fmt::{self, Debug};
use std::rc::Rc;
use tracing::trace;

pub trait DiagnosticSink: Debug {
    fn log(&self, message: fmt::Arguments<'_>);
}

/// Forwards messages to `tracing` at trace level.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn log(&self, message: fmt::Arguments<'_>) {
        trace!(target: "reachability::pruning", "{}", message);
    }
}

/// Discards everything.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl DiagnosticSink for Silent {
    fn log(&self, _message: fmt::Arguments<'_>) {}
}

/// Keeps every message in memory. Share it through an [`Rc`] to read the
/// messages back after the search.
#[derive(Debug, Default)]
pub struct Recorder {
    messages: RefCell<Vec<String>>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.messages.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.borrow().is_empty()
    }
}

impl DiagnosticSink for Recorder {
    fn log(&self, message: fmt::Arguments<'_>) {
        self.messages.borrow_mut().push(message.to_string());
    }
}

impl<T: DiagnosticSink> DiagnosticSink for Rc<T> {
    fn log(&self, message: fmt::Arguments<'_>) {
        self.as_ref().log(message)
    }
}
