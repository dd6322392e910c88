// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities and mock implementations for testing.
//!
//! This module provides a recording diagnostic sink that can be used across
//! different test files to assert on emitted messages.

use std::sync::Mutex;
use tabkit::ports::{DiagnosticSink, LogLevel};

/// A diagnostic sink that records every message for later inspection.
#[derive(Debug, Default)]
pub struct RecordingSink {
    messages: Mutex<Vec<(LogLevel, String)>>,
}

impl RecordingSink {
    /// Creates an empty recording sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all recorded messages.
    #[allow(dead_code)]
    pub fn messages(&self) -> Vec<(LogLevel, String)> {
        self.messages.lock().unwrap().clone()
    }

    /// Counts recorded messages at one level.
    #[allow(dead_code)]
    pub fn count(&self, level: LogLevel) -> usize {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .count()
    }

    /// Returns `true` if any message at `level` contains `needle`.
    #[allow(dead_code)]
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.messages
            .lock()
            .unwrap()
            .iter()
            .any(|(l, message)| *l == level && message.contains(needle))
    }
}

impl DiagnosticSink for RecordingSink {
    fn log(&self, level: LogLevel, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push((level, message.to_string()));
    }
}
