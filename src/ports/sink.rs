// SPDX-License-Identifier: MIT OR Apache-2.0

//! Diagnostic sink trait definition.
//!
//! This module defines the `DiagnosticSink` trait, the port through which
//! loading and export operations report leveled messages. Every entry point
//! that can produce diagnostics takes an explicit sink reference; nothing in
//! the crate logs through ambient global state.

use std::fmt;

/// Severity of a diagnostic message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Developer-oriented detail.
    Debug,
    /// Normal progress reporting.
    Info,
    /// A recoverable problem; the operation continued.
    Warning,
    /// A failure; the operation did not complete.
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LogLevel::Debug => "DEBUG",
            LogLevel::Info => "INFO",
            LogLevel::Warning => "WARNING",
            LogLevel::Error => "ERROR",
        };
        write!(f, "{}", name)
    }
}

/// A sink for leveled diagnostic messages.
///
/// Implementations decide where messages go — a tracing subscriber, a
/// logfile, a test buffer. Callers never consume a return value from the
/// sink; reporting is strictly one-way.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so a single sink can be shared
/// across operations.
///
/// # Examples
///
/// ```
/// use tabkit::ports::sink::{DiagnosticSink, LogLevel};
///
/// struct StderrSink;
///
/// impl DiagnosticSink for StderrSink {
///     fn log(&self, level: LogLevel, message: &str) {
///         eprintln!("[{}] {}", level, message);
///     }
/// }
///
/// let sink = StderrSink;
/// sink.info("loaded 3 sections");
/// ```
pub trait DiagnosticSink: Send + Sync {
    /// Records one message at the given level.
    fn log(&self, level: LogLevel, message: &str);

    /// Records a debug-level message.
    fn debug(&self, message: &str) {
        self.log(LogLevel::Debug, message);
    }

    /// Records an info-level message.
    fn info(&self, message: &str) {
        self.log(LogLevel::Info, message);
    }

    /// Records a warning-level message.
    fn warning(&self, message: &str) {
        self.log(LogLevel::Warning, message);
    }

    /// Records an error-level message.
    fn error(&self, message: &str) {
        self.log(LogLevel::Error, message);
    }
}
