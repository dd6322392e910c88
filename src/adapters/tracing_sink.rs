// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tracing-backed diagnostic sink adapter.
//!
//! This module provides a sink that forwards leveled messages to the
//! `tracing` ecosystem, so library diagnostics land in whatever subscriber
//! the host application has installed.

use crate::ports::{DiagnosticSink, LogLevel};

/// A diagnostic sink that forwards to `tracing`.
///
/// # Examples
///
/// ```
/// use tabkit::adapters::tracing_sink::TracingSink;
/// use tabkit::ports::DiagnosticSink;
///
/// let sink = TracingSink::new();
/// sink.info("settings loaded");
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// Creates a new tracing sink.
    pub fn new() -> Self {
        TracingSink
    }
}

impl DiagnosticSink for TracingSink {
    fn log(&self, level: LogLevel, message: &str) {
        match level {
            LogLevel::Debug => tracing::debug!("{}", message),
            LogLevel::Info => tracing::info!("{}", message),
            LogLevel::Warning => tracing::warn!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
        }
    }
}
