// SPDX-License-Identifier: MIT OR Apache-2.0

//! Logfile-backed diagnostic sink adapter.
//!
//! This module provides a sink that appends timestamped lines to a logfile
//! and optionally echoes them to the terminal, for batch scripts that keep
//! a plain-text run log next to their output files.

use crate::ports::{DiagnosticSink, LogLevel};
use chrono::Local;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// A diagnostic sink that appends to a logfile.
///
/// Each message is written as one line, `YYYY-MM-DD HH:MM:SS [LEVEL] text`.
/// Warnings and errors are always echoed to stderr; info and debug messages
/// are echoed to stdout only when screen output is enabled. A message that
/// cannot be written to the logfile falls back to stderr so it is never
/// silently dropped.
///
/// The logfile's parent directory is created on first write if needed.
///
/// # Examples
///
/// ```rust,no_run
/// use tabkit::adapters::file_log::FileLogSink;
/// use tabkit::ports::DiagnosticSink;
///
/// let sink = FileLogSink::new("run.log").with_screen(false);
/// sink.info("export started");
/// ```
#[derive(Clone, Debug)]
pub struct FileLogSink {
    /// Logfile path
    path: PathBuf,
    /// Whether info/debug messages are echoed to stdout
    screen: bool,
}

impl FileLogSink {
    /// Creates a sink writing to `path`, with screen echo enabled.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        FileLogSink {
            path: path.as_ref().to_path_buf(),
            screen: true,
        }
    }

    /// Sets whether info/debug messages are echoed to stdout.
    ///
    /// Warnings and errors are echoed regardless of this setting.
    pub fn with_screen(mut self, screen: bool) -> Self {
        self.screen = screen;
        self
    }

    /// Returns the logfile path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn append(&self, line: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(file, "{}", line)
    }
}

impl DiagnosticSink for FileLogSink {
    fn log(&self, level: LogLevel, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S");
        let line = format!("{} [{}] {}", timestamp, level, message);

        match level {
            LogLevel::Warning | LogLevel::Error => eprintln!("{}", line),
            LogLevel::Info | LogLevel::Debug => {
                if self.screen {
                    println!("{}", message);
                }
            }
        }

        if let Err(err) = self.append(&line) {
            eprintln!(
                "ERROR: Could not write to logfile '{}': {}",
                self.path.display(),
                err
            );
        }
    }
}
