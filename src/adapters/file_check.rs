// SPDX-License-Identifier: MIT OR Apache-2.0

//! File availability checking and working-directory helpers.
//!
//! This module provides the default lock probe and the availability checker
//! that batch jobs run before touching their input and output files: every
//! path must exist and be openable without another process holding a lock
//! on it.

use crate::domain::Result;
use crate::ports::{DiagnosticSink, LockProbe};
use std::fs::{OpenOptions, TryLockError};
use std::path::Path;

/// The default lock probe, backed by OS file locks.
///
/// The probe opens the file for read/write and attempts a non-blocking
/// exclusive lock; a lock held elsewhere reports the file as locked. The
/// lock is released immediately, so the probe observes but never holds.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdLockProbe;

impl StdLockProbe {
    /// Creates a new probe.
    pub fn new() -> Self {
        StdLockProbe
    }
}

impl LockProbe for StdLockProbe {
    fn is_locked(&self, path: &Path) -> Result<bool> {
        if !path.exists() {
            return Ok(false);
        }

        let file = OpenOptions::new().read(true).write(true).open(path)?;
        match file.try_lock() {
            Ok(()) => {
                let _ = file.unlock();
                Ok(false)
            }
            Err(TryLockError::WouldBlock) => Ok(true),
            Err(TryLockError::Error(err)) => Err(err.into()),
        }
    }
}

/// Reports whether the file at `path` is locked by another process.
///
/// Convenience wrapper over [`StdLockProbe`]. A missing file is not locked.
///
/// # Errors
///
/// * [`crate::domain::TabkitError::IoError`] - the file exists but could not
///   be opened or probed
pub fn is_file_locked<P: AsRef<Path>>(path: P) -> Result<bool> {
    StdLockProbe::new().is_locked(path.as_ref())
}

/// Checks that every path exists and is unlocked, using the default probe.
///
/// See [`files_availability_check_with`] for the reporting contract.
pub fn files_availability_check<P: AsRef<Path>>(paths: &[P], sink: &dyn DiagnosticSink) -> bool {
    files_availability_check_with(&StdLockProbe::new(), paths, sink)
}

/// Checks that every path exists and is unlocked.
///
/// Each path gets its own diagnostic: an info line when available, an error
/// line when missing, locked, or unprobeable. A summary line with the
/// available/total counts closes the check. The verdict is `true` only when
/// every path is available; an empty list is trivially available.
///
/// # Examples
///
/// ```rust,no_run
/// use tabkit::adapters::file_check::files_availability_check;
/// use tabkit::adapters::tracing_sink::TracingSink;
///
/// let sink = TracingSink::new();
/// let ready = files_availability_check(&["in.parquet", "out.xlsx"], &sink);
/// if !ready {
///     return;
/// }
/// ```
pub fn files_availability_check_with<P: AsRef<Path>>(
    probe: &dyn LockProbe,
    paths: &[P],
    sink: &dyn DiagnosticSink,
) -> bool {
    if paths.is_empty() {
        sink.info("No files given for the availability check");
        return true;
    }

    let mut all_available = true;
    let mut available = 0usize;

    for path in paths {
        let path = path.as_ref();
        if !path.is_file() {
            sink.error(&format!("File '{}' not found", path.display()));
            all_available = false;
            continue;
        }

        match probe.is_locked(path) {
            Ok(false) => {
                sink.info(&format!("File '{}' is available", path.display()));
                available += 1;
            }
            Ok(true) => {
                sink.error(&format!("File '{}' is locked", path.display()));
                all_available = false;
            }
            Err(err) => {
                sink.error(&format!(
                    "Could not probe file '{}': {}",
                    path.display(),
                    err
                ));
                all_available = false;
            }
        }
    }

    sink.info(&format!(
        "Availability check finished: {}/{} files available",
        available,
        paths.len()
    ));
    all_available
}

/// Switches the process working directory, reporting the outcome.
///
/// The target must be an existing directory; on any failure the working
/// directory is left unchanged and `false` is returned.
pub fn set_working_directory<P: AsRef<Path>>(path: P, sink: &dyn DiagnosticSink) -> bool {
    let path = path.as_ref();

    if !path.is_dir() {
        sink.error(&format!(
            "Path '{}' is not an existing directory",
            path.display()
        ));
        return false;
    }

    match std::env::set_current_dir(path) {
        Ok(()) => {
            sink.info(&format!("Working directory set to '{}'", path.display()));
            true
        }
        Err(err) => {
            sink.error(&format!(
                "Could not set working directory to '{}': {}",
                path.display(),
                err
            ));
            false
        }
    }
}
