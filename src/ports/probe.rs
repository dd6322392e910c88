// SPDX-License-Identifier: MIT OR Apache-2.0

//! File-lock probe trait definition.
//!
//! This module defines the `LockProbe` trait, the port used by the
//! availability checker to decide whether an existing file is currently
//! locked by another process.

use crate::domain::Result;
use std::path::Path;

/// A probe that reports whether a file is locked.
///
/// The availability checker consults a probe for every path that exists; a
/// probe never decides existence itself. Separating the probe keeps the
/// checker testable without arranging real file locks.
///
/// # Examples
///
/// ```
/// use tabkit::ports::probe::LockProbe;
/// use tabkit::domain::Result;
/// use std::path::Path;
///
/// struct NeverLocked;
///
/// impl LockProbe for NeverLocked {
///     fn is_locked(&self, _path: &Path) -> Result<bool> {
///         Ok(false)
///     }
/// }
///
/// let probe = NeverLocked;
/// assert!(!probe.is_locked(Path::new("data.xlsx")).unwrap());
/// ```
pub trait LockProbe: Send + Sync {
    /// Returns `true` if the file at `path` is locked by another process.
    ///
    /// A missing file is not locked; probes should return `Ok(false)` for
    /// paths that do not exist rather than an error.
    fn is_locked(&self, path: &Path) -> Result<bool>;
}
