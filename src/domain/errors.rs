// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the tabkit crate.
//!
//! This module defines the error types that can occur when loading settings
//! files or exporting tabular data. All errors use `thiserror` for proper
//! error handling and conversion.

use std::path::PathBuf;
use thiserror::Error;

/// The main error type for settings and export operations.
///
/// This enum represents all possible errors that can occur when reading a
/// settings file, probing files for availability, or exporting tabular data.
/// It is marked as `#[non_exhaustive]` to allow for future additions without
/// breaking backwards compatibility.
///
/// Note that a value that fails to parse as a structured literal is *not* an
/// error: classification recovers by degrading to a less specific type and
/// reporting a warning through the caller's diagnostic sink.
///
/// # Examples
///
/// ```
/// use tabkit::domain::errors::TabkitError;
/// use std::path::PathBuf;
///
/// fn load_something() -> Result<String, TabkitError> {
///     Err(TabkitError::FileNotFound {
///         path: PathBuf::from("settings.ini"),
///     })
/// }
/// ```
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TabkitError {
    /// The referenced path does not exist or is not a regular file.
    #[error("File not found: {}", path.display())]
    FileNotFound {
        /// The path that was not found
        path: PathBuf,
    },

    /// A settings file exists but could not be read or parsed.
    #[error("Failed to load settings from '{}': {message}", path.display())]
    LoadError {
        /// The file being loaded
        path: PathBuf,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to write tabular data to a target file.
    #[error("Failed to export data to '{}': {message}", path.display())]
    ExportError {
        /// The target file
        path: PathBuf,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Failed to read tabular data from a source file.
    #[error("Failed to import data from '{}': {message}", path.display())]
    ImportError {
        /// The source file
        path: PathBuf,
        /// The error message
        message: String,
        /// The underlying error, if any
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An argument failed validation before any I/O was attempted.
    #[error("Invalid input: {message}")]
    InvalidInput {
        /// The error message
        message: String,
    },

    /// An I/O error occurred outside of the load/export paths.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl TabkitError {
    /// Creates a [`TabkitError::LoadError`] without an underlying source.
    pub fn load(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        TabkitError::LoadError {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a [`TabkitError::ExportError`] without an underlying source.
    pub fn export(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        TabkitError::ExportError {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a [`TabkitError::ImportError`] without an underlying source.
    pub fn import(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        TabkitError::ImportError {
            path: path.into(),
            message: message.into(),
            source: None,
        }
    }

    /// Creates a [`TabkitError::InvalidInput`] from a message.
    pub fn invalid(message: impl Into<String>) -> Self {
        TabkitError::InvalidInput {
            message: message.into(),
        }
    }
}

/// A specialized Result type for tabkit operations.
pub type Result<T> = std::result::Result<T, TabkitError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_not_found_error() {
        let error = TabkitError::FileNotFound {
            path: PathBuf::from("missing.ini"),
        };
        assert_eq!(error.to_string(), "File not found: missing.ini");
    }

    #[test]
    fn test_load_error() {
        let error = TabkitError::load("settings.ini", "bad section header");
        assert_eq!(
            error.to_string(),
            "Failed to load settings from 'settings.ini': bad section header"
        );
    }

    #[test]
    fn test_export_error() {
        let error = TabkitError::export("out.parquet", "disk full");
        assert!(error.to_string().contains("out.parquet"));
        assert!(error.to_string().contains("disk full"));
    }

    #[test]
    fn test_import_error() {
        let error = TabkitError::import("in.parquet", "corrupt footer");
        assert!(error.to_string().contains("in.parquet"));
        assert!(error.to_string().contains("corrupt footer"));
    }

    #[test]
    fn test_invalid_input_error() {
        let error = TabkitError::invalid("empty DataFrame");
        assert_eq!(error.to_string(), "Invalid input: empty DataFrame");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error = TabkitError::from(io_error);
        assert!(matches!(error, TabkitError::IoError(_)));
    }

    #[test]
    fn test_not_found_distinct_from_load_error() {
        let not_found = TabkitError::FileNotFound {
            path: PathBuf::from("a.ini"),
        };
        let load = TabkitError::load("a.ini", "unreadable");
        assert!(matches!(not_found, TabkitError::FileNotFound { .. }));
        assert!(matches!(load, TabkitError::LoadError { .. }));
    }
}
