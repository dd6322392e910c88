// SPDX-License-Identifier: MIT OR Apache-2.0

//! Typed INI settings parsing and tabular export helpers.
//!
//! This crate bundles the utility routines shared by batch reporting
//! scripts: reading INI settings files into typed values, exporting
//! DataFrames to Parquet and Excel, checking files for availability before
//! a run, and a small leveled-diagnostics façade the other pieces report
//! through.
//!
//! # Architecture
//!
//! The crate follows hexagonal architecture principles:
//!
//! - **Domain Layer**: Core types and classification logic (`SettingValue`,
//!   `ValueParser`, `Settings`, errors)
//! - **Ports**: Trait definitions that define interfaces (`DiagnosticSink`,
//!   `LockProbe`)
//! - **Adapters**: Implementations for specific concerns (INI files,
//!   tracing/logfile sinks, Parquet, Excel, availability checks)
//!
//! # Settings classification
//!
//! Raw INI values classify through one shared, ordered rule set: bracketed
//! structured literals first, then bare booleans, then unsigned numerics,
//! then comma lists, with a verbatim-string fallback. A structured-looking
//! value that fails to parse degrades instead of failing the load, and the
//! degradation is reported through the caller's diagnostic sink.
//!
//! Two loading conventions coexist because different call sites need
//! different failure contracts:
//!
//! - the *absence-returning* convention ([`adapters::ini_file::load_settings`],
//!   [`adapters::ini_file::load_document`]) logs the cause and yields `None`;
//! - the *validation* convention ([`adapters::ini_file::load_document_validated`])
//!   raises a caller-chosen error type and never logs.
//!
//! # Feature Flags
//!
//! - `parquet`: Enable the Parquet export/import adapter (default)
//! - `xlsx`: Enable the Excel export adapter (default)
//! - `full`: Enable all features
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use tabkit::prelude::*;
//!
//! # fn main() {
//! let sink = TracingSink::new();
//! if let Some(settings) = load_settings("settings.ini", &sink) {
//!     let enabled = settings.get("Export", "enabled");
//!     println!("{:?}", enabled);
//! }
//! # }
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

/// Commonly used types and traits.
///
/// This module re-exports the most commonly used types and traits for convenient access.
pub mod prelude {
    pub use crate::domain::{
        ListSplitPolicy, Result, SectionSettings, SettingValue, Settings, TabkitError, ValueParser,
    };
    pub use crate::ports::{DiagnosticSink, LockProbe, LogLevel};

    pub use crate::adapters::{
        files_availability_check, files_availability_check_with, is_file_locked, load_document,
        load_document_validated, load_settings, set_working_directory, FileLogSink, IniDocument,
        StdLockProbe, TracingSink,
    };

    // Re-export adapters based on feature flags
    #[cfg(feature = "parquet")]
    pub use crate::adapters::{export_to_parquet, import_parquet, read_parquet, write_parquet};
    #[cfg(feature = "xlsx")]
    pub use crate::adapters::{
        export_pivot_to_excel, export_to_excel, write_excel, write_pivot_excel, XlsxExportOptions,
        XlsxTableOptions,
    };
}
