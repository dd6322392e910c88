// SPDX-License-Identifier: MIT OR Apache-2.0

//! Adapters layer containing concrete implementations.
//!
//! This module contains the concrete implementations behind the ports
//! layer: the INI settings file driver, the diagnostic sinks, the file
//! availability checker, and the feature-gated Parquet and Excel exporters.

pub mod file_check;
pub mod file_log;
pub mod ini_file;
#[cfg(feature = "parquet")]
pub mod parquet_file;
pub mod tracing_sink;
#[cfg(feature = "xlsx")]
pub mod xlsx_file;

// Re-export adapters based on feature flags
pub use file_check::{
    files_availability_check, files_availability_check_with, is_file_locked,
    set_working_directory, StdLockProbe,
};
pub use file_log::FileLogSink;
pub use ini_file::{load_document, load_document_validated, load_settings, IniDocument};
pub use tracing_sink::TracingSink;

#[cfg(feature = "parquet")]
pub use parquet_file::{export_to_parquet, import_parquet, read_parquet, write_parquet};
#[cfg(feature = "xlsx")]
pub use xlsx_file::{
    export_pivot_to_excel, export_to_excel, write_excel, write_pivot_excel, XlsxExportOptions,
    XlsxTableOptions,
};
