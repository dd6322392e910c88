// SPDX-License-Identifier: MIT OR Apache-2.0

//! Parquet export and import adapter.
//!
//! This module provides thin wrappers around the polars Parquet reader and
//! writer: extension and emptiness validation up front, parent-directory
//! handling, and the logged bool/option-returning entry points batch scripts
//! call.

use crate::domain::{Result, TabkitError};
use crate::ports::DiagnosticSink;
use polars::prelude::{DataFrame, ParquetCompression, ParquetReader, ParquetWriter, SerReader};
use std::fs::File;
use std::path::Path;

/// Writes a DataFrame to a Parquet file.
///
/// The target must carry a `.parquet` extension and the frame must not be
/// empty. Missing parent directories are created.
///
/// # Errors
///
/// * [`TabkitError::InvalidInput`] - wrong extension or empty frame
/// * [`TabkitError::ExportError`] - the file could not be created or written
pub fn write_parquet(
    df: &mut DataFrame,
    path: &Path,
    compression: ParquetCompression,
) -> Result<()> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("parquet") {
        return Err(TabkitError::invalid(format!(
            "File '{}' does not have a '.parquet' extension",
            path.display()
        )));
    }
    if df.is_empty() {
        return Err(TabkitError::invalid(
            "The DataFrame is empty and cannot be exported",
        ));
    }

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path).map_err(|err| TabkitError::ExportError {
        path: path.to_path_buf(),
        message: "could not create file".to_string(),
        source: Some(Box::new(err)),
    })?;

    ParquetWriter::new(file)
        .with_compression(compression)
        .finish(df)
        .map_err(|err| TabkitError::ExportError {
            path: path.to_path_buf(),
            message: "parquet write failed".to_string(),
            source: Some(Box::new(err)),
        })?;

    Ok(())
}

/// Reads a Parquet file into a DataFrame.
///
/// # Errors
///
/// * [`TabkitError::InvalidInput`] - the path has no `.parquet` extension
/// * [`TabkitError::FileNotFound`] - the file does not exist
/// * [`TabkitError::ImportError`] - the file could not be read
pub fn read_parquet(path: &Path) -> Result<DataFrame> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("parquet") {
        return Err(TabkitError::invalid(format!(
            "File '{}' does not have a '.parquet' extension",
            path.display()
        )));
    }
    if !path.is_file() {
        return Err(TabkitError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let file = File::open(path).map_err(|err| TabkitError::ImportError {
        path: path.to_path_buf(),
        message: "could not open file".to_string(),
        source: Some(Box::new(err)),
    })?;

    ParquetReader::new(file)
        .finish()
        .map_err(|err| TabkitError::ImportError {
            path: path.to_path_buf(),
            message: "parquet read failed".to_string(),
            source: Some(Box::new(err)),
        })
}

/// Exports a DataFrame to Parquet, reporting the outcome.
///
/// Any failure is reported once through `sink` at error level and surfaces
/// as `false`. When a missing parent directory had to be created, that is
/// reported at info level.
///
/// # Examples
///
/// ```rust,no_run
/// use polars::prelude::*;
/// use tabkit::adapters::parquet_file::export_to_parquet;
/// use tabkit::adapters::tracing_sink::TracingSink;
///
/// # let mut df = df!("a" => [1, 2, 3]).unwrap();
/// let sink = TracingSink::new();
/// let ok = export_to_parquet(
///     &mut df,
///     "out/values.parquet".as_ref(),
///     ParquetCompression::Snappy,
///     &sink,
/// );
/// assert!(ok);
/// ```
pub fn export_to_parquet(
    df: &mut DataFrame,
    path: &Path,
    compression: ParquetCompression,
    sink: &dyn DiagnosticSink,
) -> bool {
    let parent_missing = path
        .parent()
        .map(|parent| !parent.as_os_str().is_empty() && !parent.exists())
        .unwrap_or(false);

    match write_parquet(df, path, compression) {
        Ok(()) => {
            if parent_missing {
                if let Some(parent) = path.parent() {
                    sink.info(&format!("Directory '{}' was created", parent.display()));
                }
            }
            sink.info(&format!(
                "DataFrame exported to '{}' successfully",
                path.display()
            ));
            true
        }
        Err(err) => {
            sink.error(&err.to_string());
            false
        }
    }
}

/// Imports a Parquet file, reporting the outcome.
///
/// Failures are reported through `sink` and surface as `None`.
pub fn import_parquet(path: &Path, sink: &dyn DiagnosticSink) -> Option<DataFrame> {
    match read_parquet(path) {
        Ok(df) => {
            sink.info(&format!(
                "Parquet file '{}' imported successfully",
                path.display()
            ));
            Some(df)
        }
        Err(err) => {
            sink.error(&err.to_string());
            None
        }
    }
}
