// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for the export helpers and the availability checker.

mod common;

use common::RecordingSink;
use tabkit::adapters::file_check::{files_availability_check, files_availability_check_with};
use tabkit::domain::Result;
use tabkit::ports::{LockProbe, LogLevel};
use tempfile::tempdir;

struct AlwaysLocked;

impl LockProbe for AlwaysLocked {
    fn is_locked(&self, _path: &std::path::Path) -> Result<bool> {
        Ok(true)
    }
}

#[test]
fn test_availability_check_reports_per_path_and_summary() {
    let dir = tempdir().unwrap();
    let present = dir.path().join("present.txt");
    std::fs::write(&present, "x").unwrap();
    let missing = dir.path().join("missing.txt");

    let sink = RecordingSink::new();
    let verdict = files_availability_check(&[present, missing], &sink);

    assert!(!verdict);
    assert!(sink.contains(LogLevel::Info, "present.txt"));
    assert!(sink.contains(LogLevel::Error, "missing.txt"));
    assert!(sink.contains(LogLevel::Info, "1/2 files available"));
}

#[test]
fn test_availability_check_with_locked_probe() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("data.txt");
    std::fs::write(&file, "x").unwrap();

    let sink = RecordingSink::new();
    let verdict = files_availability_check_with(&AlwaysLocked, &[&file], &sink);

    assert!(!verdict);
    assert!(sink.contains(LogLevel::Error, "is locked"));
}

#[cfg(feature = "parquet")]
mod parquet {
    use super::common::RecordingSink;
    use polars::prelude::*;
    use tabkit::adapters::parquet_file::{export_to_parquet, import_parquet};
    use tabkit::ports::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_export_then_import_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("values.parquet");
        let mut df = df!(
            "month" => ["Jan", "Feb", "Mar"],
            "amount" => [10.5f64, 20.0, 30.25]
        )
        .unwrap();

        let sink = RecordingSink::new();
        assert!(export_to_parquet(
            &mut df,
            &path,
            ParquetCompression::Snappy,
            &sink
        ));

        let back = import_parquet(&path, &sink).unwrap();
        assert!(df.equals(&back));
        assert_eq!(sink.count(LogLevel::Error), 0);
    }

    #[test]
    fn test_failed_export_logs_and_returns_false() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("values.txt");
        let mut df = df!("a" => [1i64]).unwrap();

        let sink = RecordingSink::new();
        assert!(!export_to_parquet(
            &mut df,
            &path,
            ParquetCompression::Uncompressed,
            &sink
        ));
        assert_eq!(sink.count(LogLevel::Error), 1);
    }
}

#[cfg(feature = "xlsx")]
mod xlsx {
    use super::common::RecordingSink;
    use polars::prelude::*;
    use tabkit::adapters::xlsx_file::{
        export_pivot_to_excel, export_to_excel, XlsxExportOptions, XlsxTableOptions,
    };
    use tabkit::ports::LogLevel;
    use tempfile::tempdir;

    #[test]
    fn test_export_with_table_formatting() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.xlsx");
        let df = df!(
            "date" => ["01.03.25", "02.03.25"],
            "amount" => [100.0f64, 250.5]
        )
        .unwrap();

        let options = XlsxExportOptions {
            sheet_name: "March".to_string(),
            table: Some(XlsxTableOptions::default()),
            column_formats: vec!["DD.MM.YY".to_string(), "#,##0.00".to_string()],
            column_widths: vec![12.0],
        };

        let sink = RecordingSink::new();
        assert!(export_to_excel(&df, &path, &options, &sink));
        assert!(path.is_file());
        assert_eq!(sink.count(LogLevel::Error), 0);
    }

    #[test]
    fn test_pivot_export_end_to_end() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pivot.xlsx");
        let df = df!(
            "month" => ["Jan", "Jan", "Feb", "Feb"],
            "account" => ["checking", "savings", "checking", "savings"],
            "balance" => [100.0f64, 250.0, 80.0, 260.0]
        )
        .unwrap();

        let sink = RecordingSink::new();
        assert!(export_pivot_to_excel(
            &df,
            "month",
            "account",
            "balance",
            &path,
            &XlsxExportOptions::default(),
            &sink
        ));
        assert!(path.is_file());
    }

    #[test]
    fn test_duplicate_pivot_pair_fails_and_logs() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pivot.xlsx");
        let df = df!(
            "month" => ["Jan", "Jan"],
            "account" => ["checking", "checking"],
            "balance" => [1.0f64, 2.0]
        )
        .unwrap();

        let sink = RecordingSink::new();
        assert!(!export_pivot_to_excel(
            &df,
            "month",
            "account",
            "balance",
            &path,
            &XlsxExportOptions::default(),
            &sink
        ));
        assert_eq!(sink.count(LogLevel::Error), 1);
    }
}
