// SPDX-License-Identifier: MIT OR Apache-2.0

//! Excel export adapter.
//!
//! This module writes DataFrames to `.xlsx` workbooks: a plain sheet layout
//! with a header row, and a 2-D pivot ("clean table") layout with unique
//! row and column labels. Table styling, a frozen header row, and per-column
//! number formats and widths are applied at write time.

use crate::domain::{Result, TabkitError};
use crate::ports::DiagnosticSink;
use polars::prelude::{AnyValue, DataFrame};
use rust_xlsxwriter::{Format, Table, TableColumn, TableStyle, Workbook, Worksheet, XlsxError};
use std::collections::HashMap;
use std::path::Path;

/// Excel worksheet name length limit.
const SHEET_NAME_MAX: usize = 31;
/// Characters not allowed in worksheet names.
const SHEET_NAME_ILLEGAL: [char; 7] = ['*', ':', '?', '/', '\\', '[', ']'];

/// Excel table styling applied to an exported sheet.
#[derive(Clone)]
pub struct XlsxTableOptions {
    /// Workbook-unique table name.
    pub name: String,
    /// Built-in table style.
    pub style: TableStyle,
    /// Whether the header row stays visible while scrolling.
    pub freeze_header: bool,
}

// `TableStyle` (rust_xlsxwriter) does not implement `Debug`, so the derive on
// this struct cannot be used. Provide a manual impl that preserves the `Debug`
// API while omitting the un-printable `style` field.
impl std::fmt::Debug for XlsxTableOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("XlsxTableOptions")
            .field("name", &self.name)
            .field("freeze_header", &self.freeze_header)
            .finish_non_exhaustive()
    }
}

impl Default for XlsxTableOptions {
    fn default() -> Self {
        XlsxTableOptions {
            name: "Table1".to_string(),
            style: TableStyle::Medium9,
            freeze_header: true,
        }
    }
}

/// Options for one sheet export.
///
/// When `column_formats` or `column_widths` name fewer entries than the
/// sheet has columns, the last entry applies to every remaining column.
/// Empty lists leave the workbook defaults in place.
#[derive(Clone, Debug)]
pub struct XlsxExportOptions {
    /// Worksheet name; sanitized to Excel's limits before use.
    pub sheet_name: String,
    /// Optional table styling; `None` writes a plain sheet.
    pub table: Option<XlsxTableOptions>,
    /// Number-format strings per column (e.g. `"DD.MM.YY"`, `"#,##0.00"`).
    pub column_formats: Vec<String>,
    /// Column widths in character units.
    pub column_widths: Vec<f64>,
}

impl Default for XlsxExportOptions {
    fn default() -> Self {
        XlsxExportOptions {
            sheet_name: "Sheet1".to_string(),
            table: None,
            column_formats: Vec::new(),
            column_widths: Vec::new(),
        }
    }
}

// Normalized cell content, decoupled from polars' value enum.
#[derive(Clone, Debug)]
enum CellValue {
    Blank,
    Text(String),
    Number(f64),
}

/// Writes a DataFrame as one worksheet.
///
/// The first row carries the column names in bold; data rows follow. The
/// target must have an `.xlsx` extension and the frame must not be empty.
/// Missing parent directories are created.
///
/// # Errors
///
/// * [`TabkitError::InvalidInput`] - wrong extension, empty frame, or a
///   sheet too large for Excel's row/column limits
/// * [`TabkitError::ExportError`] - the workbook could not be written
pub fn write_excel(df: &DataFrame, path: &Path, options: &XlsxExportOptions) -> Result<()> {
    validate_xlsx_target(df, path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let column_names: Vec<String> = df
        .get_column_names_str()
        .into_iter()
        .map(ToString::to_string)
        .collect();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sanitize_sheet_name(&options.sheet_name))
        .map_err(|err| export_error(path, err))?;

    let header_format = Format::new().set_bold();
    for (col, name) in column_names.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col_index(col)?, name, &header_format)
            .map_err(|err| export_error(path, err))?;
    }

    let data_formats = plan_column_formats(&options.column_formats, column_names.len());
    let columns = df.get_columns();
    for row in 0..df.height() {
        for (col, column) in columns.iter().enumerate() {
            let value = column
                .get(row)
                .map_err(|err| TabkitError::invalid(format!("cell access failed: {}", err)))?;
            write_cell(
                worksheet,
                row_index(row + 1)?,
                col_index(col)?,
                &cell_from_any_value(value),
                &data_formats[col],
            )
            .map_err(|err| export_error(path, err))?;
        }
    }

    apply_column_widths(worksheet, &options.column_widths, column_names.len())
        .map_err(|err| export_error(path, err))?;

    if let Some(table_options) = &options.table {
        apply_table(
            worksheet,
            table_options,
            &column_names,
            row_index(df.height())?,
        )
        .map_err(|err| export_error(path, err))?;
    }

    workbook.save(path).map_err(|err| export_error(path, err))?;
    Ok(())
}

/// Writes a long-format DataFrame as a 2-D pivot sheet.
///
/// Cell A1 carries the name of `index_col`; below it, one row per distinct
/// index label in first-appearance order. The remaining header cells carry
/// the distinct labels of `columns_col`, sorted. Each body cell holds the
/// `values_col` entry for its (index, column) pair; pairs that never occur
/// stay blank, and a pair occurring twice is an error.
///
/// # Errors
///
/// * [`TabkitError::InvalidInput`] - wrong extension, empty frame, missing
///   column, or a duplicate (index, column) pair
/// * [`TabkitError::ExportError`] - the workbook could not be written
pub fn write_pivot_excel(
    df: &DataFrame,
    index_col: &str,
    columns_col: &str,
    values_col: &str,
    path: &Path,
    options: &XlsxExportOptions,
) -> Result<()> {
    validate_xlsx_target(df, path)?;

    let index_column = df
        .column(index_col)
        .map_err(|_| TabkitError::invalid(format!("column '{}' not found", index_col)))?;
    let columns_column = df
        .column(columns_col)
        .map_err(|_| TabkitError::invalid(format!("column '{}' not found", columns_col)))?;
    let values_column = df
        .column(values_col)
        .map_err(|_| TabkitError::invalid(format!("column '{}' not found", values_col)))?;

    let mut row_labels: Vec<String> = Vec::new();
    let mut column_labels: Vec<String> = Vec::new();
    let mut cells: HashMap<(String, String), CellValue> = HashMap::new();

    for row in 0..df.height() {
        let row_label = label_text(
            index_column
                .get(row)
                .map_err(|err| TabkitError::invalid(format!("cell access failed: {}", err)))?,
        );
        let column_label = label_text(
            columns_column
                .get(row)
                .map_err(|err| TabkitError::invalid(format!("cell access failed: {}", err)))?,
        );
        let value = cell_from_any_value(
            values_column
                .get(row)
                .map_err(|err| TabkitError::invalid(format!("cell access failed: {}", err)))?,
        );

        if !row_labels.contains(&row_label) {
            row_labels.push(row_label.clone());
        }
        if !column_labels.contains(&column_label) {
            column_labels.push(column_label.clone());
        }

        let previous = cells.insert((row_label.clone(), column_label.clone()), value);
        if previous.is_some() {
            return Err(TabkitError::invalid(format!(
                "duplicate entry for ('{}', '{}')",
                row_label, column_label
            )));
        }
    }
    column_labels.sort();

    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sanitize_sheet_name(&options.sheet_name))
        .map_err(|err| export_error(path, err))?;

    let header_format = Format::new().set_bold();
    worksheet
        .write_string_with_format(0, 0, index_col, &header_format)
        .map_err(|err| export_error(path, err))?;
    for (col, label) in column_labels.iter().enumerate() {
        worksheet
            .write_string_with_format(0, col_index(col + 1)?, label, &header_format)
            .map_err(|err| export_error(path, err))?;
    }

    let width = column_labels.len() + 1;
    let data_formats = plan_column_formats(&options.column_formats, width);
    for (row, row_label) in row_labels.iter().enumerate() {
        let excel_row = row_index(row + 1)?;
        worksheet
            .write_string_with_format(excel_row, 0, row_label, &data_formats[0])
            .map_err(|err| export_error(path, err))?;
        for (col, column_label) in column_labels.iter().enumerate() {
            let cell = cells
                .get(&(row_label.clone(), column_label.clone()))
                .cloned()
                .unwrap_or(CellValue::Blank);
            write_cell(
                worksheet,
                excel_row,
                col_index(col + 1)?,
                &cell,
                &data_formats[col + 1],
            )
            .map_err(|err| export_error(path, err))?;
        }
    }

    apply_column_widths(worksheet, &options.column_widths, width)
        .map_err(|err| export_error(path, err))?;

    if let Some(table_options) = &options.table {
        let mut header: Vec<String> = Vec::with_capacity(width);
        header.push(index_col.to_string());
        header.extend(column_labels.iter().cloned());
        apply_table(
            worksheet,
            table_options,
            &header,
            row_index(row_labels.len())?,
        )
        .map_err(|err| export_error(path, err))?;
    }

    workbook.save(path).map_err(|err| export_error(path, err))?;
    Ok(())
}

/// Exports a DataFrame to Excel, reporting the outcome.
///
/// Failures are reported once through `sink` at error level and surface as
/// `false`.
///
/// # Examples
///
/// ```rust,no_run
/// use polars::prelude::*;
/// use tabkit::adapters::tracing_sink::TracingSink;
/// use tabkit::adapters::xlsx_file::{export_to_excel, XlsxExportOptions, XlsxTableOptions};
///
/// # let df = df!("a" => [1, 2, 3]).unwrap();
/// let sink = TracingSink::new();
/// let options = XlsxExportOptions {
///     table: Some(XlsxTableOptions::default()),
///     ..Default::default()
/// };
/// export_to_excel(&df, "report.xlsx".as_ref(), &options, &sink);
/// ```
pub fn export_to_excel(
    df: &DataFrame,
    path: &Path,
    options: &XlsxExportOptions,
    sink: &dyn DiagnosticSink,
) -> bool {
    match write_excel(df, path, options) {
        Ok(()) => {
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

/// Exports a 2-D pivot sheet, reporting the outcome.
///
/// See [`write_pivot_excel`] for the layout contract.
pub fn export_pivot_to_excel(
    df: &DataFrame,
    index_col: &str,
    columns_col: &str,
    values_col: &str,
    path: &Path,
    options: &XlsxExportOptions,
    sink: &dyn DiagnosticSink,
) -> bool {
    match write_pivot_excel(df, index_col, columns_col, values_col, path, options) {
        Ok(()) => {
            sink.info(&format!(
                "Pivot table exported to '{}' successfully",
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

fn validate_xlsx_target(df: &DataFrame, path: &Path) -> Result<()> {
    if path.extension().and_then(|ext| ext.to_str()) != Some("xlsx") {
        return Err(TabkitError::invalid(format!(
            "File '{}' does not have an '.xlsx' extension",
            path.display()
        )));
    }
    if df.is_empty() {
        return Err(TabkitError::invalid(
            "The DataFrame is empty and cannot be exported",
        ));
    }
    Ok(())
}

fn sanitize_sheet_name(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .map(|c| if SHEET_NAME_ILLEGAL.contains(&c) { '_' } else { c })
        .collect();
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        return "Sheet".to_string();
    }
    trimmed.chars().take(SHEET_NAME_MAX).collect()
}

// Last entry repeats for columns beyond the list, matching the layout rule
// for short format/width lists.
fn plan_column_formats(formats: &[String], width: usize) -> Vec<Format> {
    (0..width)
        .map(|col| {
            if formats.is_empty() {
                Format::new()
            } else {
                let fmt = &formats[col.min(formats.len() - 1)];
                Format::new().set_num_format(fmt)
            }
        })
        .collect()
}

fn apply_column_widths(
    worksheet: &mut Worksheet,
    widths: &[f64],
    width: usize,
) -> std::result::Result<(), XlsxError> {
    if widths.is_empty() {
        return Ok(());
    }
    for col in 0..width.min(u16::MAX as usize) {
        let value = widths[col.min(widths.len() - 1)];
        worksheet.set_column_width(col as u16, value)?;
    }
    Ok(())
}

fn apply_table(
    worksheet: &mut Worksheet,
    options: &XlsxTableOptions,
    header: &[String],
    last_row: u32,
) -> std::result::Result<(), XlsxError> {
    let columns: Vec<TableColumn> = header
        .iter()
        .map(|name| TableColumn::new().set_header(name))
        .collect();
    let table = Table::new()
        .set_name(&options.name)
        .set_style(options.style)
        .set_banded_rows(true)
        .set_banded_columns(false)
        .set_columns(&columns);

    worksheet.add_table(0, 0, last_row, (header.len() - 1) as u16, &table)?;

    if options.freeze_header {
        worksheet.set_freeze_panes(1, 0)?;
    }
    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    format: &Format,
) -> std::result::Result<(), XlsxError> {
    match value {
        CellValue::Blank => {
            worksheet.write_blank(row, col, format)?;
        }
        CellValue::Text(text) => {
            worksheet.write_string_with_format(row, col, text, format)?;
        }
        CellValue::Number(number) => {
            worksheet.write_number_with_format(row, col, *number, format)?;
        }
    }
    Ok(())
}

fn cell_from_any_value(value: AnyValue<'_>) -> CellValue {
    match value {
        AnyValue::Null => CellValue::Blank,
        AnyValue::String(v) => CellValue::Text(v.to_string()),
        AnyValue::StringOwned(v) => CellValue::Text(v.to_string()),
        AnyValue::Boolean(v) => CellValue::Text(if v { "True" } else { "False" }.to_string()),
        AnyValue::UInt8(v) => CellValue::Number(v as f64),
        AnyValue::UInt16(v) => CellValue::Number(v as f64),
        AnyValue::UInt32(v) => CellValue::Number(v as f64),
        AnyValue::UInt64(v) => CellValue::Number(v as f64),
        AnyValue::Int8(v) => CellValue::Number(v as f64),
        AnyValue::Int16(v) => CellValue::Number(v as f64),
        AnyValue::Int32(v) => CellValue::Number(v as f64),
        AnyValue::Int64(v) => CellValue::Number(v as f64),
        AnyValue::Float32(v) => CellValue::Number(v as f64),
        AnyValue::Float64(v) => CellValue::Number(v),
        other => CellValue::Text(other.to_string()),
    }
}

fn label_text(value: AnyValue<'_>) -> String {
    match cell_from_any_value(value) {
        CellValue::Blank => String::new(),
        CellValue::Text(text) => text,
        CellValue::Number(number) => number.to_string(),
    }
}

fn row_index(value: usize) -> Result<u32> {
    u32::try_from(value).map_err(|_| TabkitError::invalid(format!("row index overflow: {}", value)))
}

fn col_index(value: usize) -> Result<u16> {
    u16::try_from(value)
        .map_err(|_| TabkitError::invalid(format!("column index overflow: {}", value)))
}

fn export_error(path: &Path, err: XlsxError) -> TabkitError {
    TabkitError::ExportError {
        path: path.to_path_buf(),
        message: "xlsx write failed".to_string(),
        source: Some(Box::new(err)),
    }
}
