use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use thiserror::Error;
use umya_spreadsheet::{reader, writer, Worksheet};

use crate::row::{DirectoryRow, COLUMNS};

#[derive(Error, Debug)]
pub enum WorkbookError {
    #[error("Sheet {sheet:?} not found in {}", .path.display())]
    MissingSheet { path: PathBuf, sheet: String },
}

/// Maps every header of the first row to its (1-based) column, header names being trimmed.
fn header_columns(sheet: &Worksheet) -> HashMap<String, u32> {
    let mut columns = HashMap::new();
    for col in 1..=sheet.get_highest_column() {
        let header = sheet.get_value((col, 1u32));
        let header = header.trim();
        if !header.is_empty() {
            columns.entry(header.to_string()).or_insert(col);
        }
    }
    columns
}

/// Last row holding a value, styled but empty cells left aside. The header row counts as used.
fn last_used_row(sheet: &Worksheet) -> u32 {
    let highest_col = sheet.get_highest_column();
    (2..=sheet.get_highest_row())
        .rev()
        .find(|&row| {
            (1..=highest_col).any(|col| !sheet.get_value((col, row)).trim().is_empty())
        })
        .unwrap_or(1)
}

/// Last header column holding a value, 0 when the header row is empty.
fn last_used_column(sheet: &Worksheet) -> u32 {
    (1..=sheet.get_highest_column())
        .rev()
        .find(|&col| !sheet.get_value((col, 1u32)).trim().is_empty())
        .unwrap_or(0)
}

/// Appends `rows` at the end of `sheet_name` and saves the workbook.
///
/// Directory columns missing from the header row are added after the last one.
/// Other sheets are written back untouched. The workbook is saved next to its
/// final location first and renamed over it once complete.
pub fn append_rows(path: &Path, sheet_name: &str, rows: &[DirectoryRow]) -> Result<usize> {
    let mut book = reader::xlsx::read(path)?;

    let sheet = book
        .get_sheet_by_name_mut(sheet_name)
        .ok_or_else(|| WorkbookError::MissingSheet {
            path: path.to_path_buf(),
            sheet: sheet_name.to_string(),
        })?;

    let mut columns = header_columns(sheet);
    let mut next_col = last_used_column(sheet) + 1;
    for name in COLUMNS {
        if !columns.contains_key(name) {
            log::warn!("Adding missing column {name:?} to sheet {sheet_name:?}");
            sheet.get_cell_mut((next_col, 1u32)).set_value_string(name);
            columns.insert(name.to_string(), next_col);
            next_col += 1;
        }
    }

    let first_row = last_used_row(sheet) + 1;
    for (row, values) in (first_row..).zip(rows) {
        for (name, text) in values.text_cells() {
            if !text.is_empty() {
                sheet
                    .get_cell_mut((columns[name], row))
                    .set_value_string(text);
            }
        }
        for (name, coordinate) in values.coordinate_cells() {
            if let Some(coordinate) = coordinate {
                sheet
                    .get_cell_mut((columns[name], row))
                    .set_value_number(coordinate);
            }
        }
    }

    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    let mut tmp = tempfile::Builder::new()
        .prefix(".locales-")
        .suffix(".xlsx")
        .tempfile_in(dir)?;
    writer::xlsx::write_writer(&book, &mut tmp)?;
    tmp.as_file()
        .set_permissions(fs_err::metadata(path)?.permissions())?;
    tmp.persist(path)?;

    Ok(rows.len())
}
