// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Workbook export
//!
//! Writes listing entries to a single-sheet `.xlsx` workbook: a bold header
//! row followed by one row per entry, in the order given.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use rust_xlsxwriter::{Format, Workbook, XlsxError};
use svn_listing::ListingEntry;
use tracing::{debug, info};

use crate::error::ExportError;

/// Name of the only worksheet
pub const SHEET_NAME: &str = "SVN File Information";

/// Header row, matching [`ListingEntry::cells`] order
pub const HEADERS: [&str; 5] = ["File Name", "Directory", "Revision", "Author", "Commit Date"];

/// Required file extension
pub const EXTENSION: &str = "xlsx";

const MIN_COLUMN_WIDTH: usize = 10;
const MAX_COLUMN_WIDTH: usize = 80;

/// Append `.xlsx` unless the path already ends with it
#[must_use]
pub fn ensure_xlsx_extension(path: &Path) -> PathBuf {
    let suffix = format!(".{EXTENSION}");
    if path
        .to_string_lossy()
        .to_ascii_lowercase()
        .ends_with(&suffix)
    {
        return path.to_path_buf();
    }

    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(EXTENSION);
    PathBuf::from(name)
}

/// Column widths sized to content, in characters
fn column_widths(entries: &[ListingEntry]) -> [usize; 5] {
    let mut widths = HEADERS.map(|h| h.chars().count());
    for entry in entries {
        for (width, cell) in widths.iter_mut().zip(entry.cells()) {
            *width = (*width).max(cell.chars().count());
        }
    }
    widths.map(|w| (w + 2).clamp(MIN_COLUMN_WIDTH, MAX_COLUMN_WIDTH))
}

fn build_workbook(entries: &[ListingEntry]) -> Result<Workbook, XlsxError> {
    let mut workbook = Workbook::new();
    let header_format = Format::new().set_bold();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, header) in (0u16..).zip(HEADERS) {
        worksheet.write_string_with_format(0, col, header, &header_format)?;
    }

    for (row, entry) in (1u32..).zip(entries) {
        for (col, cell) in (0u16..).zip(entry.cells()) {
            worksheet.write_string(row, col, cell)?;
        }
    }

    for (col, width) in (0u16..).zip(column_widths(entries)) {
        // Widths never exceed MAX_COLUMN_WIDTH, so the cast is exact
        worksheet.set_column_width(col, width as f64)?;
    }
    worksheet.set_freeze_panes(1, 0)?;

    Ok(workbook)
}

/// Write `entries` to a workbook at `path`, replacing any existing file
///
/// # Errors
///
/// Returns `ExportError::WriteFailure` if the workbook cannot be built or
/// the destination cannot be written.
pub fn write_workbook(path: &Path, entries: &[ListingEntry]) -> Result<(), ExportError> {
    let failure = |source| ExportError::WriteFailure {
        path: path.to_path_buf(),
        source,
    };

    debug!(path = %path.display(), rows = entries.len() + 1, "Building workbook");
    let mut workbook = build_workbook(entries).map_err(failure)?;
    workbook.save(path).map_err(failure)?;

    info!(path = %path.display(), entries = entries.len(), "Workbook saved");
    Ok(())
}
