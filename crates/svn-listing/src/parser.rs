// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Verbose listing parsing
//!
//! This module parses the output of `svn list -R --verbose`, one record per
//! line:
//!
//! ```text
//!      12 alice          2048 Jan 01  2023 folder/file.dwg
//!      15 bob                 Mar 04 09:15 folder/
//! ```
//!
//! Fields are revision, author, an optional size (absent for directories),
//! a date followed by either a year or a `HH:MM` time, and the path, which
//! runs to the end of the line and may contain spaces.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::entry::ListingEntry;
use crate::error::ListingError;
use crate::filter::FilterSet;
use crate::path;

static LISTING_LINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+)\s+(\S+)\s+(?:(\d+)\s+)?([^\s]+ \d+(?:\s+\d+|\s+\d+:\d+))\s+(.+)$")
        .expect("Should compile: LISTING_LINE_RE")
});

/// The five fields of one listing record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedLine {
    /// Last-changed revision
    pub revision: String,
    /// Author of the last-changed revision
    pub author: String,
    /// Size in bytes (files only)
    pub size: Option<String>,
    /// Date plus year or time of day, e.g. `Jan 01 2023` or `Mar 04 09:15`
    pub date_time: String,
    /// Path relative to the listed URL
    pub path: String,
}

impl ParsedLine {
    /// Whether the record is a directory
    #[must_use]
    pub fn is_directory(&self) -> bool {
        path::is_directory(&self.path)
    }
}

impl fmt::Display for ParsedLine {
    /// Render the record back in listing layout
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>7} {:<12} {:>8} {} {}",
            self.revision,
            self.author,
            self.size.as_deref().unwrap_or(""),
            self.date_time,
            self.path
        )
    }
}

/// Parse a single listing line
///
/// # Errors
///
/// Returns `ListingError::UnrecognisedLine` if the line does not have the
/// shape of a verbose listing record.
pub fn parse_line(line: &str) -> Result<ParsedLine, ListingError> {
    let trimmed = line.trim();
    let caps = LISTING_LINE_RE
        .captures(trimmed)
        .ok_or_else(|| ListingError::UnrecognisedLine {
            line: trimmed.to_string(),
        })?;

    let field = |i: usize| caps.get(i).map(|m| m.as_str().to_string());

    let parsed = ParsedLine {
        revision: field(1).unwrap_or_default(),
        author: field(2).unwrap_or_default(),
        size: field(3),
        date_time: field(4).unwrap_or_default(),
        path: field(5).unwrap_or_default().trim().to_string(),
    };

    debug!(
        revision = %parsed.revision,
        author = %parsed.author,
        size = parsed.size.as_deref().unwrap_or(""),
        date_time = %parsed.date_time,
        path = %parsed.path,
        "Parsed listing line"
    );

    Ok(parsed)
}

// ============================================================================
// Scanner
// ============================================================================

/// Accumulates entries from listing lines, one line at a time
///
/// Blank lines, directories and paths rejected by the filter are skipped.
/// Entries keep the order in which their lines were seen.
pub struct ListingScanner {
    base_url: String,
    filters: FilterSet,
    entries: Vec<ListingEntry>,
    lines_seen: usize,
    unparsed: usize,
}

impl ListingScanner {
    /// Create a scanner resolving directories against `base_url`
    #[must_use]
    pub fn new(base_url: &str, filters: FilterSet) -> Self {
        Self {
            base_url: path::trim_base_url(base_url).to_string(),
            filters,
            entries: Vec::new(),
            lines_seen: 0,
            unparsed: 0,
        }
    }

    /// Process a single line of output
    ///
    /// Returns the new entry when the line was accepted.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::UnrecognisedLine` if the line cannot be parsed.
    /// The scanner stays usable; callers are expected to log and continue.
    pub fn process_line(&mut self, line: &str) -> Result<Option<&ListingEntry>, ListingError> {
        if line.trim().is_empty() {
            return Ok(None);
        }
        self.lines_seen += 1;

        let parsed = parse_line(line).inspect_err(|_| self.unparsed += 1)?;

        if parsed.is_directory() || !self.filters.matches(&parsed.path) {
            return Ok(None);
        }

        match ListingEntry::from_parsed(&parsed, &self.base_url) {
            Some(entry) => {
                self.entries.push(entry);
                Ok(self.entries.last())
            }
            None => Ok(None),
        }
    }

    /// Accepted entries so far
    #[must_use]
    pub fn entries(&self) -> &[ListingEntry] {
        &self.entries
    }

    /// Number of accepted entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no entry has been accepted
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Non-blank lines processed
    #[must_use]
    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Lines that could not be parsed
    #[must_use]
    pub fn unparsed(&self) -> usize {
        self.unparsed
    }

    /// Finish scanning and take the entries
    #[must_use]
    pub fn into_entries(self) -> Vec<ListingEntry> {
        self.entries
    }
}

/// Parse a complete listing
///
/// Unparseable lines are logged and skipped.
#[must_use]
pub fn parse_listing(output: &str, base_url: &str, filters: FilterSet) -> Vec<ListingEntry> {
    let mut scanner = ListingScanner::new(base_url, filters);
    for line in output.lines() {
        if let Err(e) = scanner.process_line(line) {
            debug!(error = %e, "Skipping listing line");
        }
    }
    scanner.into_entries()
}
