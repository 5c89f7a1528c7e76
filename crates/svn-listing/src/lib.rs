// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! svn-listing: Subversion listing processing for svn-inventory
//!
//! This library crate parses the output of `svn list -R --verbose`, filters
//! records by wildcard patterns and resolves them into spreadsheet-ready
//! entries.
//!
//! # Example
//!
//! ```
//! use svn_listing::{FilterSet, parse_listing};
//!
//! let output = "  12 alice 2048 Jan 01 2023 folder/file.dwg\n  13 bob  Jan 02 2023 folder/\n";
//! let filters = FilterSet::parse("*.dwg").expect("filters");
//! let entries = parse_listing(output, "http://host/repo", filters);
//!
//! assert_eq!(entries.len(), 1);
//! assert_eq!(entries[0].directory_path, "http://host/repo/folder");
//! ```

#![warn(missing_docs)]

pub mod entry;
pub mod error;
pub mod filter;
pub mod parser;
pub mod path;

pub use entry::ListingEntry;
pub use error::ListingError;
pub use filter::{FilterSet, WildcardPattern};
pub use parser::{ListingScanner, ParsedLine, parse_line, parse_listing};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::entry::ListingEntry;
    pub use crate::error::ListingError;
    pub use crate::filter::FilterSet;
    pub use crate::parser::{ListingScanner, ParsedLine, parse_line};
}
