// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for svn-listing

use thiserror::Error;

/// Errors that can occur while parsing or filtering a listing
#[derive(Debug, Error)]
pub enum ListingError {
    /// A line did not have the shape of a verbose listing record
    #[error("Unrecognised listing line: {line}")]
    UnrecognisedLine {
        /// The offending line, trimmed
        line: String,
    },

    /// A wildcard filter could not be compiled
    #[error("Invalid filter pattern '{pattern}': {source}")]
    InvalidPattern {
        /// The wildcard pattern as supplied by the user
        pattern: String,
        /// Underlying regex compilation error
        source: regex::Error,
    },
}
