// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for export runs

use std::path::PathBuf;

use svn_client::ClientError;
use svn_listing::ListingError;
use thiserror::Error;

use crate::i18n::{Catalog, Field};

/// Reasons an export run can fail
///
/// Every variant is terminal for the run. [`ExportError::localized`] renders
/// the message shown to the user.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Required inputs were left empty
    #[error("Missing required fields: {0:?}")]
    MissingFields(Vec<Field>),

    /// Repository URL does not start with a supported scheme
    #[error("Invalid repository URL: {url}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
    },

    /// The command-line client is not installed
    #[error("Command-line client not found: {program}")]
    ToolNotFound {
        /// Program that was looked up
        program: String,
    },

    /// The client exited with a non-zero status
    #[error("Listing failed with exit code {code}: {stderr}")]
    ProcessFailure {
        /// Exit code, `-1` when killed by a signal
        code: i32,
        /// Error text captured from the client
        stderr: String,
    },

    /// The client produced no output on either stream
    #[error("Listing produced no output")]
    EmptyOutput,

    /// The client wrote diagnostics but no listing text
    #[error("Listing text is empty")]
    BlankListing,

    /// Neither configured encoding could decode the output
    #[error("Could not decode listing as {primary} or {secondary}")]
    EncodingFailure {
        /// Encoding tried first
        primary: &'static str,
        /// Encoding tried on retry
        secondary: &'static str,
    },

    /// An encoding label was not recognised
    #[error("Unknown text encoding: {label}")]
    UnknownEncoding {
        /// The label as supplied
        label: String,
    },

    /// A filter pattern could not be compiled
    #[error("Invalid filter: {0}")]
    InvalidFilter(#[from] ListingError),

    /// Nothing survived parsing and filtering
    #[error("No matching files found")]
    NoMatchingFiles,

    /// The workbook could not be written
    #[error("Failed to write workbook {path}: {source}")]
    WriteFailure {
        /// Destination that failed
        path: PathBuf,
        /// Underlying writer error
        source: rust_xlsxwriter::XlsxError,
    },

    /// Another run is still active
    #[error("An export is already running")]
    Busy,

    /// The run was cancelled before completing
    #[error("Export cancelled")]
    Cancelled,

    /// Error spawning or waiting for the client
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The worker task stopped unexpectedly
    #[error("Export worker failed: {0}")]
    Worker(String),
}

impl From<ClientError> for ExportError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::InvalidUrl { url } => Self::InvalidUrl { url },
            ClientError::ToolNotFound { program } => Self::ToolNotFound { program },
            ClientError::ProcessFailure { code, stderr } => Self::ProcessFailure { code, stderr },
            ClientError::EmptyOutput => Self::EmptyOutput,
            ClientError::EncodingFailure { primary, secondary } => {
                Self::EncodingFailure { primary, secondary }
            }
            ClientError::UnknownEncoding { label } => Self::UnknownEncoding { label },
            ClientError::Io(e) => Self::Io(e),
        }
    }
}

impl ExportError {
    /// Render the error for the user in the catalog's language
    #[must_use]
    pub fn localized(&self, catalog: &Catalog) -> String {
        match self {
            Self::MissingFields(fields) => catalog.missing_fields(fields),
            Self::InvalidUrl { .. } => catalog.invalid_url().to_string(),
            Self::ToolNotFound { .. } => catalog.tool_not_found().to_string(),
            Self::ProcessFailure { stderr, .. } => catalog.process_failure(stderr),
            Self::EmptyOutput => catalog.no_output().to_string(),
            Self::BlankListing => catalog.blank_listing().to_string(),
            Self::EncodingFailure { .. } => catalog.encoding_failure().to_string(),
            Self::InvalidFilter(e) => catalog.invalid_filter(e),
            Self::NoMatchingFiles => catalog.no_files().to_string(),
            Self::WriteFailure { path, source } => catalog.write_failure(path, source),
            Self::Busy => catalog.busy().to_string(),
            Self::Cancelled => catalog.cancelled().to_string(),
            Self::UnknownEncoding { .. } | Self::Io(_) | Self::Worker(_) => catalog.general(self),
        }
    }
}
