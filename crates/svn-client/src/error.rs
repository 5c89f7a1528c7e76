// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for svn-client

use thiserror::Error;

/// Errors that can occur while invoking the command-line client
#[derive(Debug, Error)]
pub enum ClientError {
    /// Repository URL does not start with a supported scheme
    #[error("Invalid repository URL: {url}")]
    InvalidUrl {
        /// The rejected URL
        url: String,
    },

    /// The client binary could not be started
    #[error("Command-line client not found: {program}")]
    ToolNotFound {
        /// Program that was looked up
        program: String,
    },

    /// The client exited with a non-zero status
    #[error("Command failed with exit code {code}: {stderr}")]
    ProcessFailure {
        /// Exit code, `-1` when the process was killed by a signal
        code: i32,
        /// Captured standard error text
        stderr: String,
    },

    /// The client succeeded but wrote nothing to either stream
    #[error("Command produced no output")]
    EmptyOutput,

    /// Output could not be decoded with either configured encoding
    #[error("Could not decode command output as {primary} or {secondary}")]
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

    /// Error spawning or waiting for the process
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
