// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Regional text decoding of client output
//!
//! The client writes non-ASCII file names in a locale-dependent encoding.
//! Output is decoded strictly with a primary encoding; when that fails the
//! command is retried and decoded with a secondary one.

use encoding_rs::Encoding;

use crate::error::ClientError;

/// Primary and secondary encodings for client output
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodePolicy {
    primary: &'static Encoding,
    secondary: &'static Encoding,
}

impl DecodePolicy {
    /// Create a policy from two encodings
    #[must_use]
    pub fn new(primary: &'static Encoding, secondary: &'static Encoding) -> Self {
        Self { primary, secondary }
    }

    /// Create a policy from WHATWG encoding labels such as `gb2312` or `utf-8`
    ///
    /// # Errors
    ///
    /// Returns `ClientError::UnknownEncoding` for an unrecognised label.
    pub fn from_labels(primary: &str, secondary: &str) -> Result<Self, ClientError> {
        Ok(Self::new(lookup(primary)?, lookup(secondary)?))
    }

    /// GBK then GB18030 on Windows, UTF-8 then GBK elsewhere
    #[must_use]
    pub fn platform_default() -> Self {
        if cfg!(windows) {
            Self::new(encoding_rs::GBK, encoding_rs::GB18030)
        } else {
            Self::new(encoding_rs::UTF_8, encoding_rs::GBK)
        }
    }

    /// Encoding tried first
    #[must_use]
    pub fn primary(&self) -> &'static Encoding {
        self.primary
    }

    /// Encoding tried on retry
    #[must_use]
    pub fn secondary(&self) -> &'static Encoding {
        self.secondary
    }

    /// Replace the primary encoding
    #[must_use]
    pub fn with_primary(mut self, encoding: &'static Encoding) -> Self {
        self.primary = encoding;
        self
    }

    /// Replace the secondary encoding
    #[must_use]
    pub fn with_secondary(mut self, encoding: &'static Encoding) -> Self {
        self.secondary = encoding;
        self
    }

    /// Replace the primary encoding by label
    ///
    /// # Errors
    ///
    /// Returns `ClientError::UnknownEncoding` for an unrecognised label.
    pub fn with_primary_label(self, label: &str) -> Result<Self, ClientError> {
        Ok(self.with_primary(lookup(label)?))
    }

    /// Replace the secondary encoding by label
    ///
    /// # Errors
    ///
    /// Returns `ClientError::UnknownEncoding` for an unrecognised label.
    pub fn with_secondary_label(self, label: &str) -> Result<Self, ClientError> {
        Ok(self.with_secondary(lookup(label)?))
    }

    pub(crate) fn failure(&self) -> ClientError {
        ClientError::EncodingFailure {
            primary: self.primary.name(),
            secondary: self.secondary.name(),
        }
    }
}

impl Default for DecodePolicy {
    fn default() -> Self {
        Self::platform_default()
    }
}

/// Look up an encoding by label
///
/// # Errors
///
/// Returns `ClientError::UnknownEncoding` for an unrecognised label.
pub fn lookup(label: &str) -> Result<&'static Encoding, ClientError> {
    Encoding::for_label(label.trim().as_bytes()).ok_or_else(|| ClientError::UnknownEncoding {
        label: label.to_string(),
    })
}

/// Decode `bytes` without replacement characters
///
/// Returns `None` if the bytes are malformed for `encoding`.
#[must_use]
pub fn decode_strict(encoding: &'static Encoding, bytes: &[u8]) -> Option<String> {
    encoding
        .decode_without_bom_handling_and_without_replacement(bytes)
        .map(|text| text.into_owned())
}
