// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Persisted user settings
//!
//! Settings live in a small JSON file and remember what the user typed last
//! time: recent repository URLs, username, destination, filters and
//! language. The password is never stored.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::i18n::Language;
use crate::pipeline::ExportRequest;

/// Number of repository URLs remembered
pub const MAX_RECENT_URLS: usize = 10;

/// File name inside the settings directory
pub const SETTINGS_FILE: &str = "settings.json";

/// Settings errors
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The file could not be read or written
    #[error("Settings file {path}: {source}")]
    Io {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: std::io::Error,
    },

    /// The file is not valid settings JSON
    #[error("Malformed settings file {path}: {source}")]
    Json {
        /// File involved
        path: PathBuf,
        /// Underlying error
        source: serde_json::Error,
    },
}

/// Values remembered between runs
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Repository URLs, most recent first
    pub recent_urls: Vec<String>,
    /// Last account name
    pub username: Option<String>,
    /// Last workbook destination
    pub output_path: Option<PathBuf>,
    /// Last filter string
    pub filters: Option<String>,
    /// Interface language
    pub language: Language,
}

/// Default location of the settings file
///
/// `<config dir>/svn-inventory/settings.json`, falling back to the current
/// directory when the platform has no config dir.
#[must_use]
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("svn-inventory")
        .join(SETTINGS_FILE)
}

impl Settings {
    /// Load settings from `path`
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, SettingsError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        let mut settings: Self =
            serde_json::from_str(&text).map_err(|source| SettingsError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        settings.tidy_recent_urls();
        debug!(path = %path.display(), recent = settings.recent_urls.len(), "Loaded settings");
        Ok(settings)
    }

    /// Write settings to `path`, creating parent directories as needed
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), SettingsError> {
        let io_error = |source| SettingsError::Io {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let json = serde_json::to_string_pretty(self).map_err(|source| SettingsError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        fs::write(path, json).map_err(io_error)?;

        debug!(path = %path.display(), "Saved settings");
        Ok(())
    }

    /// Most recently used URL
    #[must_use]
    pub fn last_url(&self) -> Option<&str> {
        self.recent_urls.first().map(String::as_str)
    }

    /// Move `url` to the front of the recent list
    ///
    /// Blank URLs are ignored. The list never holds duplicates or more than
    /// [`MAX_RECENT_URLS`] entries.
    pub fn remember_url(&mut self, url: &str) {
        let url = url.trim();
        if url.is_empty() {
            return;
        }
        self.recent_urls.retain(|u| u != url);
        self.recent_urls.insert(0, url.to_string());
        self.recent_urls.truncate(MAX_RECENT_URLS);
    }

    /// Record the inputs of a run that is starting
    ///
    /// Only non-empty values overwrite what is stored.
    pub fn record_run(&mut self, request: &ExportRequest) {
        self.remember_url(&request.url);
        if !request.username.trim().is_empty() {
            self.username = Some(request.username.trim().to_string());
        }
        if !request.output.as_os_str().is_empty() {
            self.output_path = Some(request.output.clone());
        }
        if !request.filters.trim().is_empty() {
            self.filters = Some(request.filters.trim().to_string());
        }
    }

    fn tidy_recent_urls(&mut self) {
        let stored = std::mem::take(&mut self.recent_urls);
        for url in stored.iter().rev() {
            self.remember_url(url);
        }
    }
}
