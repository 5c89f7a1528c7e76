// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Configuration for the svn-inventory command line
//!
//! Command-line values take precedence over the persisted settings; anything
//! not given on the command line falls back to what the last run stored.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use svn_client::{DecodePolicy, SvnClient, client::DEFAULT_PROGRAM};

use crate::export::ensure_xlsx_extension;
use crate::i18n::Language;
use crate::pipeline::ExportRequest;
use crate::settings::{self, Settings};

/// SVN Inventory - export Subversion file listings to Excel
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "svn-inventory")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Subcommand to run (defaults to exporting)
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Repository URL (http://, https://, svn:// or file:///)
    ///
    /// Defaults to the most recently used URL.
    #[arg(short, long, env = "SVN_INVENTORY_URL")]
    pub url: Option<String>,

    /// Account name
    ///
    /// Defaults to the name used last time.
    #[arg(short = 'U', long, env = "SVN_INVENTORY_USERNAME")]
    pub username: Option<String>,

    /// Account password
    ///
    /// Never written to the settings file or logs.
    #[arg(short, long, env = "SVN_INVENTORY_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    /// Workbook destination; `.xlsx` is appended when missing
    #[arg(short, long, env = "SVN_INVENTORY_OUTPUT")]
    pub output: Option<PathBuf>,

    /// File filters separated by semicolons, e.g. "*.dwg;*.dxf"
    #[arg(short, long)]
    pub filter: Option<String>,

    /// Interface language
    #[arg(short, long, value_enum)]
    pub language: Option<Language>,

    /// Path to the settings file
    ///
    /// Defaults to svn-inventory/settings.json under the platform config
    /// directory.
    #[arg(long, env = "SVN_INVENTORY_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Command-line client to run
    #[arg(long, env = "SVN_INVENTORY_CLIENT")]
    pub svn: Option<String>,

    /// Encoding label tried first when decoding client output
    #[arg(long)]
    pub encoding: Option<String>,

    /// Encoding label tried when the first one fails
    #[arg(long)]
    pub fallback_encoding: Option<String>,

    /// Do not update the settings file
    #[arg(long, default_value = "false")]
    pub no_save: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs and run log lines
    ///
    /// Only errors, warnings and the final result are printed.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print recently used repository URLs, most recent first
    History,
}

impl Config {
    /// Get the settings file path, using the platform default if not specified
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.settings.clone().unwrap_or_else(settings::default_path)
    }

    /// Command-line client program
    #[must_use]
    pub fn client_program(&self) -> &str {
        self.svn.as_deref().unwrap_or(DEFAULT_PROGRAM)
    }

    /// Language from the command line, else from settings
    #[must_use]
    pub fn language(&self, settings: &Settings) -> Language {
        self.language.unwrap_or(settings.language)
    }

    /// Output decoding, with any label overrides applied
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::UnknownEncoding` for an unrecognised label.
    pub fn decode_policy(&self) -> Result<DecodePolicy, ConfigError> {
        let unknown = |label: &str| ConfigError::UnknownEncoding(label.to_string());
        let mut policy = DecodePolicy::platform_default();
        if let Some(label) = &self.encoding {
            policy = policy.with_primary_label(label).map_err(|_| unknown(label))?;
        }
        if let Some(label) = &self.fallback_encoding {
            policy = policy
                .with_secondary_label(label)
                .map_err(|_| unknown(label))?;
        }
        Ok(policy)
    }

    /// Build the client described by this configuration
    ///
    /// # Errors
    ///
    /// Returns an error if an encoding label is not recognised.
    pub fn client(&self) -> Result<SvnClient, ConfigError> {
        Ok(SvnClient::new()
            .program(self.client_program())
            .decoding(self.decode_policy()?))
    }

    /// Merge command-line values over `settings` into a run request
    ///
    /// The password only ever comes from the command line or environment.
    #[must_use]
    pub fn export_request(&self, settings: &Settings) -> ExportRequest {
        let url = self
            .url
            .as_deref()
            .or_else(|| settings.last_url())
            .unwrap_or_default();
        let username = self
            .username
            .as_deref()
            .or(settings.username.as_deref())
            .unwrap_or_default();
        let output = self
            .output
            .clone()
            .or_else(|| settings.output_path.clone())
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| ensure_xlsx_extension(&p))
            .unwrap_or_default();
        let filters = self
            .filter
            .as_deref()
            .or(settings.filters.as_deref())
            .unwrap_or_default();

        ExportRequest::new(
            url,
            username,
            self.password.as_deref().unwrap_or_default(),
            output,
            filters,
        )
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Verbose and quiet are both set
    /// - An encoding label is not recognised
    /// - The settings path is an existing directory
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.verbose && self.quiet {
            return Err(ConfigError::ConflictingVerbosity);
        }

        self.decode_policy()?;

        let path = self.settings_path();
        if path.is_dir() {
            return Err(ConfigError::SettingsPathIsDirectory(path));
        }

        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Both verbosity flags given
    #[error("--verbose and --quiet cannot be used together")]
    ConflictingVerbosity,

    /// Encoding label not recognised
    #[error("Unknown text encoding: {0}")]
    UnknownEncoding(String),

    /// Settings path points at a directory
    #[error("Settings path is a directory: {0}")]
    SettingsPathIsDirectory(PathBuf),
}
