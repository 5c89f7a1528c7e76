// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Subversion command runner
//!
//! [`SvnClient`] probes for the client binary and runs recursive verbose
//! listings, returning decoded text.

use std::io;

use tracing::{debug, info, warn};

use crate::decode::{DecodePolicy, decode_strict};
use crate::error::ClientError;
use crate::executor::{CommandExecutor, Invocation, RawOutput, SystemExecutor};
use crate::request::ListRequest;

/// Default client program name
pub const DEFAULT_PROGRAM: &str = "svn";

/// Locale forced on the client so it emits file names in a decodable form
pub const CLIENT_LOCALE: &str = "zh_CN.UTF-8";

/// Text captured from a successful listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListOutput {
    /// Decoded standard output
    pub text: String,
    /// Name of the encoding that decoded the output
    pub encoding: &'static str,
    /// Whether the command had to be re-run with the secondary encoding
    pub retried: bool,
}

/// Runs the Subversion command-line client
#[derive(Debug, Clone)]
pub struct SvnClient<E = SystemExecutor> {
    program: String,
    executor: E,
    decoding: DecodePolicy,
}

impl SvnClient<SystemExecutor> {
    /// Create a client that runs `svn` from `PATH`
    #[must_use]
    pub fn new() -> Self {
        Self::with_executor(SystemExecutor)
    }
}

impl Default for SvnClient<SystemExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: CommandExecutor> SvnClient<E> {
    /// Create a client backed by a custom executor
    #[must_use]
    pub fn with_executor(executor: E) -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            executor,
            decoding: DecodePolicy::default(),
        }
    }

    /// Use a different client binary
    #[must_use]
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Use a different decoding policy
    #[must_use]
    pub fn decoding(mut self, decoding: DecodePolicy) -> Self {
        self.decoding = decoding;
        self
    }

    /// The client binary
    #[must_use]
    pub fn program_name(&self) -> &str {
        &self.program
    }

    /// The decoding policy
    #[must_use]
    pub fn decode_policy(&self) -> DecodePolicy {
        self.decoding
    }

    /// Check that the client can be started
    ///
    /// Runs `<client> --version` and returns the first line of its output.
    /// The exit status is not inspected; being able to spawn the binary is
    /// enough.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::ToolNotFound` if the process cannot be spawned.
    pub fn probe(&self) -> Result<String, ClientError> {
        let invocation = Invocation::new(&self.program).args(["--version", "--quiet"]);
        let output = self.executor.execute(&invocation).map_err(|e| {
            debug!(program = %self.program, error = %e, "Client probe failed");
            ClientError::ToolNotFound {
                program: self.program.clone(),
            }
        })?;

        let version = String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .unwrap_or_default()
            .trim()
            .to_string();
        info!(program = %self.program, version = %version, "Found command-line client");
        Ok(version)
    }

    /// Run a recursive verbose listing
    ///
    /// Output is decoded with the primary encoding. If that fails the
    /// command is run again and decoded with the secondary encoding.
    ///
    /// # Errors
    ///
    /// - `ClientError::ProcessFailure` on a non-zero exit, carrying stderr
    /// - `ClientError::EmptyOutput` if both streams are empty
    /// - `ClientError::EncodingFailure` if neither encoding decodes the output
    /// - `ClientError::ToolNotFound` if the binary disappears between probe and run
    pub fn list(&self, request: &ListRequest) -> Result<ListOutput, ClientError> {
        let invocation = self.invocation(request);
        info!(command = %request.masked_command_line(&self.program), "Executing listing");

        let primary = self.decoding.primary();
        let raw = self.run(&invocation)?;
        if let Some(output) = Self::decode(primary, &raw) {
            return Self::finish(raw.code, output, primary.name(), false);
        }

        let secondary = self.decoding.secondary();
        warn!(
            primary = primary.name(),
            secondary = secondary.name(),
            "Output is not valid in the primary encoding, retrying"
        );
        let raw = self.run(&invocation)?;
        match Self::decode(secondary, &raw) {
            Some(output) => Self::finish(raw.code, output, secondary.name(), true),
            None => Err(self.decoding.failure()),
        }
    }

    fn invocation(&self, request: &ListRequest) -> Invocation {
        Invocation::new(&self.program)
            .args(request.args())
            .env("LANG", CLIENT_LOCALE)
            .env("LC_ALL", CLIENT_LOCALE)
    }

    fn run(&self, invocation: &Invocation) -> Result<RawOutput, ClientError> {
        self.executor.execute(invocation).map_err(|e| match e.kind() {
            io::ErrorKind::NotFound => ClientError::ToolNotFound {
                program: self.program.clone(),
            },
            _ => ClientError::Io(e),
        })
    }

    /// Decode both streams, or neither
    fn decode(
        encoding: &'static encoding_rs::Encoding,
        raw: &RawOutput,
    ) -> Option<(String, String)> {
        Some((
            decode_strict(encoding, &raw.stdout)?,
            decode_strict(encoding, &raw.stderr)?,
        ))
    }

    fn finish(
        code: Option<i32>,
        (stdout, stderr): (String, String),
        encoding: &'static str,
        retried: bool,
    ) -> Result<ListOutput, ClientError> {
        if code != Some(0) {
            let code = code.unwrap_or(-1);
            let stderr = if stderr.trim().is_empty() {
                "Unknown error".to_string()
            } else {
                stderr.trim_end().to_string()
            };
            warn!(code, error = %stderr, "Listing command failed");
            return Err(ClientError::ProcessFailure { code, stderr });
        }

        if stdout.is_empty() && stderr.is_empty() {
            warn!("Listing command produced no output");
            return Err(ClientError::EmptyOutput);
        }

        info!(encoding, bytes = stdout.len(), "Listing command succeeded");
        Ok(ListOutput {
            text: stdout,
            encoding,
            retried,
        })
    }
}
