// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Export pipeline
//!
//! One run takes the user's inputs through
//! `Idle → Listing → Parsing → Filtering → Exporting → Done`, or to `Failed`
//! at the first error. Progress and user-facing log lines are reported as
//! [`RunEvent`]s; a run ends with exactly one [`RunEvent::Finished`].

use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Local;
use svn_client::{ClientError, CommandExecutor, Credentials, ListRequest, SvnClient};
use svn_listing::{FilterSet, ListingEntry, ListingScanner};
use tokio::sync::mpsc::UnboundedSender;
use tracing::{debug, info, warn};

use crate::error::ExportError;
use crate::export::{ensure_xlsx_extension, write_workbook};
use crate::i18n::{Catalog, Field};

// ============================================================================
// Run Types
// ============================================================================

/// Stage of an export run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    /// Not started
    Idle,
    /// Running the listing command
    Listing,
    /// Parsing listing lines
    Parsing,
    /// Checking what the filters let through
    Filtering,
    /// Writing the workbook
    Exporting,
    /// Finished successfully
    Done,
    /// Finished with an error
    Failed,
}

/// Event emitted while a run progresses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunEvent {
    /// Number of entries accepted so far
    Progress(usize),
    /// Timestamped, translated log line
    Log(String),
    /// Run ended; sent exactly once
    Finished {
        /// Whether the workbook was written
        ok: bool,
        /// Translated summary or error
        message: String,
    },
}

/// Inputs of one export run
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ExportRequest {
    /// Repository URL
    pub url: String,
    /// Account name
    pub username: String,
    /// Account password
    pub password: String,
    /// Workbook destination
    pub output: PathBuf,
    /// Semicolon-separated wildcard filters, empty for none
    pub filters: String,
}

impl fmt::Debug for ExportRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExportRequest")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("output", &self.output)
            .field("filters", &self.filters)
            .finish()
    }
}

impl ExportRequest {
    /// Create a request, trimming surrounding whitespace from every field
    #[must_use]
    pub fn new(
        url: &str,
        username: &str,
        password: &str,
        output: impl Into<PathBuf>,
        filters: &str,
    ) -> Self {
        let output: PathBuf = output.into();
        Self {
            url: url.trim().to_string(),
            username: username.trim().to_string(),
            password: password.trim().to_string(),
            output: PathBuf::from(output.to_string_lossy().trim()),
            filters: filters.trim().to_string(),
        }
    }

    /// Required fields that are empty, in display order
    #[must_use]
    pub fn missing_fields(&self) -> Vec<Field> {
        let mut missing = Vec::new();
        if self.url.trim().is_empty() {
            missing.push(Field::Url);
        }
        if self.username.trim().is_empty() {
            missing.push(Field::Username);
        }
        if self.password.trim().is_empty() {
            missing.push(Field::Password);
        }
        if self.output.as_os_str().is_empty() {
            missing.push(Field::Output);
        }
        missing
    }
}

/// Result of a successful run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    /// Entries written
    pub entries: usize,
    /// Non-blank listing lines seen
    pub lines: usize,
    /// Lines that could not be parsed
    pub unparsed: usize,
    /// Workbook written
    pub output: PathBuf,
    /// Whether output had to be decoded with the fallback encoding
    pub retried_encoding: bool,
}

// ============================================================================
// Signalling
// ============================================================================

/// Shared flag asking a run to stop
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Create an unset token
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the run to stop at its next checkpoint
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    /// Whether cancellation was requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Sending half of the run's event channel
///
/// Sends never fail; events are dropped once the receiver is gone.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: Option<UnboundedSender<RunEvent>>,
}

impl EventSink {
    /// Deliver events on `tx`
    #[must_use]
    pub fn new(tx: UnboundedSender<RunEvent>) -> Self {
        Self { tx: Some(tx) }
    }

    /// A sink that discards everything
    #[must_use]
    pub fn discard() -> Self {
        Self { tx: None }
    }

    fn send(&self, event: RunEvent) {
        if let Some(tx) = &self.tx {
            // Receiver gone means nobody is listening
            let _ = tx.send(event);
        }
    }

    /// Send a log line with a `[HH:MM:SS]` prefix
    pub fn log(&self, message: impl AsRef<str>) {
        let stamp = Local::now().format("%H:%M:%S");
        self.send(RunEvent::Log(format!("[{stamp}] {}", message.as_ref())));
    }

    /// Send the accepted-entry count
    pub fn progress(&self, count: usize) {
        self.send(RunEvent::Progress(count));
    }

    /// Send the terminal event
    pub fn finished(&self, ok: bool, message: String) {
        self.send(RunEvent::Finished { ok, message });
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Drives a single export run
pub struct Pipeline<'a, E> {
    client: &'a SvnClient<E>,
    catalog: Catalog,
    events: EventSink,
    cancel: CancelToken,
    state: RunState,
    on_finish: Option<Box<dyn FnOnce() + 'a>>,
}

impl<'a, E: CommandExecutor> Pipeline<'a, E> {
    /// Create an idle pipeline using `client`
    #[must_use]
    pub fn new(client: &'a SvnClient<E>, catalog: Catalog, events: EventSink) -> Self {
        Self {
            client,
            catalog,
            events,
            cancel: CancelToken::new(),
            state: RunState::Idle,
            on_finish: None,
        }
    }

    /// Observe `cancel` at each checkpoint
    #[must_use]
    pub fn with_cancel(mut self, cancel: CancelToken) -> Self {
        self.cancel = cancel;
        self
    }

    /// Call `hook` once the run has ended, just before `Finished` is sent
    #[must_use]
    pub fn on_finish(mut self, hook: impl FnOnce() + 'a) -> Self {
        self.on_finish = Some(Box::new(hook));
        self
    }

    /// Current stage
    #[must_use]
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Run the export to completion
    ///
    /// Emits one `Finished` event whatever the outcome.
    ///
    /// # Errors
    ///
    /// Returns the first error hit; see [`ExportError`] for the kinds.
    pub fn run(&mut self, request: &ExportRequest) -> Result<ExportSummary, ExportError> {
        match self.execute(request) {
            Ok(summary) => {
                self.transition(RunState::Done);
                let message = self.catalog.export_success(summary.entries);
                self.events.log(&message);
                self.finish(true, message);
                Ok(summary)
            }
            Err(err) => {
                self.transition(RunState::Failed);
                warn!(error = %err, "Export failed");
                let message = err.localized(&self.catalog);
                self.events.log(self.catalog.run_failed(&message));
                self.finish(false, message);
                Err(err)
            }
        }
    }

    fn finish(&mut self, ok: bool, message: String) {
        if let Some(hook) = self.on_finish.take() {
            hook();
        }
        self.events.finished(ok, message);
    }

    fn transition(&mut self, next: RunState) {
        debug!(from = ?self.state, to = ?next, "Run state change");
        self.state = next;
    }

    fn checkpoint(&self) -> Result<(), ExportError> {
        if self.cancel.is_cancelled() {
            info!(state = ?self.state, "Export cancelled");
            return Err(ExportError::Cancelled);
        }
        Ok(())
    }

    fn execute(&mut self, request: &ExportRequest) -> Result<ExportSummary, ExportError> {
        let missing = request.missing_fields();
        if !missing.is_empty() {
            return Err(ExportError::MissingFields(missing));
        }

        let filters = FilterSet::parse(&request.filters)?;
        let list_request = ListRequest::new(
            &request.url,
            Credentials::new(&request.username, &request.password),
        )?;
        self.client.probe()?;
        self.checkpoint()?;

        // Listing
        self.transition(RunState::Listing);
        self.events.log(self.catalog.starting_export());
        self.events.log(
            self.catalog
                .executing_command(&list_request.masked_command_line(self.client.program_name())),
        );

        let output = self.client.list(&list_request).inspect_err(|e| match e {
            ClientError::ProcessFailure { code, stderr } => {
                self.events.log(self.catalog.command_failed(*code));
                self.events.log(self.catalog.error_message(stderr));
            }
            ClientError::EmptyOutput => self.events.log(self.catalog.command_no_output()),
            ClientError::EncodingFailure { .. } => self.events.log(self.catalog.encoding_retry()),
            _ => {}
        })?;
        if output.retried {
            self.events.log(self.catalog.encoding_retry());
        }
        self.events.log(self.catalog.command_success());

        if output.text.is_empty() {
            return Err(ExportError::BlankListing);
        }
        self.events.log(self.catalog.file_list_success());

        // Parsing
        self.transition(RunState::Parsing);
        let mut scanner = ListingScanner::new(list_request.url(), filters);
        for line in output.text.lines() {
            self.checkpoint()?;
            match scanner.process_line(line).map(|entry| entry.is_some()) {
                Ok(true) => self.events.progress(scanner.len()),
                Ok(false) => {}
                Err(e) => self.events.log(self.catalog.parse_failed(line.trim(), &e)),
            }
        }

        // Filtering
        self.transition(RunState::Filtering);
        let lines = scanner.lines_seen();
        let unparsed = scanner.unparsed();
        let entries: Vec<ListingEntry> = scanner.into_entries();
        info!(lines, unparsed, entries = entries.len(), "Listing scanned");
        self.events.log(self.catalog.files_found(entries.len()));
        if entries.is_empty() {
            return Err(ExportError::NoMatchingFiles);
        }
        self.checkpoint()?;

        // Exporting
        self.transition(RunState::Exporting);
        let path = ensure_xlsx_extension(&request.output);
        self.events.log(self.catalog.creating_workbook());
        self.events.log(self.catalog.saving_workbook(&path));
        write_workbook(&path, &entries)?;
        self.events.log(self.catalog.workbook_saved());

        Ok(ExportSummary {
            entries: entries.len(),
            lines,
            unparsed,
            output: path,
            retried_encoding: output.retried,
        })
    }
}
