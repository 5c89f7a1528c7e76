// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Background export worker
//!
//! Runs the pipeline on a blocking task so the caller stays responsive. Only
//! one run may be active; starting another while it runs fails with
//! [`ExportError::Busy`].

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use svn_client::{CommandExecutor, SvnClient, SystemExecutor};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::error::ExportError;
use crate::i18n::Catalog;
use crate::pipeline::{CancelToken, EventSink, ExportRequest, ExportSummary, Pipeline, RunEvent};

/// Clears the busy flag when dropped, including on panic
struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Starts export runs one at a time
pub struct ExportWorker<E = SystemExecutor> {
    client: Arc<SvnClient<E>>,
    catalog: Catalog,
    busy: Arc<AtomicBool>,
}

impl<E> ExportWorker<E>
where
    E: CommandExecutor + 'static,
{
    /// Create a worker driving `client`
    #[must_use]
    pub fn new(client: SvnClient<E>, catalog: Catalog) -> Self {
        Self {
            client: Arc::new(client),
            catalog,
            busy: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Use `catalog` for runs started from now on
    pub fn set_catalog(&mut self, catalog: Catalog) {
        self.catalog = catalog;
    }

    /// Catalog used for new runs
    #[must_use]
    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// Whether a run is active
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::SeqCst)
    }

    /// Start a run on the blocking thread pool
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Busy` if a run is already active.
    pub fn start(&self, request: ExportRequest) -> Result<RunHandle, ExportError> {
        if self
            .busy
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            debug!("Rejected start while a run is active");
            return Err(ExportError::Busy);
        }
        let guard = BusyGuard(Arc::clone(&self.busy));

        let (tx, rx) = mpsc::unbounded_channel();
        let cancel = CancelToken::new();
        let client = Arc::clone(&self.client);
        let catalog = self.catalog;
        let token = cancel.clone();

        let task = tokio::task::spawn_blocking(move || {
            let events = EventSink::new(tx);
            // Free the worker before `Finished` reaches the caller
            Pipeline::new(client.as_ref(), catalog, events)
                .with_cancel(token)
                .on_finish(move || drop(guard))
                .run(&request)
        });

        Ok(RunHandle {
            events: rx,
            cancel,
            task,
        })
    }
}

/// Handle to an active run
pub struct RunHandle {
    events: UnboundedReceiver<RunEvent>,
    cancel: CancelToken,
    task: JoinHandle<Result<ExportSummary, ExportError>>,
}

impl RunHandle {
    /// Next event, or `None` once the run has ended and all events are read
    pub async fn next_event(&mut self) -> Option<RunEvent> {
        self.events.recv().await
    }

    /// Ask the run to stop at its next checkpoint
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Token shared with the run
    #[must_use]
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// Wait for the run to end
    ///
    /// # Errors
    ///
    /// Returns the run's error, or `ExportError::Worker` if the task panicked.
    pub async fn wait(self) -> Result<ExportSummary, ExportError> {
        match self.task.await {
            Ok(result) => result,
            Err(e) => {
                error!(error = %e, "Export task did not complete");
                Err(ExportError::Worker(e.to_string()))
            }
        }
    }
}
