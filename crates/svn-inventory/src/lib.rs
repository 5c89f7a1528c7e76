// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! svn-inventory library
//!
//! Orchestrates an export run: validates the user's inputs, runs the
//! recursive listing through `svn-client`, scans it with `svn-listing` and
//! writes the accepted entries to an `.xlsx` workbook. Exposed as a library
//! for integration tests and for front ends other than the bundled CLI.
//!
//! # Example
//!
//! ```no_run
//! use svn_inventory::prelude::*;
//!
//! # async fn demo() -> Result<(), ExportError> {
//! let worker = ExportWorker::new(SvnClient::new(), Language::En.catalog());
//! let request = ExportRequest::new(
//!     "https://svn.example.com/repos/project/trunk",
//!     "alice",
//!     "secret",
//!     "inventory.xlsx",
//!     "*.dwg;*.dxf",
//! );
//!
//! let mut run = worker.start(request)?;
//! while let Some(event) = run.next_event().await {
//!     if let RunEvent::Log(line) = event {
//!         println!("{line}");
//!     }
//! }
//! let summary = run.wait().await?;
//! println!("{} entries", summary.entries);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod export;
pub mod i18n;
pub mod pipeline;
pub mod settings;
pub mod worker;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::error::ExportError;
    pub use crate::i18n::{Catalog, Language};
    pub use crate::pipeline::{CancelToken, ExportRequest, ExportSummary, RunEvent, RunState};
    pub use crate::worker::{ExportWorker, RunHandle};
    pub use svn_client::SvnClient;
}
