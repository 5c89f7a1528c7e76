// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! svn-client: Subversion command-line invocation for svn-inventory
//!
//! This library crate validates repository URLs, runs `svn list -R --verbose`
//! with masked logging of credentials, and decodes the captured output using
//! a primary and a fallback regional text encoding.
//!
//! # Example
//!
//! ```no_run
//! use svn_client::{Credentials, ListRequest, SvnClient};
//!
//! let client = SvnClient::new();
//! client.probe().expect("svn on PATH");
//!
//! let request = ListRequest::new(
//!     "https://svn.example.com/repos/project/trunk",
//!     Credentials::new("alice", "secret"),
//! )
//! .expect("valid url");
//! let output = client.list(&request).expect("listing");
//! println!("{}", output.text);
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod decode;
pub mod error;
pub mod executor;
pub mod request;

pub use client::{ListOutput, SvnClient};
pub use decode::DecodePolicy;
pub use error::ClientError;
pub use executor::{CommandExecutor, Invocation, RawOutput, SystemExecutor};
pub use request::{Credentials, ListRequest, mask_secret, validate_url};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::client::SvnClient;
    pub use crate::error::ClientError;
    pub use crate::request::{Credentials, ListRequest};
}
