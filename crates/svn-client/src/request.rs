// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Listing requests
//!
//! A [`ListRequest`] holds a validated repository URL and the credentials
//! used to list it. The password is only ever exposed to the process
//! invocation; anything meant for logs goes through [`mask_secret`].

use std::fmt;

use crate::error::ClientError;

/// URL prefixes accepted by [`validate_url`]
pub const SUPPORTED_SCHEMES: [&str; 4] = ["http://", "https://", "svn://", "file:///"];

/// Character used to mask secrets in log output
pub const MASK_CHAR: char = '*';

/// Check that a repository URL starts with a supported scheme
///
/// # Errors
///
/// Returns `ClientError::InvalidUrl` otherwise.
pub fn validate_url(url: &str) -> Result<(), ClientError> {
    if SUPPORTED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        Ok(())
    } else {
        Err(ClientError::InvalidUrl {
            url: url.to_string(),
        })
    }
}

/// Replace every occurrence of `secret` in `text` with mask characters of
/// the same length
#[must_use]
pub fn mask_secret(text: &str, secret: &str) -> String {
    if secret.is_empty() {
        return text.to_string();
    }
    let mask: String = std::iter::repeat_n(MASK_CHAR, secret.chars().count()).collect();
    text.replace(secret, &mask)
}

/// Username and password for the repository
#[derive(Clone)]
pub struct Credentials {
    username: String,
    password: String,
}

impl Credentials {
    /// Create credentials
    #[must_use]
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// The username
    #[must_use]
    pub fn username(&self) -> &str {
        &self.username
    }

    /// The password, for handing to the client process only
    #[must_use]
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Mask the password wherever it appears in `text`
    #[must_use]
    pub fn mask(&self, text: &str) -> String {
        mask_secret(text, &self.password)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &mask_secret(&self.password, &self.password))
            .finish()
    }
}

/// A recursive verbose listing of one repository URL
#[derive(Debug, Clone)]
pub struct ListRequest {
    url: String,
    credentials: Credentials,
}

impl ListRequest {
    /// Create a request, stripping trailing `/` from the URL
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidUrl` if the URL has no supported scheme.
    pub fn new(url: &str, credentials: Credentials) -> Result<Self, ClientError> {
        let url = url.trim().trim_end_matches('/');
        validate_url(url)?;
        Ok(Self {
            url: url.to_string(),
            credentials,
        })
    }

    /// The repository URL without trailing separators
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The credentials used for this request
    #[must_use]
    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Arguments for `<client> list ...`
    #[must_use]
    pub fn args(&self) -> Vec<String> {
        vec![
            "list".to_string(),
            self.url.clone(),
            "--username".to_string(),
            self.credentials.username.clone(),
            "--password".to_string(),
            self.credentials.password.clone(),
            "-R".to_string(),
            "--verbose".to_string(),
        ]
    }

    /// The command line as it would be typed, with the password masked
    #[must_use]
    pub fn masked_command_line(&self, program: &str) -> String {
        let line = format!(
            "{program} list \"{}\" --username \"{}\" --password \"{}\" -R --verbose",
            self.url, self.credentials.username, self.credentials.password
        );
        self.credentials.mask(&line)
    }
}
