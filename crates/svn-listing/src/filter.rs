// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Wildcard file filters
//!
//! A filter such as `*.dwg` is translated into a case-insensitive regular
//! expression and searched for anywhere in the listing path. The search is
//! not anchored: `*.dwg` also accepts `a/b.dwg.bak`.

use regex::{Regex, RegexBuilder};

use crate::error::ListingError;

/// Separator between patterns in a user-supplied filter string
pub const PATTERN_SEPARATOR: char = ';';

/// A single compiled wildcard pattern
#[derive(Debug, Clone)]
pub struct WildcardPattern {
    source: String,
    regex: Regex,
}

impl WildcardPattern {
    /// Compile a wildcard pattern
    ///
    /// `*` matches any run of characters, every other character is literal.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::InvalidPattern` if the translated expression
    /// cannot be compiled.
    pub fn new(pattern: &str) -> Result<Self, ListingError> {
        let regex = RegexBuilder::new(&translate(pattern))
            .case_insensitive(true)
            .build()
            .map_err(|source| ListingError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The pattern as the user wrote it
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Search for the pattern anywhere in `path`
    #[must_use]
    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

/// Translate a wildcard pattern into regex syntax
fn translate(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut buf = [0u8; 4];
    for ch in pattern.chars() {
        if ch == '*' {
            out.push_str(".*");
        } else {
            out.push_str(&regex::escape(ch.encode_utf8(&mut buf)));
        }
    }
    out
}

/// An order-insignificant set of wildcard patterns
///
/// An empty set accepts every path.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    patterns: Vec<WildcardPattern>,
}

impl FilterSet {
    /// A filter set that accepts everything
    #[must_use]
    pub fn accept_all() -> Self {
        Self::default()
    }

    /// Compile a set of wildcard patterns
    ///
    /// # Errors
    ///
    /// Returns `ListingError::InvalidPattern` for the first pattern that
    /// fails to compile.
    pub fn new<I, S>(patterns: I) -> Result<Self, ListingError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let patterns = patterns
            .into_iter()
            .map(|p| WildcardPattern::new(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    /// Parse a `;`-separated filter string such as `*.dwg; *.dxf`
    ///
    /// Pieces are trimmed and empty pieces are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ListingError::InvalidPattern` if any piece fails to compile.
    pub fn parse(spec: &str) -> Result<Self, ListingError> {
        Self::new(
            spec.split(PATTERN_SEPARATOR)
                .map(str::trim)
                .filter(|p| !p.is_empty()),
        )
    }

    /// Whether the set has no patterns
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of patterns in the set
    #[must_use]
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    /// The compiled patterns
    #[must_use]
    pub fn patterns(&self) -> &[WildcardPattern] {
        &self.patterns
    }

    /// Decide whether `path` is included
    #[must_use]
    pub fn matches(&self, path: &str) -> bool {
        self.is_empty() || self.patterns.iter().any(|p| p.is_match(path))
    }
}
