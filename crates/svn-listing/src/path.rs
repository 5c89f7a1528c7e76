// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository path helpers
//!
//! Listing paths are always `/`-separated and relative to the listed URL.

/// Separator used in repository paths and URLs
pub const SEPARATOR: char = '/';

const SCHEME_DELIMITER: &str = "://";

/// Check whether a listing path names a directory
#[must_use]
pub fn is_directory(path: &str) -> bool {
    path.ends_with(SEPARATOR)
}

/// Split a listing path into its directory portion and file name
///
/// The directory portion is empty for top-level files.
#[must_use]
pub fn split(path: &str) -> (&str, &str) {
    match path.rfind(SEPARATOR) {
        Some(idx) => (&path[..idx], &path[idx + 1..]),
        None => ("", path),
    }
}

/// Join a directory portion onto a repository URL
///
/// An empty directory yields the base URL itself. Duplicate separators are
/// collapsed everywhere except inside the `scheme://` delimiter.
#[must_use]
pub fn join_url(base_url: &str, directory: &str) -> String {
    let joined = if directory.is_empty() {
        base_url.to_string()
    } else {
        format!("{base_url}{SEPARATOR}{directory}")
    };
    normalize_url(&joined)
}

/// Collapse runs of separators in the path portion of a URL
///
/// The first `://` is preserved verbatim so `file:///repo` keeps its
/// triple slash.
#[must_use]
pub fn normalize_url(url: &str) -> String {
    match url.split_once(SCHEME_DELIMITER) {
        Some((scheme, rest)) => {
            // `file:///` puts the root slash into `rest`; keep exactly one
            let leading = if rest.starts_with(SEPARATOR) { "/" } else { "" };
            format!(
                "{scheme}{SCHEME_DELIMITER}{leading}{}",
                collapse_separators(rest.trim_start_matches(SEPARATOR))
            )
        }
        None => collapse_separators(url),
    }
}

/// Strip trailing separators from a repository URL
#[must_use]
pub fn trim_base_url(url: &str) -> &str {
    url.trim_end_matches(SEPARATOR)
}

fn collapse_separators(path: &str) -> String {
    let mut out = String::with_capacity(path.len());
    let mut previous_was_separator = false;
    for ch in path.chars() {
        let is_separator = ch == SEPARATOR;
        if !(is_separator && previous_was_separator) {
            out.push(ch);
        }
        previous_was_separator = is_separator;
    }
    out
}
