// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Listing entry types

use serde::{Deserialize, Serialize};

use crate::parser::ParsedLine;
use crate::path;

/// One file record extracted from a recursive listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    /// Last path component of the file
    pub file_name: String,
    /// Fully-qualified location of the containing directory
    pub directory_path: String,
    /// Revision in which the file last changed
    pub revision: String,
    /// Author of that revision
    pub author: String,
    /// Commit date as reported by the client
    pub commit_date: String,
}

impl ListingEntry {
    /// Build an entry from a parsed line, resolving its directory against `base_url`
    ///
    /// Returns `None` for directory records (paths ending in `/`).
    #[must_use]
    pub fn from_parsed(parsed: &ParsedLine, base_url: &str) -> Option<Self> {
        if parsed.is_directory() {
            return None;
        }

        let (directory, file_name) = path::split(&parsed.path);

        Some(Self {
            file_name: file_name.to_string(),
            directory_path: path::join_url(base_url, directory),
            revision: parsed.revision.clone(),
            author: parsed.author.clone(),
            // "<date> <time>" with the time already folded into the date token
            commit_date: format!("{} ", parsed.date_time),
        })
    }

    /// Spreadsheet cells for this entry, in column order
    #[must_use]
    pub fn cells(&self) -> [&str; 5] {
        [
            &self.file_name,
            &self.directory_path,
            &self.revision,
            &self.author,
            &self.commit_date,
        ]
    }

    /// Full location of the file itself
    #[must_use]
    pub fn location(&self) -> String {
        format!("{}/{}", self.directory_path, self.file_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;

    fn parsed(path: &str) -> ParsedLine {
        ParsedLine {
            revision: "12".to_string(),
            author: "alice".to_string(),
            size: Some("2048".to_string()),
            date_time: "Jan 01 2023".to_string(),
            path: path.to_string(),
        }
    }

    #[test]
    fn test_from_parsed_nested_file() {
        let entry = ListingEntry::from_parsed(&parsed("folder/file.dwg"), "http://host/repo")
            .expect("file entry");

        assert_eq!(entry.file_name, "file.dwg");
        assert_eq!(entry.directory_path, "http://host/repo/folder");
        assert_eq!(entry.revision, "12");
        assert_eq!(entry.author, "alice");
        assert_eq!(entry.commit_date, "Jan 01 2023 ");
    }

    #[test]
    fn test_from_parsed_top_level_file() {
        let entry =
            ListingEntry::from_parsed(&parsed("readme.txt"), "svn://host/repo").expect("entry");
        assert_eq!(entry.directory_path, "svn://host/repo");
        assert_eq!(entry.location(), "svn://host/repo/readme.txt");
    }

    #[test]
    fn test_from_parsed_directory_is_skipped() {
        assert!(ListingEntry::from_parsed(&parsed("folder/sub/"), "http://host").is_none());
    }

    #[test]
    fn test_cells_column_order() {
        let entry = ListingEntry::from_parsed(&parsed("a/b.dwg"), "http://h").expect("entry");
        assert_eq!(
            entry.cells(),
            ["b.dwg", "http://h/a", "12", "alice", "Jan 01 2023 "]
        );
    }

    #[test]
    fn test_entry_json_format() {
        let entry = ListingEntry::from_parsed(&parsed("a/b.dwg"), "http://h").expect("entry");
        let json = serde_json::to_string(&entry).expect("serialize");
        assert!(json.contains("\"file_name\":\"b.dwg\""));
        assert!(json.contains("\"directory_path\":\"http://h/a\""));
    }
}
