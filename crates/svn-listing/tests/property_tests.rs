// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for svn-listing
//!
//! These tests use proptest to verify parser and filter invariants hold for
//! arbitrary listing records, paths and pattern sets.

use proptest::prelude::*;

use svn_listing::path::{is_directory, normalize_url};
use svn_listing::{FilterSet, ListingScanner, ParsedLine, parse_line};

// ============================================================================
// Strategies
// ============================================================================

fn month() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Jan"),
        Just("Feb"),
        Just("Mar"),
        Just("Apr"),
        Just("Sep"),
        Just("Dec"),
    ]
    .prop_map(str::to_string)
}

/// Either `Mon DD YYYY` (with one or two spaces before the year) or `Mon DD HH:MM`
fn date_time() -> impl Strategy<Value = String> {
    (month(), 1u32..=31, prop_oneof![
        (1990u32..=2030, prop_oneof![Just(" "), Just("  ")])
            .prop_map(|(year, gap)| format!("{gap}{year}")),
        (0u32..24, 0u32..60).prop_map(|(h, m)| format!(" {h:02}:{m:02}")),
    ])
        .prop_map(|(mon, day, tail)| format!("{mon} {day:02}{tail}"))
}

/// Path segments with spaces, dots and non-ASCII characters
fn path_segment() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z][a-zA-Z0-9_.-]{0,12}",
        "[a-z]{1,6} [a-z]{1,6}",
        Just("图纸".to_string()),
        Just("总平面 v2".to_string()),
    ]
}

fn listing_path() -> impl Strategy<Value = String> {
    (prop::collection::vec(path_segment(), 1..4), any::<bool>()).prop_map(|(segments, dir)| {
        let mut path = segments.join("/");
        if dir {
            path.push('/');
        }
        path
    })
}

fn parsed_line() -> impl Strategy<Value = ParsedLine> {
    (
        1u64..1_000_000,
        "[a-z][a-z0-9_.]{0,15}",
        prop::option::of(0u64..10_000_000),
        date_time(),
        listing_path(),
    )
        .prop_map(|(revision, author, size, date_time, path)| ParsedLine {
            revision: revision.to_string(),
            author,
            size: size.map(|s| s.to_string()),
            date_time,
            path,
        })
}

fn extension() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("dwg"),
        Just("DWG"),
        Just("txt"),
        Just("pdf"),
        Just("xlsx")
    ]
    .prop_map(str::to_string)
}

// ============================================================================
// Parser properties
// ============================================================================

proptest! {
    #[test]
    fn rendered_record_reparses_to_same_fields(record in parsed_line()) {
        let line = record.to_string();
        let parsed = parse_line(&line).expect("rendered line should parse");
        prop_assert_eq!(&parsed, &record);

        let again = parse_line(&parsed.to_string()).expect("re-rendered line should parse");
        prop_assert_eq!(again, parsed);
    }

    #[test]
    fn leading_and_trailing_whitespace_is_ignored(
        record in parsed_line(),
        lead in "[ \t]{0,6}",
        trail in "[ \t]{0,6}",
    ) {
        let line = format!("{lead}{record}{trail}");
        prop_assert_eq!(parse_line(&line).expect("parse"), record);
    }

    #[test]
    fn parse_line_never_panics(line in ".{0,200}") {
        let _ = parse_line(&line);
    }

    #[test]
    fn directories_never_produce_entries(record in parsed_line(), patterns in prop::collection::vec("[*.a-z]{0,6}", 0..4)) {
        let mut record = record;
        if !record.path.ends_with('/') {
            record.path.push('/');
        }
        let filters = FilterSet::new(&patterns).expect("filters");
        let mut scanner = ListingScanner::new("http://host/repo", filters);
        let accepted = scanner.process_line(&record.to_string()).expect("parse");
        prop_assert!(accepted.is_none());
        prop_assert!(scanner.is_empty());
    }

    #[test]
    fn scanner_preserves_line_order(records in prop::collection::vec(parsed_line(), 0..30)) {
        let output: String = records.iter().map(|r| format!("{r}\n")).collect();
        let entries = svn_listing::parse_listing(&output, "svn://h/r", FilterSet::accept_all());

        let expected: Vec<String> = records
            .iter()
            .filter(|r| !is_directory(&r.path))
            .map(|r| r.path.rsplit('/').next().unwrap_or_default().to_string())
            .collect();
        let actual: Vec<String> = entries.into_iter().map(|e| e.file_name).collect();
        prop_assert_eq!(actual, expected);
    }
}

// ============================================================================
// Filter properties
// ============================================================================

proptest! {
    #[test]
    fn empty_filter_set_accepts_any_path(path in ".{0,80}") {
        prop_assert!(FilterSet::accept_all().matches(&path));
    }

    #[test]
    fn extension_filter_is_case_insensitive(stem in "[a-z]{1,8}", ext in extension()) {
        let filters = FilterSet::new([format!("*.{}", ext.to_lowercase())]).expect("filters");
        let upper = format!("dir/{stem}.{}", ext.to_uppercase());
        let lower = format!("dir/{stem}.{}", ext.to_lowercase());
        prop_assert!(filters.matches(&upper));
        prop_assert!(filters.matches(&lower));
    }

    #[test]
    fn inclusion_is_any_of_patterns(
        patterns in prop::collection::vec(extension().prop_map(|e| format!("*.{e}")), 1..4),
        stem in "[a-z]{1,8}",
        ext in extension(),
    ) {
        let path = format!("a/{stem}.{ext}");
        let filters = FilterSet::new(&patterns).expect("filters");
        let any_single = patterns
            .iter()
            .any(|p| FilterSet::new([p]).expect("single").matches(&path));
        prop_assert_eq!(filters.matches(&path), any_single);
    }

    #[test]
    fn normalized_url_has_no_duplicate_separators_after_scheme(
        scheme in prop_oneof![Just("http"), Just("https"), Just("svn")],
        segments in prop::collection::vec("[a-z]{1,5}", 1..5),
        slashes in prop::collection::vec(1usize..4, 1..5),
    ) {
        let mut url = format!("{scheme}://host");
        for (segment, count) in segments.iter().zip(slashes.iter().cycle()) {
            url.push_str(&"/".repeat(*count));
            url.push_str(segment);
        }
        let normalized = normalize_url(&url);
        let (head, rest) = normalized.split_once("://").expect("scheme kept");
        prop_assert_eq!(head, scheme);
        prop_assert!(!rest.contains("//"));
    }
}

#[test]
fn filter_examples() {
    let filters = FilterSet::new(["*.dwg", "*.TXT"]).expect("filters");
    assert!(filters.matches("a/b.dwg"));
    assert!(filters.matches("a/b.DWG"));
    assert!(!filters.matches("a/b.pdf"));
}
