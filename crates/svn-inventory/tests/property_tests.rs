// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Property-based tests for svn-inventory
//!
//! These tests use proptest to check the recent-URL list, destination path
//! handling and message rendering for arbitrary inputs.

use std::path::{Path, PathBuf};

use proptest::prelude::*;
use svn_inventory::export::ensure_xlsx_extension;
use svn_inventory::i18n::{Field, Language};
use svn_inventory::pipeline::ExportRequest;
use svn_inventory::settings::{MAX_RECENT_URLS, Settings};

// ============================================================================
// Strategies
// ============================================================================

/// Repository URLs, blanks and near-duplicates included
fn url() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("   ".to_string()),
        "svn://host/r[a-c]",
        "https://svn\\.example\\.com/repos/[a-z]{1,6}",
    ]
}

fn field() -> impl Strategy<Value = Field> {
    prop_oneof![
        Just(Field::Url),
        Just(Field::Username),
        Just(Field::Password),
        Just(Field::Output),
    ]
}

fn language() -> impl Strategy<Value = Language> {
    prop_oneof![Just(Language::En), Just(Language::Zh)]
}

// ============================================================================
// Recent URL properties
// ============================================================================

proptest! {
    #[test]
    fn recent_urls_are_bounded_unique_and_non_blank(urls in prop::collection::vec(url(), 0..40)) {
        let mut settings = Settings::default();
        for url in &urls {
            settings.remember_url(url);
        }

        prop_assert!(settings.recent_urls.len() <= MAX_RECENT_URLS);
        prop_assert!(settings.recent_urls.iter().all(|u| !u.trim().is_empty()));

        let mut seen = std::collections::HashSet::new();
        prop_assert!(settings.recent_urls.iter().all(|u| seen.insert(u.clone())));
    }

    #[test]
    fn last_non_blank_url_is_first(urls in prop::collection::vec(url(), 1..40)) {
        let mut settings = Settings::default();
        for url in &urls {
            settings.remember_url(url);
        }

        let expected = urls.iter().rev().map(|u| u.trim()).find(|u| !u.is_empty());
        prop_assert_eq!(settings.last_url(), expected);
    }

    #[test]
    fn recording_a_run_never_stores_the_password(
        url in url(),
        username in "[a-z]{0,8}",
        password in "[A-Za-z0-9]{12,20}",
    ) {
        let mut settings = Settings::default();
        let request = ExportRequest::new(&url, &username, &password, "out.xlsx", "");
        settings.record_run(&request);

        let json = serde_json::to_string(&settings).expect("serialize");
        prop_assert!(!json.contains(&password));
    }
}

// ============================================================================
// Destination path properties
// ============================================================================

proptest! {
    #[test]
    fn xlsx_extension_is_idempotent(name in "[a-zA-Z0-9_ .-]{1,20}") {
        let once = ensure_xlsx_extension(Path::new(&name));
        let twice = ensure_xlsx_extension(&once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.to_string_lossy().to_lowercase().ends_with(".xlsx"));
    }

    #[test]
    fn xlsx_extension_keeps_the_original_name(name in "[a-zA-Z0-9_-]{1,20}\\.(csv|txt|xls)") {
        let path = ensure_xlsx_extension(Path::new(&name));
        prop_assert_eq!(path, PathBuf::from(format!("{name}.xlsx")));
    }
}

// ============================================================================
// Message properties
// ============================================================================

proptest! {
    #[test]
    fn missing_fields_names_every_field(
        fields in prop::collection::vec(field(), 1..4),
        language in language(),
    ) {
        let catalog = language.catalog();
        let message = catalog.missing_fields(&fields);
        for field in &fields {
            prop_assert!(message.contains(catalog.field(*field)));
        }
        prop_assert!(!message.contains('{'), "message contains an unfilled placeholder brace: {}", message);
    }

    #[test]
    fn counts_appear_in_messages(count in 0usize..1_000_000, language in language()) {
        let catalog = language.catalog();
        let count_text = count.to_string();
        prop_assert!(catalog.progress(count).contains(&count_text));
        prop_assert!(catalog.files_found(count).contains(&count_text));
        prop_assert!(catalog.export_success(count).contains(&count_text));
    }
}
