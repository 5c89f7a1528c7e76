// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! CLI tests for flag parsing and their interaction with saved settings
//!
//! These tests verify short/long flag equivalence, value parsing, the
//! `history` subcommand and environment variable fallbacks.


use clap::Parser;
use std::path::PathBuf;
use svn_inventory::config::{Command, Config};
use svn_inventory::i18n::Language;
use svn_inventory::settings::Settings;
use test_utils::EnvGuard;
use tracing::Level;

// ============================================================================
// Short vs long flag equivalence tests
// ============================================================================

#[test]
fn test_short_and_long_url_equivalent() {
    let url = "svn://host/repo";

    let short = Config::try_parse_from(["svn-inventory", "-u", url]).expect("short parse");
    let long = Config::try_parse_from(["svn-inventory", "--url", url]).expect("long parse");

    assert_eq!(short.url, long.url);
    assert_eq!(short.url.as_deref(), Some(url));
}

#[test]
fn test_short_and_long_username_equivalent() {
    let short = Config::try_parse_from(["svn-inventory", "-U", "alice"]).expect("short parse");
    let long =
        Config::try_parse_from(["svn-inventory", "--username", "alice"]).expect("long parse");

    assert_eq!(short.username, long.username);
}

#[test]
fn test_short_and_long_output_equivalent() {
    let short = Config::try_parse_from(["svn-inventory", "-o", "out.xlsx"]).expect("short parse");
    let long =
        Config::try_parse_from(["svn-inventory", "--output", "out.xlsx"]).expect("long parse");

    assert_eq!(short.output, long.output);
    assert_eq!(short.output, Some(PathBuf::from("out.xlsx")));
}

#[test]
fn test_short_and_long_filter_equivalent() {
    let short = Config::try_parse_from(["svn-inventory", "-f", "*.dwg;*.dxf"]).expect("short");
    let long = Config::try_parse_from(["svn-inventory", "--filter", "*.dwg;*.dxf"]).expect("long");

    assert_eq!(short.filter, long.filter);
}

#[test]
fn test_short_and_long_verbose_equivalent() {
    let short = Config::try_parse_from(["svn-inventory", "-v"]).expect("short parse");
    let long = Config::try_parse_from(["svn-inventory", "--verbose"]).expect("long parse");

    assert_eq!(short.verbose, long.verbose);
    assert_eq!(short.log_level(), long.log_level());
}

#[test]
fn test_short_and_long_quiet_equivalent() {
    let short = Config::try_parse_from(["svn-inventory", "-q"]).expect("short parse");
    let long = Config::try_parse_from(["svn-inventory", "--quiet"]).expect("long parse");

    assert_eq!(short.quiet, long.quiet);
    assert_eq!(short.log_level(), Level::WARN);
}

// ============================================================================
// Value parsing tests
// ============================================================================

#[test]
fn test_language_values() {
    let en = Config::try_parse_from(["svn-inventory", "--language", "en"]).expect("en");
    let zh = Config::try_parse_from(["svn-inventory", "-l", "zh"]).expect("zh");
    let alias = Config::try_parse_from(["svn-inventory", "-l", "zh_CN"]).expect("alias");

    assert_eq!(en.language, Some(Language::En));
    assert_eq!(zh.language, Some(Language::Zh));
    assert_eq!(alias.language, Some(Language::Zh));
}

#[test]
fn test_language_rejects_unknown() {
    let result = Config::try_parse_from(["svn-inventory", "--language", "fr"]);
    assert!(result.is_err());
}

#[test]
fn test_encoding_flags() {
    let config = Config::try_parse_from([
        "svn-inventory",
        "--encoding",
        "gb18030",
        "--fallback-encoding",
        "utf-8",
    ])
    .expect("parse");

    let policy = config.decode_policy().expect("labels");
    assert_eq!(policy.primary().name(), "gb18030");
    assert_eq!(policy.secondary().name(), "UTF-8");
}

#[test]
fn test_svn_flag_sets_client_program() {
    let config =
        Config::try_parse_from(["svn-inventory", "--svn", "/usr/local/bin/svn"]).expect("parse");
    assert_eq!(config.client_program(), "/usr/local/bin/svn");

    let client = config.client().expect("client");
    assert_eq!(client.program_name(), "/usr/local/bin/svn");
}

#[test]
fn test_verbose_flag_value_syntax_not_supported() {
    // Boolean flags are toggled by presence only
    let result = Config::try_parse_from(["svn-inventory", "--verbose=true"]);
    assert!(result.is_err(), "Boolean flags don't support =value syntax");
}

#[test]
fn test_no_save_flag() {
    let config = Config::try_parse_from(["svn-inventory", "--no-save"]).expect("parse");
    assert!(config.no_save);
}

// ============================================================================
// Subcommand tests
// ============================================================================

#[test]
fn test_history_subcommand() {
    let config = Config::try_parse_from(["svn-inventory", "history"]).expect("parse");
    assert_eq!(config.command, Some(Command::History));
}

#[test]
fn test_history_with_global_flags_before() {
    let config = Config::try_parse_from(["svn-inventory", "-l", "zh", "history"]).expect("parse");
    assert_eq!(config.command, Some(Command::History));
    assert_eq!(config.language, Some(Language::Zh));
}

#[test]
fn test_unknown_subcommand_rejected() {
    let result = Config::try_parse_from(["svn-inventory", "serve"]);
    assert!(result.is_err());
}

// ============================================================================
// Settings interaction tests
// ============================================================================

#[test]
fn test_full_command_line_request() {
    let config = Config::try_parse_from([
        "svn-inventory",
        "-u",
        "https://svn.example.com/repos/p/",
        "-U",
        "alice",
        "-p",
        "secret",
        "-o",
        "/tmp/report",
        "-f",
        " *.dwg ; *.dxf ",
    ])
    .expect("parse");

    let request = config.export_request(&Settings::default());
    assert_eq!(request.url, "https://svn.example.com/repos/p/");
    assert_eq!(request.username, "alice");
    assert_eq!(request.password, "secret");
    assert_eq!(request.output, PathBuf::from("/tmp/report.xlsx"));
    assert_eq!(request.filters, "*.dwg ; *.dxf");
    assert!(request.missing_fields().is_empty());
}

#[test]
fn test_saved_settings_fill_gaps() {
    let settings = Settings {
        recent_urls: vec!["svn://saved/repo".to_string(), "svn://older".to_string()],
        username: Some("bob".to_string()),
        output_path: Some(PathBuf::from("saved.xlsx")),
        filters: None,
        language: Language::Zh,
    };
    let config = Config::try_parse_from(["svn-inventory", "-p", "pw"]).expect("parse");

    let request = config.export_request(&settings);
    assert_eq!(request.url, "svn://saved/repo");
    assert_eq!(request.username, "bob");
    assert_eq!(request.output, PathBuf::from("saved.xlsx"));
    assert_eq!(request.filters, "");
    assert_eq!(config.language(&settings), Language::Zh);
}

#[test]
fn test_settings_path_from_flag() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("custom.json");
    let config = Config::try_parse_from([
        "svn-inventory",
        "--settings",
        path.to_str().expect("utf-8 path"),
    ])
    .expect("parse");

    assert_eq!(config.settings_path(), path);
    assert!(config.validate().is_ok());
}

// ============================================================================
// Environment variable tests
// ============================================================================

#[test]
fn test_password_from_environment() {
    let _guard = EnvGuard::set("SVN_INVENTORY_PASSWORD", "from-env");

    let config = Config::try_parse_from(["svn-inventory"]).expect("parse");
    assert_eq!(config.password.as_deref(), Some("from-env"));

    let config = Config::try_parse_from(["svn-inventory", "--password", "from-flag"])
        .expect("parse");
    assert_eq!(config.password.as_deref(), Some("from-flag"));
}
