//! Integration tests for svn-client
//!
//! Tests that need a real client binary print a skip notice and return when
//! `svn` is not installed.

use proptest::prelude::*;
use std::process::Command;

use svn_client::{
    ClientError, Credentials, DecodePolicy, ListRequest, SvnClient, mask_secret, validate_url,
};

fn svn_available() -> bool {
    Command::new("svn").arg("--version").output().is_ok()
}

#[test]
fn test_probe_real_client() {
    if !svn_available() {
        println!("Skipping: svn not installed");
        return;
    }

    let version = SvnClient::new().probe().expect("probe should succeed");
    assert!(
        version.chars().next().is_some_and(|c| c.is_ascii_digit()),
        "Version should start with a digit: {version}"
    );
}

#[test]
fn test_probe_missing_client() {
    let client = SvnClient::new().program("svn-inventory-no-such-client");
    assert!(matches!(
        client.probe(),
        Err(ClientError::ToolNotFound { program }) if program == "svn-inventory-no-such-client"
    ));
}

#[test]
fn test_list_missing_client() {
    let client = SvnClient::new().program("svn-inventory-no-such-client");
    let request = ListRequest::new("svn://localhost/repo", Credentials::new("u", "p"))
        .expect("valid url");
    assert!(matches!(
        client.list(&request),
        Err(ClientError::ToolNotFound { .. })
    ));
}

#[test]
fn test_list_unreachable_repository_fails() {
    if !svn_available() {
        println!("Skipping: svn not installed");
        return;
    }

    let dir = std::env::temp_dir().join(format!("svn-client-missing-{}", std::process::id()));
    let url = format!("file:///{}", dir.display().to_string().trim_start_matches('/'));
    let request = ListRequest::new(&url, Credentials::new("nobody", "not-a-password"))
        .expect("valid url");

    let client =
        SvnClient::new().decoding(DecodePolicy::new(encoding_rs::UTF_8, encoding_rs::UTF_8));
    match client.list(&request) {
        Err(ClientError::ProcessFailure { stderr, .. }) => {
            assert!(!stderr.is_empty());
            assert!(!stderr.contains("not-a-password"));
        }
        other => panic!("Expected ProcessFailure, got {other:?}"),
    }
}

#[test]
fn test_masked_command_line_never_contains_password() {
    let request = ListRequest::new(
        "https://svn.example.com/repos/p",
        Credentials::new("alice", "p@ss w0rd"),
    )
    .expect("valid url");
    let line = request.masked_command_line("svn");
    assert!(!line.contains("p@ss w0rd"));
    assert!(line.contains("*********"));
    assert!(line.contains("--username \"alice\""));
}

proptest! {
    #[test]
    fn masking_removes_every_occurrence(
        secret in "[a-zA-Z0-9!@#$%^&]{1,16}",
        prefix in "[ -~]{0,20}",
        suffix in "[ -~]{0,20}",
    ) {
        let text = format!("{prefix}{secret}{suffix}{secret}");
        let masked = mask_secret(&text, &secret);
        prop_assert!(!masked.contains(&secret));
        prop_assert_eq!(masked.chars().count(), text.chars().count());
    }

    #[test]
    fn urls_without_supported_scheme_are_rejected(url in "[a-z]{1,8}:?/{0,2}[a-z./]{0,20}") {
        let supported = ["http://", "https://", "svn://", "file:///"]
            .iter()
            .any(|scheme| url.starts_with(scheme));
        prop_assert_eq!(validate_url(&url).is_ok(), supported);
    }
}
