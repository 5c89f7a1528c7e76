#![no_main]

//! Fuzz target for settings files
//!
//! Arbitrary bytes must never panic the settings loader, and whatever loads
//! must keep the recent-URL list bounded and free of blanks.

use libfuzzer_sys::fuzz_target;

use svn_inventory::settings::{MAX_RECENT_URLS, Settings};

fuzz_target!(|data: &[u8]| {
    if let Ok(mut settings) = serde_json::from_slice::<Settings>(data) {
        if let Ok(text) = std::str::from_utf8(data) {
            for url in text.split_whitespace().take(32) {
                settings.remember_url(url);
            }
        }
        settings.remember_url("svn://host/repo");
        assert!(settings.recent_urls.len() <= MAX_RECENT_URLS);
        assert_eq!(settings.last_url(), Some("svn://host/repo"));

        let _ = serde_json::to_string(&settings);
    }
});
