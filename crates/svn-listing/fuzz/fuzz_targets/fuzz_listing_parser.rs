#![no_main]

use libfuzzer_sys::fuzz_target;
use svn_listing::{FilterSet, parse_listing};

fuzz_target!(|data: &[u8]| {
    if let Ok(output) = std::str::from_utf8(data) {
        let _ = parse_listing(output, "http://fuzz/repo", FilterSet::accept_all());
    }
});
