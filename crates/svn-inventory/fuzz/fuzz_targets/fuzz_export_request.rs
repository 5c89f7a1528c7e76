#![no_main]

//! Fuzz target for export request handling
//!
//! Builds requests from arbitrary field values and checks that validation,
//! destination handling and message rendering never panic, and that
//! `.xlsx` is only ever appended once.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use svn_inventory::export::ensure_xlsx_extension;
use svn_inventory::i18n::Language;
use svn_inventory::pipeline::ExportRequest;

#[derive(Debug, Arbitrary)]
struct Input {
    url: String,
    username: String,
    password: String,
    output: String,
    filters: String,
    chinese: bool,
}

fuzz_target!(|input: Input| {
    let request = ExportRequest::new(
        &input.url,
        &input.username,
        &input.password,
        input.output.as_str(),
        &input.filters,
    );

    let language = if input.chinese { Language::Zh } else { Language::En };
    let catalog = language.catalog();
    let missing = request.missing_fields();
    if !missing.is_empty() {
        let _ = catalog.missing_fields(&missing);
    }

    if !request.output.as_os_str().is_empty() {
        let path = ensure_xlsx_extension(&request.output);
        assert_eq!(ensure_xlsx_extension(&path), path);
    }

    let _ = format!("{request:?}");
});
