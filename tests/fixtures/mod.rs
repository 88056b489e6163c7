//! Shared helpers for integration tests.

use contact_book::ContactService;
use std::io::Cursor;
use std::path::Path;

/// Read an exported file back as a JSON value.
#[allow(dead_code)]
pub fn read_export(path: &Path) -> serde_json::Value {
    let contents = std::fs::read_to_string(path).expect("export file should exist");
    serde_json::from_str(&contents).expect("export file should be valid JSON")
}

/// Service with Alice (+123, a@b.co) and Bob (+999).
#[allow(dead_code)]
pub fn sample_service() -> ContactService {
    let mut service = ContactService::new();
    service.add_phone("Alice", "+123").unwrap();
    service.add_email("Alice", "a@b.co").unwrap();
    service.add_phone("Bob", "+999").unwrap();
    service
}

/// Run a whole session from raw input bytes and return everything written
/// to stdout.
#[allow(dead_code)]
pub fn run_session_bytes(input: &[u8]) -> String {
    let mut repl = contact_book::Repl::new(Cursor::new(input.to_vec()), Vec::new());
    repl.run().expect("in-memory session should not fail");
    String::from_utf8(repl.into_writer()).expect("output is UTF-8")
}

/// Run a whole session from `script` and return everything written to stdout.
#[allow(dead_code)]
pub fn run_session(script: &str) -> String {
    run_session_bytes(script.as_bytes())
}
