// Unit tests for error-site capture.

use crate::ErrorLocation;

/// **VALUE**: Verifies `capture()` records the caller's file, not this
/// crate's internals.
///
/// **WHY THIS MATTERS**: Every error in the workspace carries one of these.
/// If `#[track_caller]` propagation breaks, every error message points at
/// `error_location.rs` instead of the real call site and debugging becomes
/// a guessing game.
#[test]
fn given_capture_when_called_then_records_calling_file() {
    // GIVEN / WHEN: A location captured from this test
    let location = ErrorLocation::capture();

    // THEN: The location names this file
    assert!(location.file.ends_with("error_location.rs"));
    assert!(location.line > 0);
}

#[test]
fn given_location_when_formatted_then_uses_bracketed_file_line_column() {
    let location = ErrorLocation {
        file: "src/context/mod.rs",
        line: 42,
        column: 15,
    };

    assert_eq!(format!("{}", location), "[src/context/mod.rs:42:15]");
}
