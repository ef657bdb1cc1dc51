// Unit tests for error types: display formatting, location capture, and
// conversion into the aggregate error.

use crate::error::CoreError;
use crate::error::config::ConfigError;
use crate::error::transport::TransportError;

use common::ErrorLocation;

use url::Url;

/// **VALUE**: Verifies transport errors carry their call site.
///
/// **WHY THIS MATTERS**: When a request fails in production, the log line
/// must point at the code that issued it, not at the error constructor.
#[test]
fn given_connect_error_when_formatted_then_includes_message_and_location() {
    let error = TransportError::Connect {
        message: "connection refused".to_string(),
        location: ErrorLocation::capture(),
    };

    let formatted = format!("{}", error);

    assert!(formatted.contains("Connection Error"));
    assert!(formatted.contains("connection refused"));
    assert!(formatted.contains("error.rs"));
}

#[test]
fn given_url_parse_error_when_converted_then_maps_to_url_parse_variant() {
    let parse_error = Url::parse("not a url").expect_err("must not parse");

    let error = TransportError::from(parse_error);

    assert!(matches!(error, TransportError::UrlParse { .. }));
    assert!(format!("{}", error).contains("URL Parse Error"));
}

#[test]
fn given_config_error_when_wrapped_then_core_error_displays_transparently() {
    let error = CoreError::from(ConfigError::MissingHost {
        location: ErrorLocation::capture(),
    });

    // Transparent wrapping: the inner display passes through unchanged.
    assert!(format!("{}", error).starts_with("Host Missing Error"));
}

#[test]
fn given_unsupported_scheme_error_when_formatted_then_names_offending_host() {
    let error = ConfigError::UnsupportedScheme {
        host: "ftp://files.example.com".to_string(),
        location: ErrorLocation::capture(),
    };

    let formatted = format!("{}", error);

    assert!(formatted.contains("ftp://files.example.com"));
    assert!(formatted.contains("expected http or https"));
}
