use common::ErrorLocation;

use thiserror::Error as ThisError;

/// Failures at the transport level: no usable response was obtainable.
///
/// A non-2xx HTTP status is NOT one of these - a delivered status line plus
/// body is a normal [`RawResponse`](crate::context::RawResponse) outcome and
/// is classified later by the response envelope.
#[derive(Debug, ThisError)]
pub enum TransportError {
    #[error("Client Build Error: {message} {location}")]
    Client {
        message: String,
        location: ErrorLocation,
    },

    #[error("Connection Error: {message} {location}")]
    Connect {
        message: String,
        location: ErrorLocation,
    },

    #[error("Body Read Error: {message} {location}")]
    Read {
        message: String,
        location: ErrorLocation,
    },

    #[error("URL Parse Error: {message} {location}")]
    UrlParse {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unsupported Method Error: {method} {location}")]
    UnsupportedMethod {
        method: String,
        location: ErrorLocation,
    },
}

impl From<url::ParseError> for TransportError {
    #[track_caller]
    fn from(error: url::ParseError) -> Self {
        TransportError::UrlParse {
            message: error.to_string(),
            location: ErrorLocation::capture(),
        }
    }
}
