use common::ErrorLocation;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Host Missing Error: {location}")]
    MissingHost { location: ErrorLocation },

    #[error("Host Parse Error: {host}: {reason} {location}")]
    InvalidHost {
        host: String,
        reason: String,
        location: ErrorLocation,
    },

    #[error("Host Scheme Error: {host}: expected http or https {location}")]
    UnsupportedScheme {
        host: String,
        location: ErrorLocation,
    },
}
