use crate::error::config::ConfigError;

use common::ErrorLocation;

use std::time::Duration;

use log::debug;
use url::Url;

const DEFAULT_TIMEOUT_DURATION: Duration = Duration::from_secs(30);
const HTTP_SCHEME: &str = "http";
const HTTPS_SCHEME: &str = "https";

/// Immutable connection configuration: the base host plus request timeout.
///
/// Created once at application start (or per test case) and read-only
/// afterwards. The host is validated here so the transport never has to.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    host: Url,
    timeout: Duration,
}

impl ApiConfig {
    /// Build a config for a base host with the default request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the host is empty, unparseable, or not
    /// an http/https URL.
    pub fn new(host: &str) -> Result<Self, ConfigError> {
        Self::with_timeout(host, DEFAULT_TIMEOUT_DURATION)
    }

    /// Build a config with an explicit request timeout.
    pub fn with_timeout(host: &str, timeout: Duration) -> Result<Self, ConfigError> {
        if host.is_empty() {
            return Err(ConfigError::MissingHost {
                location: ErrorLocation::capture(),
            });
        }

        let mut parsed = Url::parse(host).map_err(|e| ConfigError::InvalidHost {
            host: host.to_string(),
            reason: e.to_string(),
            location: ErrorLocation::capture(),
        })?;

        if parsed.scheme() != HTTP_SCHEME && parsed.scheme() != HTTPS_SCHEME {
            return Err(ConfigError::UnsupportedScheme {
                host: host.to_string(),
                location: ErrorLocation::capture(),
            });
        }

        // Url::join drops the final path segment of a base that does not
        // end in '/', which would silently eat base paths like "/api/v2".
        if !parsed.path().ends_with('/') {
            let path = format!("{}/", parsed.path());
            parsed.set_path(&path);
        }

        debug!("Api config created for host {parsed}");

        Ok(Self {
            host: parsed,
            timeout,
        })
    }

    pub fn host(&self) -> &Url {
        &self.host
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}
