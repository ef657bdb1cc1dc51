use crate::config::ApiConfig;
use crate::error::transport::TransportError;

use common::ErrorLocation;

use log::{debug, warn};
use reqwest::{Client, Method};
use serde_json::Value;

/// Raw result of a delivered HTTP exchange: status line plus body text.
///
/// A non-2xx status is still a delivered response; judging it is the
/// response envelope's job, not the transport's.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status_code: u16,
    pub body: String,
}

/// Transport context: owns the HTTP client and the connection config.
///
/// Constructed once and shared via `Arc` by every client bound to it.
/// Tests isolate by building a context per test case pointed at a local
/// stub server - there is no process-wide instance to swap.
pub struct ApiContext {
    config: ApiConfig,
    client: Client,
}

impl ApiContext {
    /// # Errors
    ///
    /// Returns [`TransportError::Client`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: ApiConfig) -> Result<Self, TransportError> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| TransportError::Client {
                message: e.to_string(),
                location: ErrorLocation::capture(),
            })?;

        Ok(Self { config, client })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Perform one HTTP call against the configured host.
    ///
    /// # Returns
    ///
    /// `Ok(RawResponse)` for ANY delivered response, non-2xx included.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] only when no usable response was
    /// obtainable: connection failure, timeout, an unreadable body, or a
    /// path that cannot be joined onto the host.
    pub async fn perform(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<RawResponse, TransportError> {
        let url = self.config.host().join(path.trim_start_matches('/'))?;

        debug!("{method} {url}");

        let request = match method {
            Method::GET => self.client.get(url),
            Method::POST => self.client.post(url),
            Method::PUT => self.client.put(url),
            Method::DELETE => self.client.delete(url),
            other => {
                return Err(TransportError::UnsupportedMethod {
                    method: other.to_string(),
                    location: ErrorLocation::capture(),
                });
            }
        };

        let request = match body {
            Some(body) => request.json(body),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            warn!("Request to {path} failed before a response arrived: {e}");
            TransportError::Connect {
                message: e.to_string(),
                location: ErrorLocation::capture(),
            }
        })?;

        let status_code = response.status().as_u16();

        let body = response.text().await.map_err(|e| TransportError::Read {
            message: e.to_string(),
            location: ErrorLocation::capture(),
        })?;

        debug!("{path} -> {status_code} ({} byte body)", body.len());

        Ok(RawResponse { status_code, body })
    }
}
