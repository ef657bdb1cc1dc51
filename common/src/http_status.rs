//! HTTP status classification for response normalization.

/// HTTP status code recorded on a response envelope.
///
/// Stored directly rather than parsed back out of error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpStatusCode(pub u16);

impl HttpStatusCode {
    /// Sentinel recorded when no response was received at all.
    pub const NO_RESPONSE: HttpStatusCode = HttpStatusCode(0);

    /// The [200, 300) success window.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.0)
    }

    /// 4xx client errors.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.0)
    }

    /// 5xx server errors.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.0)
    }

    /// Whether a response reached us at all. `false` only for the
    /// [`NO_RESPONSE`](HttpStatusCode::NO_RESPONSE) sentinel.
    pub fn received(&self) -> bool {
        self.0 != 0
    }
}

impl From<u16> for HttpStatusCode {
    fn from(code: u16) -> Self {
        HttpStatusCode(code)
    }
}

impl std::fmt::Display for HttpStatusCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
