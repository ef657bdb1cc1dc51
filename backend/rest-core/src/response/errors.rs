//! Error normalization policy: decides whether and how field-level error
//! messages are extracted from a failed response, with a deterministic
//! fallback for everything unrecognized.

use crate::model::ApiModel;
use crate::response::ErrorMap;

use common::HttpStatusCode;

use log::{debug, warn};
use serde_json::Value;

/// Sentinel key for request-level (non-field) messages.
pub const BASE_ERROR_KEY: &str = "base";

/// Message substituted for any failure this layer cannot decode.
pub const UNEXPECTED_SERVER_ERROR: &str = "An unexpected server error occurred";

const ERRORS_FIELD: &str = "errors";

/// Errors map for a transport-level failure (no response arrived).
pub(crate) fn transport_failure() -> ErrorMap {
    generic()
}

fn generic() -> ErrorMap {
    let mut errors = ErrorMap::new();
    errors.insert(
        BASE_ERROR_KEY.to_string(),
        vec![UNEXPECTED_SERVER_ERROR.to_string()],
    );
    errors
}

/// Extract normalized errors - and a best-effort entity - from a failed
/// response body.
///
/// Recognition is strict: only `{ "<resource>": { "errors": ["msg", ...] } }`
/// with a flat, all-string sequence qualifies. Plain text, foreign envelope
/// keys, and field-keyed validation maps all collapse to the generic
/// fallback message under [`BASE_ERROR_KEY`].
// TODO: recognize field-keyed validation maps instead of collapsing them to
// the generic message; callers currently depend on the fallback text, so
// this needs a coordinated change.
pub(crate) fn extract<T: ApiModel>(body: &str, status: HttpStatusCode) -> (ErrorMap, Option<T>) {
    match recognize(&T::envelope_key(), body) {
        Some((messages, entity)) => {
            debug!(
                "Server reported {} error message(s) with status {status}",
                messages.len()
            );

            let mut errors = ErrorMap::new();
            errors.insert(BASE_ERROR_KEY.to_string(), messages);

            (errors, Some(T::from_json(&entity)))
        }
        None => {
            warn!("Unrecognized failure body with status {status}, substituting generic error");
            (generic(), None)
        }
    }
}

/// Match the recognized error envelope shape.
///
/// Returns the plain-text messages plus the nested resource object, which
/// may carry entity data alongside the `errors` field.
fn recognize(envelope_key: &str, body: &str) -> Option<(Vec<String>, Value)> {
    let value: Value = serde_json::from_str(body).ok()?;
    let nested = value.get(envelope_key)?;
    let reported = nested.as_object()?.get(ERRORS_FIELD)?.as_array()?;

    let mut messages = Vec::with_capacity(reported.len());
    for entry in reported {
        messages.push(entry.as_str()?.to_string());
    }

    Some((messages, nested.clone()))
}
