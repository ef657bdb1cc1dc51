//! Response envelope: the decoded result of a single request.

pub mod errors;

use crate::context::RawResponse;
use crate::error::transport::TransportError;
use crate::model::ApiModel;

use common::HttpStatusCode;

use std::collections::BTreeMap;

use log::warn;
use serde_json::Value;

/// Field name (or the `"base"` sentinel) to ordered error messages.
///
/// BTreeMap keeps the flattening order of [`ApiResponse::error_messages`]
/// deterministic.
pub type ErrorMap = BTreeMap<String, Vec<String>>;

/// Decoded result of one request: payload (collection, single entity, or
/// neither), normalized error information, and the raw status.
///
/// Invariants:
/// - `errors` is populated exactly when the request was judged unsuccessful
/// - `array` and `single` are never both populated
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    /// Entities of a collection query. Always present for collection
    /// queries - empty on failure - and absent otherwise.
    pub array: Option<Vec<T>>,

    /// Entity of a single-entity query or mutation. May coexist with
    /// `errors` when the server sent entity data alongside its messages.
    pub single: Option<T>,

    pub errors: Option<ErrorMap>,

    /// Raw HTTP status; `0` when no response was received.
    pub status_code: u16,
}

impl<T: ApiModel> ApiResponse<T> {
    /// Build the envelope for a collection query outcome.
    ///
    /// Failures of any kind resolve `array` to an empty vector rather than
    /// a failure value; callers inspect `errors` for the failure itself.
    pub fn collection(outcome: Result<RawResponse, TransportError>) -> Self {
        let raw = match outcome {
            Ok(raw) => raw,
            Err(failure) => return Self::transport_failure(Some(Vec::new()), failure),
        };

        let status = HttpStatusCode::from(raw.status_code);

        if status.is_success() {
            if let Some(items) = decode_collection::<T>(&raw.body) {
                return Self {
                    array: Some(items),
                    single: None,
                    errors: None,
                    status_code: raw.status_code,
                };
            }
            // A 2xx body that is not a collection re-enters the failure path.
        }

        let (extracted, _) = errors::extract::<T>(&raw.body, status);

        Self {
            array: Some(Vec::new()),
            single: None,
            errors: Some(extracted),
            status_code: raw.status_code,
        }
    }

    /// Build the envelope for a single-entity query or mutation outcome.
    ///
    /// On failure, `single` stays absent unless the server's recognized
    /// error envelope carried entity data (best-effort decode).
    pub fn single_entity(outcome: Result<RawResponse, TransportError>) -> Self {
        let raw = match outcome {
            Ok(raw) => raw,
            Err(failure) => return Self::transport_failure(None, failure),
        };

        let status = HttpStatusCode::from(raw.status_code);

        if status.is_success() {
            if let Some(entity) = decode_single::<T>(&raw.body) {
                return Self {
                    array: None,
                    single: Some(entity),
                    errors: None,
                    status_code: raw.status_code,
                };
            }
        }

        let (extracted, entity) = errors::extract::<T>(&raw.body, status);

        Self {
            array: None,
            single: entity,
            errors: Some(extracted),
            status_code: raw.status_code,
        }
    }

    fn transport_failure(array: Option<Vec<T>>, failure: TransportError) -> Self {
        warn!("No response was obtainable: {failure}");

        Self {
            array,
            single: None,
            errors: Some(errors::transport_failure()),
            status_code: HttpStatusCode::NO_RESPONSE.0,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors.is_some()
    }

    /// All messages from `errors`, flattened in key order then each key's
    /// message order. Absent when `errors` is absent.
    pub fn error_messages(&self) -> Option<Vec<String>> {
        self.errors
            .as_ref()
            .map(|errors| errors.values().flatten().cloned().collect())
    }
}

fn decode_collection<T: ApiModel>(body: &str) -> Option<Vec<T>> {
    match serde_json::from_str::<Value>(body) {
        Ok(Value::Array(items)) => Some(items.iter().map(T::from_json).collect()),
        _ => None,
    }
}

fn decode_single<T: ApiModel>(body: &str) -> Option<T> {
    let value = serde_json::from_str::<Value>(body).ok()?;

    if !value.is_object() {
        return None;
    }

    // Accept a bare entity object or one wrapped under the resource key.
    let unwrapped = match value.get(T::envelope_key().as_str()) {
        Some(nested @ Value::Object(_)) => nested,
        _ => &value,
    };

    Some(T::from_json(unwrapped))
}
