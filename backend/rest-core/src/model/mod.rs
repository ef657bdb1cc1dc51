//! Model capability contract and endpoint derivation.
//!
//! A domain entity participates in the pipeline by declaring a resource
//! name and an identity; everything else (endpoint paths, envelope key,
//! JSON mapping) is derived and overridable per type.

use log::debug;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Structural contract every domain entity must satisfy.
///
/// Decoding is tolerant: unknown fields are ignored and an empty or
/// undecodable payload yields `Self::default()` rather than a failure.
/// Mark fields `#[serde(default)]` so partial payloads map cleanly.
pub trait ApiModel: Clone + Default + Serialize + DeserializeOwned + Send + Sync {
    /// Declared resource name for this type, e.g. `"post"`.
    fn resource_name() -> &'static str;

    /// Server-side identity; empty until the entity has been persisted.
    fn id(&self) -> &str;

    fn is_persisted(&self) -> bool {
        !self.id().is_empty()
    }

    /// Envelope key for wrapped payloads and recognized error bodies.
    fn envelope_key() -> String {
        Self::resource_name().to_lowercase()
    }

    /// Default collection endpoint, derived from the resource name.
    ///
    /// Override when a type maps to an irregular endpoint name.
    fn collection_path() -> String {
        pluralize(&Self::envelope_key())
    }

    /// Default singular endpoint.
    fn singular_path() -> String {
        Self::envelope_key()
    }

    /// Decode from a JSON value, tolerating partial or empty input.
    ///
    /// Never fails: a non-object value or a value the type cannot absorb
    /// produces the default instance.
    fn from_json(value: &Value) -> Self {
        if !value.is_object() {
            return Self::default();
        }

        serde_json::from_value(value.clone()).unwrap_or_else(|error| {
            debug!(
                "Partial {} payload fell back to defaults: {error}",
                Self::resource_name()
            );
            Self::default()
        })
    }

    /// Encode for an outbound write.
    fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

/// Naive English pluralization used for collection endpoint derivation.
///
/// Covers the regular cases (`post` -> `posts`, `category` -> `categories`,
/// `box` -> `boxes`); irregular nouns override
/// [`collection_path`](ApiModel::collection_path) instead.
pub fn pluralize(name: &str) -> String {
    if let Some(stem) = name.strip_suffix('y') {
        let vowel_stem = stem.ends_with(|c: char| matches!(c, 'a' | 'e' | 'i' | 'o' | 'u'));
        if !stem.is_empty() && !vowel_stem {
            return format!("{stem}ies");
        }
    }

    if name.ends_with('s')
        || name.ends_with('x')
        || name.ends_with('z')
        || name.ends_with("ch")
        || name.ends_with("sh")
    {
        return format!("{name}es");
    }

    format!("{name}s")
}
