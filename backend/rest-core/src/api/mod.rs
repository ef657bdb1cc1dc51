//! Generic client/form: typed query operations plus instance-bound
//! mutation for any [`ApiModel`].

use crate::context::ApiContext;
use crate::model::ApiModel;
use crate::response::ApiResponse;

use std::sync::Arc;

use log::debug;
use reqwest::Method;
use serde_json::{Map, Value};

const MISSING_MODEL_PRECONDITION: &str =
    "save requires a wrapped model; construct the form with Api::with_model";

/// Generic client for a model type `T`, optionally wrapping one instance
/// for mutation.
///
/// Constructed per call-site with an injected, shared transport context.
/// Every operation performs exactly one HTTP call, never returns `Err` for
/// ordinary failure outcomes, and mirrors the latest envelope's error state
/// onto `has_errors` / `error_messages`.
pub struct Api<T: ApiModel> {
    context: Arc<ApiContext>,

    /// Wrapped model; absent for pure query use.
    pub model: Option<T>,

    pub has_errors: bool,
    pub error_messages: Option<Vec<String>>,
}

impl<T: ApiModel> Api<T> {
    /// Client for pure query use.
    pub fn new(context: Arc<ApiContext>) -> Self {
        Self {
            context,
            model: None,
            has_errors: false,
            error_messages: None,
        }
    }

    /// Form wrapping an existing model instance for mutation.
    pub fn with_model(context: Arc<ApiContext>, model: T) -> Self {
        Self {
            context,
            model: Some(model),
            has_errors: false,
            error_messages: None,
        }
    }

    /// Fetch the default collection endpoint for `T`.
    ///
    /// # Returns
    ///
    /// The decoded entities - always a vector, empty on any failure - plus
    /// the full envelope. Failure detail lives in the envelope's `errors`,
    /// never in the vector itself.
    pub async fn find_array(&mut self) -> (Vec<T>, ApiResponse<T>) {
        self.collection_query(&T::collection_path()).await
    }

    /// Fetch a collection from an explicit path, bypassing derivation.
    pub async fn get_array(&mut self, path: &str) -> (Vec<T>, ApiResponse<T>) {
        self.collection_query(path).await
    }

    /// Fetch a single entity from an explicit path, bypassing derivation.
    pub async fn get(&mut self, path: &str) -> ApiResponse<T> {
        let outcome = self.context.perform(Method::GET, path, None).await;
        let response = ApiResponse::single_entity(outcome);

        self.mirror(&response);
        response
    }

    /// Fetch the default singular endpoint for `T`.
    ///
    /// # Returns
    ///
    /// The decoded entity when decoding succeeded - including the
    /// best-effort case where a recognized error envelope carried entity
    /// data - plus the full envelope.
    pub async fn find(&mut self) -> (Option<T>, ApiResponse<T>) {
        let response = self.get(&T::singular_path()).await;
        (response.single.clone(), response)
    }

    /// Persist the wrapped model: create when it has no identity yet,
    /// update otherwise.
    ///
    /// A decoded response entity replaces the wrapped model, so
    /// server-assigned fields (identity included) flow back onto it.
    ///
    /// # Panics
    ///
    /// Panics when no model is wrapped. That is a programmer error, not an
    /// ordinary failure outcome.
    pub async fn save(&mut self) -> ApiResponse<T> {
        let model = self.model.as_ref().expect(MISSING_MODEL_PRECONDITION);

        let mut wrapped = Map::new();
        wrapped.insert(T::envelope_key(), model.to_json());
        let body = Value::Object(wrapped);

        let (method, path) = if model.is_persisted() {
            (
                Method::PUT,
                format!("{}/{}", T::collection_path(), model.id()),
            )
        } else {
            (Method::POST, T::collection_path())
        };

        debug!("Saving {} via {method} {path}", T::resource_name());

        let outcome = self.context.perform(method, &path, Some(&body)).await;
        let response: ApiResponse<T> = ApiResponse::single_entity(outcome);

        if let Some(updated) = &response.single {
            self.model = Some(updated.clone());
        }

        self.mirror(&response);
        response
    }

    async fn collection_query(&mut self, path: &str) -> (Vec<T>, ApiResponse<T>) {
        let outcome = self.context.perform(Method::GET, path, None).await;
        let response = ApiResponse::collection(outcome);

        self.mirror(&response);
        (response.array.clone().unwrap_or_default(), response)
    }

    fn mirror(&mut self, response: &ApiResponse<T>) {
        self.has_errors = response.has_errors();
        self.error_messages = response.error_messages();
    }
}
