//! Test helpers for the client pipeline integration tests.
//!
//! Provides the fixture entity and per-test context construction. Each test
//! builds its own context pointed at its own stub server, so tests are
//! fully isolated and run in parallel.

use rest_core::{ApiConfig, ApiContext, ApiModel};

use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// Fixture entity used by every integration test.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
}

impl ApiModel for Post {
    fn resource_name() -> &'static str {
        "post"
    }

    fn id(&self) -> &str {
        &self.id
    }
}

/// Build a shared context for the given host.
pub fn context_for(host: &str) -> Arc<ApiContext> {
    let config = ApiConfig::new(host).expect("valid test host");
    Arc::new(ApiContext::new(config).expect("client construction"))
}
