mod error;

use crate::model::ApiModel;

use serde::{Deserialize, Serialize};

/// Fixture entity with the default derivations.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Post {
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

/// Fixture entity overriding the derived endpoints (irregular plural).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct Person {
    pub id: String,
    pub name: String,
}

impl ApiModel for Person {
    fn resource_name() -> &'static str {
        "Person"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn collection_path() -> String {
        "people".to_string()
    }
}
