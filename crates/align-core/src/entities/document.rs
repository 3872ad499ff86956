use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A curriculum document, e.g. a national math standard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Document {
    pub id: i64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub digitization_method: String,
    #[serde(default)]
    pub source_url: String,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub official: Option<bool>,
    /// The depth-1 node of this document, if the server found one.
    #[serde(default)]
    pub root_node_id: Option<i64>,
    #[serde(default)]
    pub root_node_url: Option<String>,
    /// Server fields not modelled above.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
