use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::enums::JudgmentMode;

/// The fields a reviewer supplies for a pairwise judgment.
///
/// Protocol metadata (`ui_version_hash`, `mode`, the dev-build flag) is added
/// by the client when the judgment is submitted, see [`JudgmentPayload`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct NewJudgment {
    pub node1: i64,
    pub node2: i64,
    pub rating: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
    pub ui_name: String,
    #[serde(default)]
    pub extra_fields: Map<String, Value>,
}

impl NewJudgment {
    #[must_use]
    pub fn new(node1: i64, node2: i64, rating: f64, ui_name: impl Into<String>) -> Self {
        Self {
            node1,
            node2,
            rating,
            confidence: None,
            ui_name: ui_name.into(),
            extra_fields: Map::new(),
        }
    }

    #[must_use]
    pub const fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }

    #[must_use]
    pub fn with_extra_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra_fields.insert(key.into(), value.into());
        self
    }
}

/// The body POSTed to the judgment collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JudgmentPayload {
    pub node1: i64,
    pub node2: i64,
    pub rating: f64,
    pub confidence: Option<f64>,
    pub ui_name: String,
    pub ui_version_hash: String,
    pub mode: JudgmentMode,
    pub extra_fields: Map<String, Value>,
}

/// A judgment record as stored by the server.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Judgment {
    pub id: i64,
    #[serde(default)]
    pub url: Option<String>,
    pub node1: i64,
    pub node2: i64,
    pub rating: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub extra_fields: Value,
    #[serde(default)]
    pub mode: String,
    #[serde(default)]
    pub ui_name: String,
    #[serde(default)]
    pub ui_version_hash: String,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Unset (`null`) until the record is assigned to a train/test split.
    #[serde(default)]
    pub is_test_data: Option<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
