use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A scoring model uploaded to the backend.
///
/// `name` is what gets passed as the `model` parameter of a recommendation
/// query.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TrainedModel {
    pub name: String,
    #[serde(default)]
    pub notebook_url: Option<String>,
    #[serde(default)]
    pub team_members: Option<String>,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub folder_url: Option<String>,
    /// Evaluation scores keyed by metric; empty object when not yet scored.
    #[serde(default)]
    pub scores: Value,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
