use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Points the current user has earned from review actions.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserPoints {
    pub points: i64,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
