use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Node;

/// Ranked recommendations for a target node.
///
/// `relevances[i]` is the model score for `results[i]`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recommendations {
    #[serde(default)]
    pub count: Option<u64>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub previous: Option<String>,
    #[serde(default)]
    pub target_node: Option<Node>,
    #[serde(default)]
    pub relevances: Vec<f64>,
    #[serde(default)]
    pub results: Vec<Node>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Recommendations {
    /// Pair each recommended node with its score.
    pub fn scored(&self) -> impl Iterator<Item = (&Node, Option<f64>)> {
        self.results
            .iter()
            .enumerate()
            .map(|(idx, node)| (node, self.relevances.get(idx).copied()))
    }
}
