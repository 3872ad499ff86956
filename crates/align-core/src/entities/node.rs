use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::Document;
use crate::enums::NodeKind;

/// The base fields every serialized node carries.
///
/// Related nodes (`children`, `ancestors`, siblings) come back in this
/// shape; only the node that was asked for gets the full [`Node`] form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NodeSummary {
    pub id: i64,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub identifier: String,
    /// Raw kind string; see [`NodeSummary::node_kind`].
    #[serde(default)]
    pub kind: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub sort_order: f64,
    /// Tree level; 1 is the document's top-level node, higher is more granular.
    #[serde(default)]
    pub depth: u32,
    #[serde(default)]
    pub time_units: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub extra_fields: Value,
    #[serde(default)]
    pub numchild: u32,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NodeSummary {
    /// Parsed kind, `None` for kinds this client does not know.
    #[must_use]
    pub fn node_kind(&self) -> Option<NodeKind> {
        self.kind.parse().ok()
    }

    #[must_use]
    pub const fn is_leaf(&self) -> bool {
        self.numchild == 0
    }
}

/// A curriculum tree node with its neighbourhood.
///
/// Fields neither struct models end up in `summary.extra`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Node {
    #[serde(flatten)]
    pub summary: NodeSummary,
    #[serde(default)]
    pub document: Option<Document>,
    #[serde(default)]
    pub ancestors: Vec<NodeSummary>,
    /// Populated by the server; never computed client-side.
    #[serde(default)]
    pub children: Vec<NodeSummary>,
    #[serde(default)]
    pub earlier_siblings: Vec<NodeSummary>,
    #[serde(default)]
    pub later_siblings: Vec<NodeSummary>,
    /// URLs of the judgments that reference this node.
    #[serde(default)]
    pub judgments: Vec<String>,
}

impl Node {
    #[must_use]
    pub const fn id(&self) -> i64 {
        self.summary.id
    }

    #[must_use]
    pub const fn depth(&self) -> u32 {
        self.summary.depth
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.summary.title
    }

    /// Server fields this client does not model.
    #[must_use]
    pub const fn extra(&self) -> &Map<String, Value> {
        &self.summary.extra
    }
}
