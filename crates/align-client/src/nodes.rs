//! Curriculum node resource.
//!
//! Every method here is one GET. Candidate generation for comparisons runs
//! on the server (the `scheduler` parameter names the strategy); picking a
//! starting node from a document runs client-side, see [`crate::selection`].

use align_core::entities::{Node, NodeSummary};

use crate::{ApiClient, error::ClientError, resource::NODE, selection};

/// Scheduler used when the caller has no preference.
pub const DEFAULT_SCHEDULER: &str = "random";

impl ApiClient {
    /// Pick a node to start reviewing `curriculum_id` from.
    ///
    /// Fetches the document's nodes and draws uniformly among those at the
    /// maximum depth present.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoCandidates`] if the document has no nodes, or
    /// any request/parse error.
    pub async fn get_root_node_for_review(&self, curriculum_id: i64) -> Result<Node, ClientError> {
        let nodes: Vec<Node> = self
            .list(NODE, &[("document", curriculum_id.to_string())])
            .await?;
        let picked = selection::pick_deepest(&nodes, &mut rand::thread_rng()).cloned();
        picked.ok_or_else(|| {
            tracing::warn!(curriculum_id, "no nodes to review in document");
            ClientError::NoCandidates {
                context: format!("document {curriculum_id} returned no nodes"),
            }
        })
    }

    /// Candidate nodes produced by the server-side `scheduler`.
    ///
    /// The scheduler draws from the whole node pool; `curriculum_id` only
    /// identifies the caller's context in logs.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_comparison_candidates(
        &self,
        curriculum_id: i64,
        scheduler: &str,
    ) -> Result<Vec<Node>, ClientError> {
        tracing::debug!(curriculum_id, scheduler, "fetching comparison candidates");
        self.list(NODE, &[("scheduler", scheduler.to_string())])
            .await
    }

    /// A node to compare against `base_node_id`.
    ///
    /// Asks the scheduler for candidates rooted at the base node and returns
    /// the first one that is not the base node itself.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NoCandidates`] if nothing is left after excluding
    /// the base node, or any request/parse error.
    pub async fn get_counterpart_node(
        &self,
        base_node_id: i64,
        scheduler: &str,
    ) -> Result<Node, ClientError> {
        let nodes: Vec<Node> = self
            .list(
                NODE,
                &[
                    ("left_root_id", base_node_id.to_string()),
                    ("scheduler", scheduler.to_string()),
                ],
            )
            .await?;
        selection::first_counterpart(nodes, base_node_id).ok_or_else(|| {
            tracing::warn!(base_node_id, scheduler, "scheduler returned no counterpart");
            ClientError::NoCandidates {
                context: format!("no counterpart for node {base_node_id} from scheduler '{scheduler}'"),
            }
        })
    }

    /// The depth-1 node of `document_id`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if the document has no top-level node,
    /// or any request/parse error.
    pub async fn get_top_level_node(&self, document_id: i64) -> Result<Node, ClientError> {
        let nodes: Vec<Node> = self
            .list(
                NODE,
                &[("document", document_id.to_string()), ("depth", "1".to_string())],
            )
            .await?;
        nodes.into_iter().next().ok_or_else(|| ClientError::NotFound {
            resource: NODE.name.to_string(),
            query: format!("document={document_id}&depth=1"),
        })
    }

    /// Children of `node_id`, as populated by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_children(&self, node_id: i64) -> Result<Vec<NodeSummary>, ClientError> {
        let node: Node = self.get_item(NODE, node_id).await?;
        Ok(node.children)
    }

    /// Fetch a known pair of nodes, e.g. to redisplay an earlier comparison.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] if the HTTP request fails, the server returns a
    /// non-success status, or the response cannot be parsed.
    pub async fn get_node_pair(&self, left_id: i64, right_id: i64) -> Result<Vec<Node>, ClientError> {
        self.list(
            NODE,
            &[("left", left_id.to_string()), ("right", right_id.to_string())],
        )
        .await
    }
}
