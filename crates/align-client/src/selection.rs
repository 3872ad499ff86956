//! Comparison-node selection policy.
//!
//! Review starts from the most granular nodes available: among a batch, only
//! the nodes at the maximum depth are eligible, and one of them is drawn
//! uniformly so reviewers do not all walk the tree in the same order.
//!
//! These functions are pure; [`crate::ApiClient`] feeds them fetched batches
//! and turns an empty pick into [`crate::ClientError::NoCandidates`].

use align_core::entities::Node;
use rand::Rng;
use rand::seq::SliceRandom;

/// All nodes whose depth equals the batch's maximum depth, in batch order.
#[must_use]
pub fn deepest(nodes: &[Node]) -> Vec<&Node> {
    let Some(max_depth) = nodes.iter().map(Node::depth).max() else {
        return Vec::new();
    };
    nodes.iter().filter(|n| n.depth() == max_depth).collect()
}

/// Draw one of the deepest nodes uniformly at random.
///
/// Returns `None` for an empty batch.
pub fn pick_deepest<'a, R: Rng + ?Sized>(nodes: &'a [Node], rng: &mut R) -> Option<&'a Node> {
    deepest(nodes).choose(rng).copied()
}

/// The first node that is not `base_node_id`.
///
/// The server orders candidates, so "first" is its best match.
#[must_use]
pub fn first_counterpart(nodes: Vec<Node>, base_node_id: i64) -> Option<Node> {
    nodes.into_iter().find(|n| n.id() != base_node_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::HashMap;

    fn batch(json: &str) -> Vec<Node> {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn deepest_keeps_only_max_depth() {
        let nodes = batch(r#"[{"id":1,"depth":2},{"id":2,"depth":3},{"id":3,"depth":3}]"#);
        let ids: Vec<i64> = deepest(&nodes).iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec![2, 3]);
    }

    #[test]
    fn deepest_of_empty_batch() {
        assert!(deepest(&[]).is_empty());
    }

    #[test]
    fn pick_never_returns_shallower_node() {
        let nodes = batch(r#"[{"id":1,"depth":2},{"id":2,"depth":3},{"id":3,"depth":3}]"#);
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..500 {
            let picked = pick_deepest(&nodes, &mut rng).unwrap();
            assert_eq!(picked.depth(), 3);
            assert_ne!(picked.id(), 1);
        }
    }

    #[test]
    fn pick_covers_every_tied_node() {
        let nodes = batch(
            r#"[{"id":10,"depth":4},{"id":11,"depth":4},{"id":12,"depth":1},{"id":13,"depth":4}]"#,
        );
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts: HashMap<i64, u32> = HashMap::new();
        for _ in 0..3000 {
            let picked = pick_deepest(&nodes, &mut rng).unwrap();
            *counts.entry(picked.id()).or_default() += 1;
        }
        assert!(!counts.contains_key(&12));
        for id in [10, 11, 13] {
            let count = counts.get(&id).copied().unwrap_or(0);
            // Expected 1000 each; the bounds are several standard deviations wide.
            assert!((800..=1200).contains(&count), "node {id} drawn {count} times");
        }
    }

    #[test]
    fn pick_single_node_batch() {
        let nodes = batch(r#"[{"id":9,"depth":0}]"#);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(pick_deepest(&nodes, &mut rng).map(Node::id), Some(9));
    }

    #[test]
    fn pick_from_empty_batch() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(pick_deepest(&[], &mut rng).is_none());
    }

    #[test]
    fn counterpart_skips_base_node() {
        let nodes = batch(r#"[{"id":5},{"id":7}]"#);
        assert_eq!(first_counterpart(nodes, 5).map(|n| n.id()), Some(7));
    }

    #[test]
    fn counterpart_keeps_server_order() {
        let nodes = batch(r#"[{"id":8},{"id":5},{"id":7}]"#);
        assert_eq!(first_counterpart(nodes, 5).map(|n| n.id()), Some(8));
    }

    #[test]
    fn counterpart_never_returns_base_node() {
        let nodes = batch(r#"[{"id":5},{"id":5}]"#);
        assert!(first_counterpart(nodes, 5).is_none());
        assert!(first_counterpart(Vec::new(), 5).is_none());
    }
}
