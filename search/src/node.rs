//! Search node and frontier ordering key.

use std::cmp::Ordering;

use glucopath_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use glucopath_kernel::rules::AdjustmentV1;
use glucopath_kernel::state::HealthStateV1;

/// An immutable node in the search arena.
///
/// `node_id` is the node's index in the arena; `parent_id` points at the
/// node it was generated from. Parents are always created before their
/// children, so the links form a tree rooted at node 0.
#[derive(Debug, Clone)]
pub struct SearchNodeV1 {
    /// Arena index, assigned in creation order.
    pub node_id: u64,
    /// Parent node ID (`None` for the start node).
    pub parent_id: Option<u64>,
    /// The metrics at this node.
    pub state: HealthStateV1,
    /// Canonical hash of the state's identity bytes.
    pub state_fingerprint: ContentHash,
    /// Tree depth (root = 0).
    pub depth: u32,
    /// Path cost as defined by the policy's cost accounting.
    pub g_cost: f64,
    /// Heuristic estimate to the goal.
    pub h_cost: f64,
    /// The adjustment that produced this node from its parent.
    pub producing_adjustment: Option<AdjustmentV1>,
}

impl SearchNodeV1 {
    /// The start node: `g = 0`, so its frontier key is its heuristic.
    #[must_use]
    pub fn root(state: HealthStateV1, h_cost: f64) -> Self {
        Self {
            node_id: 0,
            parent_id: None,
            state,
            state_fingerprint: node_fingerprint(&state),
            depth: 0,
            g_cost: 0.0,
            h_cost,
            producing_adjustment: None,
        }
    }

    /// A child of `parent` at arena index `node_id`.
    #[must_use]
    pub fn child(
        parent: &Self,
        node_id: u64,
        adjustment: AdjustmentV1,
        state: HealthStateV1,
        g_cost: f64,
        h_cost: f64,
    ) -> Self {
        Self {
            node_id,
            parent_id: Some(parent.node_id),
            state,
            state_fingerprint: node_fingerprint(&state),
            depth: parent.depth + 1,
            g_cost,
            h_cost,
            producing_adjustment: Some(adjustment),
        }
    }

    /// Compute `f_cost = g_cost + h_cost` (the frontier ordering key).
    #[must_use]
    pub fn f_cost(&self) -> f64 {
        self.g_cost + self.h_cost
    }
}

/// Fingerprint of a state's dedup identity.
#[must_use]
pub fn node_fingerprint(state: &HealthStateV1) -> ContentHash {
    canonical_hash(HashDomain::SearchNode, &state.identity_bytes())
}

/// The frontier ordering key: `(f_cost, blood_sugar, node_id)`.
///
/// Lower `f_cost` first, then lower blood sugar, then older node. Floats are
/// compared with `total_cmp`, so the order is total.
#[derive(Debug, Clone, Copy)]
pub struct FrontierKey {
    pub f_cost: f64,
    pub blood_sugar: f64,
    pub node_id: u64,
}

impl PartialEq for FrontierKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for FrontierKey {}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.f_cost
            .total_cmp(&other.f_cost)
            .then(self.blood_sugar.total_cmp(&other.blood_sugar))
            .then(self.node_id.cmp(&other.node_id))
    }
}

impl From<&SearchNodeV1> for FrontierKey {
    fn from(node: &SearchNodeV1) -> Self {
        Self {
            f_cost: node.f_cost(),
            blood_sugar: node.state.blood_sugar,
            node_id: node.node_id,
        }
    }
}
