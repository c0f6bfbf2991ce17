//! `SearchGraphV1`: expansion-event audit log.
//!
//! The normative decision surface is the ordered list of `ExpandEventV1`
//! entries. Node summaries are a derived index for path reconstruction.
//! Metric values are serialized as canonical decimal strings.

use glucopath_kernel::config::GlycemicConfigV1;
use glucopath_kernel::proof::canon::{canonical_f64, canonical_json_bytes, CanonError};
use glucopath_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use glucopath_kernel::state::HealthStateV1;

use crate::policy::SearchPolicyV1;

/// The complete search audit trail.
#[derive(Debug, Clone)]
pub struct SearchGraphV1 {
    /// Ordered expansion events.
    pub expansions: Vec<ExpandEventV1>,
    /// Derived node index sorted by `node_id` ascending.
    pub node_summaries: Vec<SearchGraphNodeSummaryV1>,
    /// Aggregate metadata.
    pub metadata: SearchGraphMetadata,
}

/// A single frontier-pop + expansion event.
#[derive(Debug, Clone)]
pub struct ExpandEventV1 {
    /// Total order of expansions.
    pub expansion_order: u64,
    /// The node being expanded.
    pub node_id: u64,
    /// Hex fingerprint of the expanded node's state.
    pub state_fingerprint: String,
    /// The frontier key at time of pop.
    pub frontier_pop_key: FrontierPopKeyV1,
    /// Ordered candidate decision log.
    pub candidates: Vec<CandidateRecordV1>,
}

/// The frontier ordering key recorded at pop time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrontierPopKeyV1 {
    pub f_cost: f64,
    pub blood_sugar: f64,
    pub node_id: u64,
}

/// A candidate with its outcome recorded in the graph.
#[derive(Debug, Clone)]
pub struct CandidateRecordV1 {
    /// Index in the transition set.
    pub index: u64,
    /// Label of the adjustment that produced the candidate.
    pub adjustment: &'static str,
    /// The candidate's metrics.
    pub state: HealthStateV1,
    /// What happened to it.
    pub outcome: CandidateOutcomeV1,
}

/// Outcome of processing a candidate during expansion.
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateOutcomeV1 {
    /// Scored and pushed onto the frontier as a new node.
    Pushed { to_node: u64, g_cost: f64, h_cost: f64 },
    /// Its identity was already expanded.
    DuplicateSuppressed { existing_fingerprint: String },
    /// Skipped because the child would exceed `max_depth`.
    SkippedByDepthLimit,
}

/// Derived node summary for path reconstruction.
#[derive(Debug, Clone)]
pub struct SearchGraphNodeSummaryV1 {
    pub node_id: u64,
    pub parent_id: Option<u64>,
    pub state: HealthStateV1,
    pub state_fingerprint: String,
    pub depth: u32,
    pub f_cost: f64,
    pub is_goal: bool,
    pub expansion_order: Option<u64>,
}

/// Aggregate metadata.
#[derive(Debug, Clone)]
pub struct SearchGraphMetadata {
    // Inputs
    pub root_state_fingerprint: String,
    pub config: GlycemicConfigV1,
    pub policy: SearchPolicyV1,

    // Counters
    pub total_expansions: u64,
    pub total_candidates_generated: u64,
    pub total_duplicates_suppressed: u64,
    pub total_depth_limited: u64,
    pub total_stale_pops: u64,
    pub frontier_high_water: u64,
    pub termination_reason: TerminationReasonV1,
}

/// Why the search terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationReasonV1 {
    /// A popped node satisfied the goal predicate.
    GoalReached { node_id: u64 },
    /// Frontier emptied without reaching the goal ("no solution").
    FrontierExhausted,
    /// `max_expansions` budget was hit.
    ExpansionBudgetExceeded,
}

impl TerminationReasonV1 {
    /// Stable name used in audit records.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::GoalReached { .. } => "goal_reached",
            Self::FrontierExhausted => "frontier_exhausted",
            Self::ExpansionBudgetExceeded => "expansion_budget_exceeded",
        }
    }
}

// ---------------------------------------------------------------------------
// Canonical JSON serialization
// ---------------------------------------------------------------------------

impl SearchGraphV1 {
    /// Serialize the graph to canonical JSON bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn to_canonical_json_bytes(&self) -> Result<Vec<u8>, CanonError> {
        canonical_json_bytes(&self.to_json_value())
    }

    /// Content hash of the canonical graph bytes.
    ///
    /// # Errors
    ///
    /// Returns [`CanonError`] if serialization fails.
    pub fn digest(&self) -> Result<ContentHash, CanonError> {
        let bytes = self.to_canonical_json_bytes()?;
        Ok(canonical_hash(HashDomain::SearchGraph, &bytes))
    }

    /// Convert to a `serde_json::Value` for canonical serialization.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "expansions": self.expansions.iter().map(expand_event_to_json).collect::<Vec<_>>(),
            "metadata": metadata_to_json(&self.metadata),
            "node_summaries": self.node_summaries.iter().map(node_summary_to_json).collect::<Vec<_>>(),
        })
    }
}

/// JSON form of a state, floats as canonical strings.
#[must_use]
pub fn state_to_json(s: &HealthStateV1) -> serde_json::Value {
    serde_json::json!({
        "activity_score": canonical_f64(s.activity_score),
        "age": s.age,
        "blood_sugar": canonical_f64(s.blood_sugar),
        "bmi": canonical_f64(s.bmi),
    })
}

fn expand_event_to_json(e: &ExpandEventV1) -> serde_json::Value {
    serde_json::json!({
        "candidates": e.candidates.iter().map(candidate_record_to_json).collect::<Vec<_>>(),
        "expansion_order": e.expansion_order,
        "frontier_pop_key": {
            "blood_sugar": canonical_f64(e.frontier_pop_key.blood_sugar),
            "f_cost": canonical_f64(e.frontier_pop_key.f_cost),
            "node_id": e.frontier_pop_key.node_id,
        },
        "node_id": e.node_id,
        "state_fingerprint": e.state_fingerprint,
    })
}

fn candidate_record_to_json(r: &CandidateRecordV1) -> serde_json::Value {
    serde_json::json!({
        "adjustment": r.adjustment,
        "index": r.index,
        "outcome": outcome_to_json(&r.outcome),
        "state": state_to_json(&r.state),
    })
}

fn outcome_to_json(o: &CandidateOutcomeV1) -> serde_json::Value {
    match o {
        CandidateOutcomeV1::Pushed {
            to_node,
            g_cost,
            h_cost,
        } => serde_json::json!({
            "g_cost": canonical_f64(*g_cost),
            "h_cost": canonical_f64(*h_cost),
            "to_node": to_node,
            "type": "pushed",
        }),
        CandidateOutcomeV1::DuplicateSuppressed {
            existing_fingerprint,
        } => {
            serde_json::json!({"existing_fingerprint": existing_fingerprint, "type": "duplicate_suppressed"})
        }
        CandidateOutcomeV1::SkippedByDepthLimit => {
            serde_json::json!({"type": "skipped_by_depth_limit"})
        }
    }
}

fn node_summary_to_json(n: &SearchGraphNodeSummaryV1) -> serde_json::Value {
    serde_json::json!({
        "depth": n.depth,
        "expansion_order": n.expansion_order,
        "f_cost": canonical_f64(n.f_cost),
        "is_goal": n.is_goal,
        "node_id": n.node_id,
        "parent_id": n.parent_id,
        "state": state_to_json(&n.state),
        "state_fingerprint": n.state_fingerprint,
    })
}

fn metadata_to_json(m: &SearchGraphMetadata) -> serde_json::Value {
    serde_json::json!({
        "config": m.config.to_json_value(),
        "frontier_high_water": m.frontier_high_water,
        "policy": m.policy.to_json_value(),
        "root_state_fingerprint": m.root_state_fingerprint,
        "termination_reason": termination_reason_to_json(m.termination_reason),
        "total_candidates_generated": m.total_candidates_generated,
        "total_depth_limited": m.total_depth_limited,
        "total_duplicates_suppressed": m.total_duplicates_suppressed,
        "total_expansions": m.total_expansions,
        "total_stale_pops": m.total_stale_pops,
    })
}

fn termination_reason_to_json(r: TerminationReasonV1) -> serde_json::Value {
    match r {
        TerminationReasonV1::GoalReached { node_id } => {
            serde_json::json!({"node_id": node_id, "type": r.as_str()})
        }
        TerminationReasonV1::FrontierExhausted | TerminationReasonV1::ExpansionBudgetExceeded => {
            serde_json::json!({"type": r.as_str()})
        }
    }
}
