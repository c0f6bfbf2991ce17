//! Search entry point, expansion loop and path extraction.

use glucopath_kernel::config::GlycemicConfigV1;
use glucopath_kernel::state::HealthStateV1;

use crate::cost::{heuristic, step_cost};
use crate::error::SearchError;
use crate::expand::expand;
use crate::frontier::BestFirstFrontier;
use crate::graph::{
    CandidateOutcomeV1, CandidateRecordV1, ExpandEventV1, FrontierPopKeyV1, SearchGraphMetadata,
    SearchGraphNodeSummaryV1, SearchGraphV1, TerminationReasonV1,
};
use crate::node::{node_fingerprint, SearchNodeV1};
use crate::policy::SearchPolicyV1;

/// Result of a search execution.
///
/// Always contains the complete audit graph and node arena. Check
/// [`SearchResult::is_goal_reached`] or [`SearchResult::termination_reason`]
/// to branch on the outcome. "No solution" is a normal result, not an error.
#[derive(Debug)]
pub struct SearchResult {
    /// The goal node (if found).
    pub goal_node: Option<SearchNodeV1>,
    /// The complete search graph audit trail.
    pub graph: SearchGraphV1,
    /// All nodes created during search, indexed by `node_id`.
    pub nodes: Vec<SearchNodeV1>,
}

impl SearchResult {
    /// Returns `true` if the search terminated because a goal was reached.
    #[must_use]
    pub fn is_goal_reached(&self) -> bool {
        self.goal_node.is_some()
    }

    /// Why the search stopped.
    #[must_use]
    pub fn termination_reason(&self) -> TerminationReasonV1 {
        self.graph.metadata.termination_reason
    }

    /// Start-to-goal states, or `None` when no goal was reached.
    #[must_use]
    pub fn path(&self) -> Option<Vec<HealthStateV1>> {
        self.goal_node
            .as_ref()
            .map(|goal| extract_path(&self.nodes, goal.node_id))
    }
}

#[derive(Debug, Default)]
struct Counters {
    candidates_generated: u64,
    duplicates_suppressed: u64,
    depth_limited: u64,
    stale_pops: u64,
}

/// Run best-first search from `start` toward `blood_sugar <= config.target`.
///
/// Each popped node is goal-tested first. A node whose identity was already
/// expanded is skipped. Otherwise its identity is registered and both
/// successors that are not yet expanded are scored with
/// `g (per policy) + heuristic` and pushed.
///
/// With the default policy there is no iteration cap. Constants that never
/// lower blood sugar (`alpha = beta = 0`) make the loop run forever; set
/// [`SearchPolicyV1::max_expansions`] to bound it.
///
/// # Errors
///
/// Returns [`SearchError`] only for pre-flight validation failures. No
/// `SearchGraphV1` is produced in this case because no search steps were taken.
pub fn search(
    start: HealthStateV1,
    config: &GlycemicConfigV1,
    policy: &SearchPolicyV1,
) -> Result<SearchResult, SearchError> {
    config.validate()?;
    policy.validate()?;

    let mut frontier = BestFirstFrontier::new();
    let mut nodes: Vec<SearchNodeV1> = Vec::new();
    let mut expansions: Vec<ExpandEventV1> = Vec::new();
    let mut counters = Counters::default();

    let root = SearchNodeV1::root(start, heuristic(&start, config));
    let root_fp_hex = root.state_fingerprint.hex_digest().to_string();
    frontier.push(&root);
    nodes.push(root);

    let termination_reason = loop {
        let Some(pop_key) = frontier.pop() else {
            break TerminationReasonV1::FrontierExhausted;
        };
        let current = arena_node(&nodes, pop_key.node_id).clone();

        if config.is_goal(current.state.blood_sugar) {
            break TerminationReasonV1::GoalReached {
                node_id: current.node_id,
            };
        }

        let current_key = current.state.visited_key();
        if frontier.is_expanded(&current_key) {
            counters.stale_pops += 1;
            continue;
        }

        let expansion_order = expansions.len() as u64;
        if policy.max_expansions.is_some_and(|max| expansion_order >= max) {
            break TerminationReasonV1::ExpansionBudgetExceeded;
        }

        frontier.mark_expanded(current_key);
        tracing::debug!(
            expansion_order,
            node_id = current.node_id,
            blood_sugar = current.state.blood_sugar,
            bmi = current.state.bmi,
            activity_score = current.state.activity_score,
            f_cost = pop_key.f_cost,
            "expanding node"
        );

        let mut candidate_records = Vec::with_capacity(2);
        for (index, candidate) in expand(&current.state, config).into_iter().enumerate() {
            counters.candidates_generated += 1;

            let outcome = if frontier.is_expanded(&candidate.state.visited_key()) {
                counters.duplicates_suppressed += 1;
                CandidateOutcomeV1::DuplicateSuppressed {
                    existing_fingerprint: node_fingerprint(&candidate.state)
                        .hex_digest()
                        .to_string(),
                }
            } else if policy.max_depth.is_some_and(|max| current.depth + 1 > max) {
                counters.depth_limited += 1;
                CandidateOutcomeV1::SkippedByDepthLimit
            } else {
                let g_cost = policy
                    .cost_accounting
                    .g_cost(current.g_cost, step_cost(&current.state, &candidate.state));
                let h_cost = heuristic(&candidate.state, config);
                let child = SearchNodeV1::child(
                    &current,
                    nodes.len() as u64,
                    candidate.adjustment,
                    candidate.state,
                    g_cost,
                    h_cost,
                );
                let to_node = child.node_id;
                frontier.push(&child);
                nodes.push(child);
                CandidateOutcomeV1::Pushed {
                    to_node,
                    g_cost,
                    h_cost,
                }
            };

            tracing::trace!(
                adjustment = candidate.adjustment.label,
                blood_sugar = candidate.state.blood_sugar,
                outcome = ?outcome,
                "candidate"
            );
            candidate_records.push(CandidateRecordV1 {
                index: index as u64,
                adjustment: candidate.adjustment.label,
                state: candidate.state,
                outcome,
            });
        }

        expansions.push(ExpandEventV1 {
            expansion_order,
            node_id: current.node_id,
            state_fingerprint: current.state_fingerprint.hex_digest().to_string(),
            frontier_pop_key: FrontierPopKeyV1 {
                f_cost: pop_key.f_cost,
                blood_sugar: pop_key.blood_sugar,
                node_id: pop_key.node_id,
            },
            candidates: candidate_records,
        });
    };

    tracing::info!(
        termination = termination_reason.as_str(),
        expansions = expansions.len(),
        nodes = nodes.len(),
        frontier_high_water = frontier.high_water(),
        "search finished"
    );

    let goal_node = match termination_reason {
        TerminationReasonV1::GoalReached { node_id } => Some(arena_node(&nodes, node_id).clone()),
        TerminationReasonV1::FrontierExhausted | TerminationReasonV1::ExpansionBudgetExceeded => {
            None
        }
    };

    let metadata = SearchGraphMetadata {
        root_state_fingerprint: root_fp_hex,
        config: *config,
        policy: *policy,
        total_expansions: expansions.len() as u64,
        total_candidates_generated: counters.candidates_generated,
        total_duplicates_suppressed: counters.duplicates_suppressed,
        total_depth_limited: counters.depth_limited,
        total_stale_pops: counters.stale_pops,
        frontier_high_water: frontier.high_water(),
        termination_reason,
    };
    let graph = build_graph(expansions, &nodes, metadata);

    Ok(SearchResult {
        goal_node,
        graph,
        nodes,
    })
}

/// Node ids are arena indices handed out by this module, so lookups are in range.
#[allow(clippy::cast_possible_truncation)]
fn arena_node(nodes: &[SearchNodeV1], node_id: u64) -> &SearchNodeV1 {
    &nodes[node_id as usize]
}

/// Reconstruct the node ids from the root to `goal_node_id`.
///
/// Unknown ids end the walk, so a foreign arena yields a truncated path
/// rather than a panic.
#[must_use]
pub fn reconstruct_path(nodes: &[SearchNodeV1], goal_node_id: u64) -> Vec<u64> {
    let mut path = Vec::new();
    let mut current_id = Some(goal_node_id);

    while let Some(id) = current_id {
        let Some(node) = usize::try_from(id).ok().and_then(|i| nodes.get(i)) else {
            break;
        };
        path.push(id);
        current_id = node.parent_id;
    }

    path.reverse();
    path
}

/// Walk parent links from `goal_node_id` and return states start-to-goal.
#[must_use]
pub fn extract_path(nodes: &[SearchNodeV1], goal_node_id: u64) -> Vec<HealthStateV1> {
    reconstruct_path(nodes, goal_node_id)
        .into_iter()
        .map(|id| arena_node(nodes, id).state)
        .collect()
}

fn build_graph(
    expansions: Vec<ExpandEventV1>,
    nodes: &[SearchNodeV1],
    metadata: SearchGraphMetadata,
) -> SearchGraphV1 {
    let mut expansion_order_by_node: Vec<Option<u64>> = vec![None; nodes.len()];
    for e in &expansions {
        if let Some(slot) = usize::try_from(e.node_id)
            .ok()
            .and_then(|i| expansion_order_by_node.get_mut(i))
        {
            *slot = Some(e.expansion_order);
        }
    }

    let goal_id = match metadata.termination_reason {
        TerminationReasonV1::GoalReached { node_id } => Some(node_id),
        TerminationReasonV1::FrontierExhausted | TerminationReasonV1::ExpansionBudgetExceeded => {
            None
        }
    };

    // Arena order is node_id order.
    let node_summaries = nodes
        .iter()
        .zip(expansion_order_by_node)
        .map(|(n, expansion_order)| SearchGraphNodeSummaryV1 {
            node_id: n.node_id,
            parent_id: n.parent_id,
            state: n.state,
            state_fingerprint: n.state_fingerprint.hex_digest().to_string(),
            depth: n.depth,
            f_cost: n.f_cost(),
            is_goal: goal_id == Some(n.node_id),
            expansion_order,
        })
        .collect();

    SearchGraphV1 {
        expansions,
        node_summaries,
        metadata,
    }
}
