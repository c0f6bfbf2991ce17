//! End-to-end planning scenarios.
//!
//! 1. Typical start: first expansion scores both adjustments, the activity
//!    branch wins, and the full path steps 200 → 118.2.
//! 2. Start already at target: zero expansions, single-state path.
//! 3. Non-improving constants: blood sugar never moves and only an external
//!    expansion budget stops the search.

use glucopath_harness::runner::run_plan;
use glucopath_kernel::config::GlycemicConfigV1;
use glucopath_lock_tests::scenarios::{
    at_target_start, non_improving_config, non_improving_policy, typical_start,
    NON_IMPROVING_BUDGET, TYPICAL_PATH_BLOOD_SUGAR,
};
use glucopath_search::graph::{CandidateOutcomeV1, TerminationReasonV1};
use glucopath_search::policy::SearchPolicyV1;
use glucopath_search::search::search;

const EPS: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Scenario 1
// ---------------------------------------------------------------------------

#[test]
fn typical_first_expansion_pushes_both_candidates() {
    let result = search(
        typical_start(),
        &GlycemicConfigV1::default(),
        &SearchPolicyV1::default(),
    )
    .unwrap();

    let first = &result.graph.expansions[0];
    assert_eq!(first.node_id, 0);
    assert_eq!(first.candidates.len(), 2);

    let f_values: Vec<f64> = first
        .candidates
        .iter()
        .map(|c| match c.outcome {
            CandidateOutcomeV1::Pushed { g_cost, h_cost, .. } => g_cost + h_cost,
            ref other => panic!("expected push, got {other:?}"),
        })
        .collect();
    assert!((f_values[0] - 74.0).abs() < EPS, "got {}", f_values[0]);
    assert!((f_values[1] - 70.0).abs() < EPS, "got {}", f_values[1]);

    assert!((first.candidates[0].state.blood_sugar - 193.2).abs() < EPS);
    assert_eq!(first.candidates[1].state.blood_sugar, 185.0);

    let second = &result.graph.expansions[1];
    assert_eq!(second.node_id, 2, "activity branch should be expanded next");
}

#[test]
fn typical_path_reaches_target() {
    let result = search(
        typical_start(),
        &GlycemicConfigV1::default(),
        &SearchPolicyV1::default(),
    )
    .unwrap();

    assert!(matches!(
        result.termination_reason(),
        TerminationReasonV1::GoalReached { .. }
    ));
    let path = result.path().unwrap();
    assert_eq!(path.len(), TYPICAL_PATH_BLOOD_SUGAR.len());
    for (state, expected) in path.iter().zip(TYPICAL_PATH_BLOOD_SUGAR) {
        assert!(
            (state.blood_sugar - expected).abs() < EPS,
            "expected {expected}, got {}",
            state.blood_sugar
        );
        assert_eq!(state.age, 45);
    }

    let last = path.last().unwrap();
    assert!((last.bmi - 27.2).abs() < EPS);
    assert_eq!(last.activity_score, 35.0);
    assert_eq!(result.graph.metadata.total_expansions, 6);
}

#[test]
fn typical_plan_renders_lines_and_chart() {
    let outcome = run_plan(
        typical_start(),
        &GlycemicConfigV1::default(),
        &SearchPolicyV1::default(),
    )
    .unwrap();

    assert_eq!(outcome.lines.len(), 7);
    assert_eq!(
        outcome.lines[0],
        "BMI: 28.0, Age: 45, Activity: 10.0, Blood Sugar: 200.0"
    );
    assert_eq!(
        outcome.lines[6],
        "BMI: 27.2, Age: 45, Activity: 35.0, Blood Sugar: 118.2"
    );

    let chart = outcome.chart.unwrap();
    assert_eq!(chart.time_points, (1..=7).collect::<Vec<u64>>());
    for panel in chart.panels() {
        assert_eq!(panel.values.len(), 7);
    }
}

// ---------------------------------------------------------------------------
// Scenario 2
// ---------------------------------------------------------------------------

#[test]
fn start_at_target_needs_no_expansion() {
    let start = at_target_start();
    let result = search(start, &GlycemicConfigV1::default(), &SearchPolicyV1::default()).unwrap();

    assert_eq!(
        result.termination_reason(),
        TerminationReasonV1::GoalReached { node_id: 0 }
    );
    assert!(result.graph.expansions.is_empty());
    assert_eq!(result.path().unwrap(), vec![start]);
}

// ---------------------------------------------------------------------------
// Scenario 3
// ---------------------------------------------------------------------------

#[test]
fn non_improving_constants_hit_the_budget() {
    let start = typical_start();
    let result = search(start, &non_improving_config(), &non_improving_policy()).unwrap();

    assert_eq!(
        result.termination_reason(),
        TerminationReasonV1::ExpansionBudgetExceeded
    );
    assert!(result.path().is_none());
    assert_eq!(
        result.graph.metadata.total_expansions,
        NON_IMPROVING_BUDGET
    );

    for node in &result.nodes {
        assert!(
            node.state.blood_sugar >= start.blood_sugar,
            "blood sugar decreased to {}",
            node.state.blood_sugar
        );
    }
}

#[test]
fn non_improving_plan_reports_no_path() {
    let outcome = run_plan(
        typical_start(),
        &non_improving_config(),
        &non_improving_policy(),
    )
    .unwrap();

    assert!(!outcome.is_path_found());
    assert!(outcome.lines.is_empty());
    assert!(outcome.chart.is_none());
}
