//! Runs the typical plan scenario and prints deterministic key=value lines
//! for cross-process verification.
//!
//! Usage: `plan_fixture`

use glucopath_harness::runner::run_plan;
use glucopath_kernel::config::GlycemicConfigV1;
use glucopath_lock_tests::scenarios::typical_start;
use glucopath_search::policy::SearchPolicyV1;

fn main() {
    let outcome = run_plan(
        typical_start(),
        &GlycemicConfigV1::default(),
        &SearchPolicyV1::default(),
    )
    .expect("plan run failed");

    let graph = &outcome.result.graph;
    let graph_digest = graph.digest().expect("graph digest failed");
    let path_len = outcome.path.as_ref().map_or(0, Vec::len);

    println!("report_digest={}", outcome.report.digest.as_str());
    println!("search_graph_digest={}", graph_digest.as_str());
    println!(
        "termination_reason={}",
        graph.metadata.termination_reason.as_str()
    );
    println!("total_expansions={}", graph.metadata.total_expansions);
    println!("path_len={path_len}");
    for line in &outcome.lines {
        println!("line={line}");
    }
}
