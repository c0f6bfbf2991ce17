//! Plan runner: search once and package the outcome.
//!
//! # Pipeline
//!
//! ```text
//! search() → path() → render_path_lines() + ChartSeriesV1::from_path()
//!   → graph.digest() → plan report with chart (canonical bytes + digest)
//! ```
//!
//! The runner uses only kernel and search APIs. It never inspects the
//! frontier or re-derives costs.

use glucopath_kernel::config::GlycemicConfigV1;
use glucopath_kernel::proof::canon::{canonical_json_bytes, CanonError};
use glucopath_kernel::proof::hash::{canonical_hash, ContentHash, HashDomain};
use glucopath_kernel::state::HealthStateV1;
use glucopath_search::error::SearchError;
use glucopath_search::graph::state_to_json;
use glucopath_search::policy::SearchPolicyV1;
use glucopath_search::search::{search, SearchResult};

use crate::chart::ChartSeriesV1;
use crate::render::render_path_lines;

/// Schema tag embedded in every plan report.
pub const PLAN_REPORT_SCHEMA: &str = "glucopath.plan_report.v1";

/// Error during a plan run.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Search(#[from] SearchError),
    #[error("canonical serialization failed: {0}")]
    Canon(#[from] CanonError),
}

/// Canonical plan report with its content digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanReportV1 {
    /// Canonical JSON bytes.
    pub bytes: Vec<u8>,
    /// `sha256:<hex>` over `bytes` under [`HashDomain::PlanReport`].
    pub digest: ContentHash,
}

/// Everything one plan run produces.
#[derive(Debug)]
pub struct PlanOutcomeV1 {
    pub result: SearchResult,
    /// Start-to-goal states. `None` when no path was found.
    pub path: Option<Vec<HealthStateV1>>,
    /// Display lines, one per path state. Empty without a path.
    pub lines: Vec<String>,
    /// Chart panels. `None` without a path.
    pub chart: Option<ChartSeriesV1>,
    pub report: PlanReportV1,
}

impl PlanOutcomeV1 {
    #[must_use]
    pub fn is_path_found(&self) -> bool {
        self.path.is_some()
    }
}

/// Digest of the resolved constants and policy.
///
/// # Errors
///
/// Returns [`CanonError`] if serialization fails.
pub fn config_digest(
    config: &GlycemicConfigV1,
    policy: &SearchPolicyV1,
) -> Result<ContentHash, CanonError> {
    let value = serde_json::json!({
        "config": config.to_json_value(),
        "policy": policy.to_json_value(),
    });
    let bytes = canonical_json_bytes(&value)?;
    Ok(canonical_hash(HashDomain::PlanConfig, &bytes))
}

/// Search from `start` and package the outcome.
///
/// A search that finds no path is a successful run: the outcome carries
/// `path: None` and the report records the termination reason.
///
/// # Errors
///
/// Returns [`RunError::Search`] for invalid constants or policy, and
/// [`RunError::Canon`] if the report cannot be serialized.
pub fn run_plan(
    start: HealthStateV1,
    config: &GlycemicConfigV1,
    policy: &SearchPolicyV1,
) -> Result<PlanOutcomeV1, RunError> {
    let span = tracing::info_span!(
        "run_plan",
        bmi = start.bmi,
        age = start.age,
        activity_score = start.activity_score,
        blood_sugar = start.blood_sugar,
    );
    let _guard = span.enter();

    let result = search(start, config, policy)?;
    let path = result.path();
    let lines = path.as_deref().map(render_path_lines).unwrap_or_default();
    let chart = path.as_deref().map(ChartSeriesV1::from_path);

    let report = build_report(
        &start,
        config,
        policy,
        &result,
        path.as_deref(),
        chart.as_ref(),
    )?;

    match &path {
        Some(states) => tracing::info!(
            steps = states.len(),
            expansions = result.graph.metadata.total_expansions,
            report_digest = report.digest.as_str(),
            "path found"
        ),
        None => tracing::info!(
            termination = result.termination_reason().as_str(),
            expansions = result.graph.metadata.total_expansions,
            report_digest = report.digest.as_str(),
            "no path"
        ),
    }

    Ok(PlanOutcomeV1 {
        result,
        path,
        lines,
        chart,
        report,
    })
}

fn build_report(
    start: &HealthStateV1,
    config: &GlycemicConfigV1,
    policy: &SearchPolicyV1,
    result: &SearchResult,
    path: Option<&[HealthStateV1]>,
    chart: Option<&ChartSeriesV1>,
) -> Result<PlanReportV1, CanonError> {
    let graph_digest = result.graph.digest()?;
    let config_digest = config_digest(config, policy)?;
    let metadata = &result.graph.metadata;

    let value = serde_json::json!({
        "chart": chart.map(ChartSeriesV1::to_json_value),
        "config": config.to_json_value(),
        "config_digest": config_digest.as_str(),
        "path": path.map(|states| states.iter().map(state_to_json).collect::<Vec<_>>()),
        "path_found": path.is_some(),
        "policy": policy.to_json_value(),
        "schema_version": PLAN_REPORT_SCHEMA,
        "search_graph_digest": graph_digest.as_str(),
        "start": state_to_json(start),
        "termination_reason": metadata.termination_reason.as_str(),
        "total_expansions": metadata.total_expansions,
    });

    let bytes = canonical_json_bytes(&value)?;
    let digest = canonical_hash(HashDomain::PlanReport, &bytes);
    Ok(PlanReportV1 { bytes, digest })
}
