//! Transition generator.
//!
//! Every state has exactly one successor per entry of
//! [`ADJUSTMENTS`](glucopath_kernel::rules::ADJUSTMENTS), produced in that
//! order. No randomness, no dependence on anything but the state and config.

use glucopath_kernel::config::GlycemicConfigV1;
use glucopath_kernel::rules::{apply_adjustment, AdjustmentV1, ADJUSTMENTS};
use glucopath_kernel::state::HealthStateV1;

/// A successor proposed for a state, before dedup and scoring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CandidateV1 {
    pub adjustment: AdjustmentV1,
    pub state: HealthStateV1,
}

/// Enumerate the successors of `state`.
#[must_use]
pub fn expand(state: &HealthStateV1, config: &GlycemicConfigV1) -> [CandidateV1; 2] {
    ADJUSTMENTS.map(|adjustment| CandidateV1 {
        adjustment,
        state: apply_adjustment(state, &adjustment, config),
    })
}
