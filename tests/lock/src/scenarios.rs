//! Canonical planning scenarios.

use glucopath_kernel::config::GlycemicConfigV1;
use glucopath_kernel::state::HealthStateV1;
use glucopath_search::policy::{CostAccountingV1, SearchPolicyV1};

/// Expansion cap used wherever the constants cannot lower blood sugar.
pub const NON_IMPROVING_BUDGET: u64 = 1000;

/// BMI 28, age 45, activity 10, blood sugar 200 under default constants.
#[must_use]
pub fn typical_start() -> HealthStateV1 {
    HealthStateV1::new(28.0, 45, 10.0, 200.0)
}

/// Blood sugar already at the 120 threshold.
#[must_use]
pub fn at_target_start() -> HealthStateV1 {
    HealthStateV1::new(25.0, 30, 50.0, 120.0)
}

/// Both sensitivities zero: no adjustment changes blood sugar.
#[must_use]
pub fn non_improving_config() -> GlycemicConfigV1 {
    GlycemicConfigV1 {
        alpha: 0.0,
        beta: 0.0,
        ..GlycemicConfigV1::default()
    }
}

#[must_use]
pub fn non_improving_policy() -> SearchPolicyV1 {
    SearchPolicyV1::bounded(NON_IMPROVING_BUDGET)
}

/// Blood sugar values along the typical scenario's path.
pub const TYPICAL_PATH_BLOOD_SUGAR: [f64; 7] = [200.0, 185.0, 170.0, 155.0, 140.0, 125.0, 118.2];

/// Blood sugar pinned at the floor with a target below it.
///
/// Every adjustment lands on `floor`, so the heuristic is constant and the
/// search walks the (bmi, activity) lattice, reaching most cells by more
/// than one route.
#[must_use]
pub fn plateau_start() -> HealthStateV1 {
    HealthStateV1::new(28.0, 45, 10.0, 80.0)
}

#[must_use]
pub fn plateau_config() -> GlycemicConfigV1 {
    GlycemicConfigV1 {
        target: 50.0,
        ..GlycemicConfigV1::default()
    }
}

/// Cumulative accounting so neither adjustment chain starves the other.
#[must_use]
pub fn plateau_policy() -> SearchPolicyV1 {
    SearchPolicyV1 {
        max_expansions: Some(200),
        max_depth: None,
        cost_accounting: CostAccountingV1::Cumulative,
    }
}
