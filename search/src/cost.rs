//! Heuristic and step-cost model.

use glucopath_kernel::config::GlycemicConfigV1;
use glucopath_kernel::state::HealthStateV1;

/// Distance of the state's blood sugar from the target.
///
/// Non-negative, and zero exactly when `blood_sugar == target`.
#[must_use]
pub fn heuristic(state: &HealthStateV1, config: &GlycemicConfigV1) -> f64 {
    (state.blood_sugar - config.target).abs()
}

/// Effort of one transition: total absolute change in BMI and activity.
///
/// This is the cost of `parent → child` alone, not a path total.
#[must_use]
pub fn step_cost(parent: &HealthStateV1, child: &HealthStateV1) -> f64 {
    (parent.bmi - child.bmi).abs() + (parent.activity_score - child.activity_score).abs()
}
