//! Blood-sugar update rule and the fixed adjustment set.
//!
//! An adjustment lowers BMI and/or raises the activity score by a fixed
//! amount. The resulting blood sugar drops by
//! `alpha * bmi_change + beta * activity_change`, clamped at the floor.

use crate::config::GlycemicConfigV1;
use crate::state::HealthStateV1;

/// One small, monotone lifestyle adjustment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AdjustmentV1 {
    /// Stable label used in audit records.
    pub label: &'static str,
    /// Amount subtracted from BMI.
    pub bmi_change: f64,
    /// Amount added to the activity score.
    pub activity_change: f64,
}

impl AdjustmentV1 {
    /// Delta A: lose 0.8 BMI points.
    pub const REDUCE_BMI: Self = Self {
        label: "reduce_bmi",
        bmi_change: 0.8,
        activity_change: 0.0,
    };

    /// Delta B: gain 5 activity points.
    pub const INCREASE_ACTIVITY: Self = Self {
        label: "increase_activity",
        bmi_change: 0.0,
        activity_change: 5.0,
    };
}

/// The transition set, in enumeration order.
pub const ADJUSTMENTS: [AdjustmentV1; 2] =
    [AdjustmentV1::REDUCE_BMI, AdjustmentV1::INCREASE_ACTIVITY];

/// New blood sugar after an adjustment.
///
/// The result never drops below `config.floor`. With non-negative
/// sensitivities and changes, and `current >= config.floor`, it never
/// exceeds `current` either.
#[must_use]
pub fn update_blood_sugar(
    bmi_change: f64,
    activity_change: f64,
    current: f64,
    config: &GlycemicConfigV1,
) -> f64 {
    let reduction = config.alpha * bmi_change + config.beta * activity_change;
    config.floor.max(current - reduction)
}

/// Apply `adjustment` to `state`, carrying `age` over unchanged.
#[must_use]
pub fn apply_adjustment(
    state: &HealthStateV1,
    adjustment: &AdjustmentV1,
    config: &GlycemicConfigV1,
) -> HealthStateV1 {
    HealthStateV1 {
        bmi: state.bmi - adjustment.bmi_change,
        age: state.age,
        activity_score: state.activity_score + adjustment.activity_change,
        blood_sugar: update_blood_sugar(
            adjustment.bmi_change,
            adjustment.activity_change,
            state.blood_sugar,
            config,
        ),
    }
}
