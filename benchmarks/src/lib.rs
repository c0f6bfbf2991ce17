//! Shared search regimes for the glucopath benchmark suites.

use glucopath_kernel::config::GlycemicConfigV1;
use glucopath_kernel::state::HealthStateV1;
use glucopath_search::policy::{CostAccountingV1, SearchPolicyV1};

/// A named start/constants/policy triple.
pub struct Regime {
    pub name: &'static str,
    pub start: HealthStateV1,
    pub config: GlycemicConfigV1,
    pub policy: SearchPolicyV1,
}

/// Default constants from a typical starting point: a short greedy descent.
#[must_use]
pub fn regime_typical() -> Regime {
    Regime {
        name: "typical",
        start: HealthStateV1::new(28.0, 45, 10.0, 200.0),
        config: GlycemicConfigV1::default(),
        policy: SearchPolicyV1::default(),
    }
}

/// A long descent from the top of the chart range.
#[must_use]
pub fn regime_long_descent() -> Regime {
    Regime {
        name: "long_descent",
        start: HealthStateV1::new(30.0, 60, 0.0, 400.0),
        config: GlycemicConfigV1::default(),
        policy: SearchPolicyV1::default(),
    }
}

/// Cumulative accounting: broader exploration before the goal pops.
#[must_use]
pub fn regime_cumulative() -> Regime {
    Regime {
        name: "cumulative",
        start: HealthStateV1::new(28.0, 45, 10.0, 200.0),
        config: GlycemicConfigV1::default(),
        policy: SearchPolicyV1 {
            cost_accounting: CostAccountingV1::Cumulative,
            ..SearchPolicyV1::default()
        },
    }
}

/// Blood sugar pinned at the floor below a lower target: budget-limited
/// lattice walk dominated by duplicate handling.
#[must_use]
pub fn regime_plateau() -> Regime {
    Regime {
        name: "plateau",
        start: HealthStateV1::new(28.0, 45, 10.0, 80.0),
        config: GlycemicConfigV1 {
            target: 50.0,
            ..GlycemicConfigV1::default()
        },
        policy: SearchPolicyV1 {
            max_expansions: Some(2_000),
            max_depth: None,
            cost_accounting: CostAccountingV1::Cumulative,
        },
    }
}

/// All regimes in a stable order.
#[must_use]
pub fn all_regimes() -> Vec<Regime> {
    vec![
        regime_typical(),
        regime_long_descent(),
        regime_cumulative(),
        regime_plateau(),
    ]
}
