//! Search policy types.

use crate::error::SearchError;

/// Optional guards and cost accounting for one search call.
///
/// The default is unbounded: no expansion cap, no depth cap. A caller that
/// needs bounded latency sets `max_expansions` (see [`SearchPolicyV1::bounded`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicyV1 {
    /// Hard cap on node expansions. `None` means unbounded.
    pub max_expansions: Option<u64>,
    /// Depth cutoff for generated children. `None` means unbounded.
    pub max_depth: Option<u32>,
    /// How `g` is computed for a child.
    pub cost_accounting: CostAccountingV1,
}

impl SearchPolicyV1 {
    /// Default policy with an expansion cap.
    #[must_use]
    pub fn bounded(max_expansions: u64) -> Self {
        Self {
            max_expansions: Some(max_expansions),
            ..Self::default()
        }
    }

    /// Reject guards that make the search unable to take a single step.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidPolicy`] when `max_expansions` is zero.
    pub fn validate(&self) -> Result<(), SearchError> {
        if self.max_expansions == Some(0) {
            return Err(SearchError::InvalidPolicy {
                detail: "max_expansions must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// JSON echo for audit metadata.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "cost_accounting": self.cost_accounting.as_str(),
            "max_depth": self.max_depth,
            "max_expansions": self.max_expansions,
        })
    }
}

impl Default for SearchPolicyV1 {
    fn default() -> Self {
        Self {
            max_expansions: None,
            max_depth: None,
            cost_accounting: CostAccountingV1::StepOnly,
        }
    }
}

/// How the path cost `g` of a child is derived from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CostAccountingV1 {
    /// `g` is the cost of the single transition into the child.
    /// Default: this decides which branch surfaces first, so it is kept.
    #[default]
    StepOnly,
    /// `g` is the parent's `g` plus the transition cost (classic A*).
    Cumulative,
}

impl CostAccountingV1 {
    /// Combine the parent's `g` with the cost of one transition.
    #[must_use]
    pub fn g_cost(self, parent_g: f64, step: f64) -> f64 {
        match self {
            Self::StepOnly => step,
            Self::Cumulative => parent_g + step,
        }
    }

    /// Stable name used in audit records and configuration files.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::StepOnly => "step_only",
            Self::Cumulative => "cumulative",
        }
    }
}
