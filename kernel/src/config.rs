//! Glycemic model constants.
//!
//! These used to be ambient globals. They are now a plain value handed to
//! every rule and to the search driver, so two searches with different
//! sensitivities never observe each other's constants.

use crate::proof::canon::canonical_f64;

/// Sensitivity of blood sugar to a unit BMI reduction.
pub const DEFAULT_ALPHA: f64 = 8.5;

/// Sensitivity of blood sugar to a unit activity increase.
pub const DEFAULT_BETA: f64 = 3.0;

/// Goal threshold: a state with `blood_sugar <= target` is terminal.
pub const DEFAULT_TARGET: f64 = 120.0;

/// Lower clamp applied by the blood-sugar update rule.
pub const DEFAULT_FLOOR: f64 = 80.0;

/// Constants of the blood-sugar model and goal predicate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlycemicConfigV1 {
    pub alpha: f64,
    pub beta: f64,
    pub target: f64,
    pub floor: f64,
}

/// A constant that cannot take part in arithmetic.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("glycemic constant `{name}` must be finite, got {value}")]
    NonFiniteConstant { name: &'static str, value: f64 },
}

impl GlycemicConfigV1 {
    /// Reject NaN and infinite constants.
    ///
    /// Zero or negative sensitivities are accepted: they are a legal (if
    /// degenerate) model, and bounding the resulting search is the caller's
    /// job through the search policy.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonFiniteConstant`] naming the first bad field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("alpha", self.alpha),
            ("beta", self.beta),
            ("target", self.target),
            ("floor", self.floor),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFiniteConstant { name, value });
            }
        }
        Ok(())
    }

    /// Goal predicate.
    #[must_use]
    pub fn is_goal(&self, blood_sugar: f64) -> bool {
        blood_sugar <= self.target
    }

    /// JSON echo with floats rendered as canonical decimal strings.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::json!({
            "alpha": canonical_f64(self.alpha),
            "beta": canonical_f64(self.beta),
            "floor": canonical_f64(self.floor),
            "target": canonical_f64(self.target),
        })
    }
}

impl Default for GlycemicConfigV1 {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            beta: DEFAULT_BETA,
            target: DEFAULT_TARGET,
            floor: DEFAULT_FLOOR,
        }
    }
}
