//! Plan configuration overlay.
//!
//! [`PlanConfig`] is an all-`Option` overlay. Every `None` falls back to the
//! kernel/search default, so an empty file or no flags at all reproduce the
//! published constants. Layers are merged with [`PlanConfig::overlay`]: a
//! config file first, then command-line flags on top.

use std::path::{Path, PathBuf};

use glucopath_kernel::config::GlycemicConfigV1;
use glucopath_search::policy::{CostAccountingV1, SearchPolicyV1};

/// Configuration overrides for a plan run.
#[derive(Debug, Clone, Copy, Default, PartialEq, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PlanConfig {
    /// BMI sensitivity. `None` uses 8.5.
    pub alpha: Option<f64>,
    /// Activity sensitivity. `None` uses 3.
    pub beta: Option<f64>,
    /// Goal threshold. `None` uses 120.
    pub target: Option<f64>,
    /// Blood sugar floor. `None` uses 80.
    pub floor: Option<f64>,
    /// Expansion cap. `None` leaves the search unbounded.
    pub max_expansions: Option<u64>,
    /// Depth cap. `None` leaves depth unbounded.
    pub max_depth: Option<u32>,
    /// `g` accounting. `None` uses step-only.
    pub cost_accounting: Option<CostAccounting>,
}

/// Serialized name of a [`CostAccountingV1`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CostAccounting {
    StepOnly,
    Cumulative,
}

impl From<CostAccounting> for CostAccountingV1 {
    fn from(value: CostAccounting) -> Self {
        match value {
            CostAccounting::StepOnly => Self::StepOnly,
            CostAccounting::Cumulative => Self::Cumulative,
        }
    }
}

/// Error loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

impl PlanConfig {
    /// Parse a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or is not a valid
    /// config object (unknown keys are rejected).
    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Merge `top` over `self`: every field set in `top` wins.
    #[must_use]
    pub fn overlay(self, top: &PlanConfig) -> PlanConfig {
        PlanConfig {
            alpha: top.alpha.or(self.alpha),
            beta: top.beta.or(self.beta),
            target: top.target.or(self.target),
            floor: top.floor.or(self.floor),
            max_expansions: top.max_expansions.or(self.max_expansions),
            max_depth: top.max_depth.or(self.max_depth),
            cost_accounting: top.cost_accounting.or(self.cost_accounting),
        }
    }

    /// Resolve the glycemic constants.
    #[must_use]
    pub fn glycemic(&self) -> GlycemicConfigV1 {
        let defaults = GlycemicConfigV1::default();
        GlycemicConfigV1 {
            alpha: self.alpha.unwrap_or(defaults.alpha),
            beta: self.beta.unwrap_or(defaults.beta),
            target: self.target.unwrap_or(defaults.target),
            floor: self.floor.unwrap_or(defaults.floor),
        }
    }

    /// Resolve the search policy.
    #[must_use]
    pub fn search_policy(&self) -> SearchPolicyV1 {
        SearchPolicyV1 {
            max_expansions: self.max_expansions,
            max_depth: self.max_depth,
            cost_accounting: self
                .cost_accounting
                .map_or(CostAccountingV1::default(), CostAccountingV1::from),
        }
    }
}
