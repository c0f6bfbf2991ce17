//! Typed search errors.
//!
//! `SearchError` represents pre-flight failures only. Running out of frontier
//! or budget is a [`crate::graph::TerminationReasonV1`], and always comes with
//! a `SearchGraphV1` audit trail.

use glucopath_kernel::config::ConfigError;

/// Typed failure for pre-flight search validation.
///
/// No search step has been taken when one of these is returned.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// A glycemic constant cannot be used in arithmetic.
    #[error("invalid glycemic configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
    /// A policy guard is set to a value that forbids any progress.
    #[error("invalid search policy: {detail}")]
    InvalidPolicy { detail: String },
}
