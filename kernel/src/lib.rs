//! Glucopath Kernel: the deterministic core of the glucose planner.
//!
//! # API Surface
//!
//! - [`state::HealthStateV1`] -- immutable snapshot of the tracked metrics
//! - [`rules::apply_adjustment`] -- apply one monotone adjustment to a state
//! - [`config::GlycemicConfigV1`] -- sensitivity constants, target and floor
//! - [`proof::hash::canonical_hash`] -- domain-separated SHA-256 content hashing
//!
//! # Module Dependency Direction
//!
//! `state` ← `config` ← `rules`, and `proof` depends on nothing internal.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod proof;
pub mod rules;
pub mod state;
