//! Glucopath Search: deterministic best-first search toward a blood-sugar target.
//!
//! This crate provides the search layer. It depends only on
//! `glucopath_kernel`; it does NOT depend on `glucopath_harness`.
//!
//! # Crate dependency graph
//!
//! ```text
//! glucopath_kernel  ←  glucopath_search  ←  glucopath_harness
//! (state, rules)       (frontier, nodes)     (runner, report, CLI)
//! ```
//!
//! # Key types
//!
//! - [`SearchNodeV1`](node::SearchNodeV1) — arena node with parent index and costs
//! - [`BestFirstFrontier`](frontier::BestFirstFrontier) — priority queue plus visited registry
//! - [`SearchPolicyV1`](policy::SearchPolicyV1) — optional guards and cost accounting
//! - [`SearchGraphV1`](graph::SearchGraphV1) — expansion-event audit log
//! - [`search`](search::search) / [`extract_path`](search::extract_path) — the two entry points

#![forbid(unsafe_code)]

pub mod cost;
pub mod error;
pub mod expand;
pub mod frontier;
pub mod graph;
pub mod node;
pub mod policy;
pub mod search;
