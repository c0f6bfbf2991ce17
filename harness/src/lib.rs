//! Glucopath Harness: packaging a search outcome for its collaborators.
//!
//! The harness runs the search and turns the result into the two output
//! contracts (one text line per path state, three chart series) plus a
//! digest-bound JSON plan report. It does NOT implement search logic and it
//! never draws or persists anything.

#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chart;
pub mod config;
pub mod logging;
pub mod render;
pub mod runner;
