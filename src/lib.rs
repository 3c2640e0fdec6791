//! PredictCombo — range/parity next-pick heuristic with a martingale bet rule.
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod parser;
pub mod strategy;
pub mod report;
pub mod api;
pub mod cli;
