//! MONTYHALL: Monte Carlo simulation of the Monty Hall problem
//!
//! Library crate exposing all modules for use by integration tests
//! and the binary entry point.

pub mod config;
pub mod types;
pub mod engine;
pub mod analysis;
pub mod chart;
