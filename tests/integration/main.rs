//! Integration tests for the montyhall crate.

mod convergence;
mod simulation;
