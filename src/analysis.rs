//! Convergence analysis.
//!
//! Compares the empirical win rate of each strategy family against its
//! closed-form probability and packages the comparison for reporting.

use serde::Serialize;
use std::fmt;

use crate::engine::AccumulatedResults;
use crate::types::{Decision, SimulationConfig};

/// Default tolerance for "has converged" checks.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Probability of winning with `n` doors.
///
/// Staying wins when the first pick was right: `1/n`. Switching wins when
/// the first pick was wrong and the uniform choice among the `n-2` other
/// closed doors lands on the car: `(n-1)/n * 1/(n-2)`.
pub fn theoretical_win_rate(door_count: u32, decision: Decision) -> f64 {
    let n = door_count as f64;
    match decision {
        Decision::Stayed => 1.0 / n,
        Decision::Switched => (n - 1.0) / (n * (n - 2.0)),
    }
}

// ---------------------------------------------------------------------------
// Reports
// ---------------------------------------------------------------------------

/// Empirical vs theoretical win rate for one strategy family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConvergenceReport {
    pub decision: Decision,
    pub trials: u64,
    pub wins: u64,
    pub empirical: f64,
    pub theoretical: f64,
    /// |empirical - theoretical|
    pub deviation: f64,
    /// sqrt(p(1-p)/n) at the theoretical p.
    pub standard_error: f64,
    pub converged: bool,
}

impl ConvergenceReport {
    /// `None` if the family was never played.
    pub fn from_results(
        results: &AccumulatedResults,
        door_count: u32,
        decision: Decision,
        tolerance: f64,
    ) -> Option<Self> {
        let empirical = results.win_rate(decision)?;
        let trials = results.played(decision);
        let theoretical = theoretical_win_rate(door_count, decision);
        let deviation = (empirical - theoretical).abs();
        let standard_error = (theoretical * (1.0 - theoretical) / trials as f64).sqrt();

        Some(Self {
            decision,
            trials,
            wins: results.wins(decision),
            empirical,
            theoretical,
            deviation,
            standard_error,
            converged: deviation <= tolerance,
        })
    }
}

impl fmt::Display for ConvergenceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<24} {:>7} trials | {:>6.2}% won | theory {:>6.2}% | dev {:.4} (±{:.4} s.e.)",
            self.decision.label(),
            self.trials,
            self.empirical * 100.0,
            self.theoretical * 100.0,
            self.deviation,
            self.standard_error,
        )
    }
}

/// Everything worth printing after a run.
#[derive(Debug, Clone, Serialize)]
pub struct SimulationSummary {
    pub config: SimulationConfig,
    pub win_changed: u64,
    pub win_unchanged: u64,
    pub lose_changed: u64,
    pub lose_unchanged: u64,
    pub switched: Option<ConvergenceReport>,
    pub stayed: Option<ConvergenceReport>,
}

impl SimulationSummary {
    pub fn new(config: &SimulationConfig, results: &AccumulatedResults, tolerance: f64) -> Self {
        let report = |decision| {
            ConvergenceReport::from_results(results, config.door_count, decision, tolerance)
        };
        Self {
            config: config.clone(),
            win_changed: results.win_changed,
            win_unchanged: results.win_unchanged,
            lose_changed: results.lose_changed,
            lose_unchanged: results.lose_unchanged,
            switched: report(Decision::Switched),
            stayed: report(Decision::Stayed),
        }
    }

    pub fn reports(&self) -> impl Iterator<Item = &ConvergenceReport> {
        self.switched.iter().chain(self.stayed.iter())
    }
}

impl fmt::Display for SimulationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} trials | {} doors | strategy {}",
            self.config.trial_count, self.config.door_count, self.config.strategy,
        )?;
        writeln!(
            f,
            "win_changed={} win_unchanged={} lose_changed={} lose_unchanged={}",
            self.win_changed, self.win_unchanged, self.lose_changed, self.lose_unchanged,
        )?;
        for report in self.reports() {
            writeln!(f, "{report}")?;
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
