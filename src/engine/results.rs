//! Outcome counters and running win-rate histories.

use serde::{Deserialize, Serialize};

use crate::types::{Decision, TrialOutcome, Verdict};

/// Tallies for one run.
///
/// Counters and histories only grow. `record` bumps a counter,
/// `record_win_rates` extends the histories; `TrialEngine::run_all`
/// calls them in that order once per trial.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccumulatedResults {
    pub win_changed: u64,
    pub win_unchanged: u64,
    pub lose_changed: u64,
    pub lose_unchanged: u64,
    switched_win_rates: Vec<f64>,
    stayed_win_rates: Vec<f64>,
}

impl AccumulatedResults {
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment the counter matching `outcome`.
    pub fn record(&mut self, outcome: TrialOutcome) {
        let counter = match (outcome.verdict, outcome.decision) {
            (Verdict::Win, Decision::Switched) => &mut self.win_changed,
            (Verdict::Win, Decision::Stayed) => &mut self.win_unchanged,
            (Verdict::Lose, Decision::Switched) => &mut self.lose_changed,
            (Verdict::Lose, Decision::Stayed) => &mut self.lose_unchanged,
        };
        *counter += 1;
    }

    /// Append the current win rate of each strategy family that has been
    /// played at least once.
    pub fn record_win_rates(&mut self) {
        if let Some(rate) = self.win_rate(Decision::Switched) {
            self.switched_win_rates.push(rate);
        }
        if let Some(rate) = self.win_rate(Decision::Stayed) {
            self.stayed_win_rates.push(rate);
        }
    }

    /// Total trials recorded.
    pub fn total(&self) -> u64 {
        self.win_changed + self.win_unchanged + self.lose_changed + self.lose_unchanged
    }

    /// Count for a single outcome.
    pub fn count(&self, outcome: TrialOutcome) -> u64 {
        match (outcome.verdict, outcome.decision) {
            (Verdict::Win, Decision::Switched) => self.win_changed,
            (Verdict::Win, Decision::Stayed) => self.win_unchanged,
            (Verdict::Lose, Decision::Switched) => self.lose_changed,
            (Verdict::Lose, Decision::Stayed) => self.lose_unchanged,
        }
    }

    pub fn wins(&self, decision: Decision) -> u64 {
        self.count(TrialOutcome::new(Verdict::Win, decision))
    }

    /// Trials played with the given decision.
    pub fn played(&self, decision: Decision) -> u64 {
        self.wins(decision) + self.count(TrialOutcome::new(Verdict::Lose, decision))
    }

    /// Cumulative win rate, or `None` if the family was never played.
    pub fn win_rate(&self, decision: Decision) -> Option<f64> {
        let played = self.played(decision);
        if played == 0 {
            return None;
        }
        Some(self.wins(decision) as f64 / played as f64)
    }

    pub fn switched_win_rates(&self) -> &[f64] {
        &self.switched_win_rates
    }

    pub fn stayed_win_rates(&self) -> &[f64] {
        &self.stayed_win_rates
    }

    pub fn win_rates(&self, decision: Decision) -> &[f64] {
        match decision {
            Decision::Switched => &self.switched_win_rates,
            Decision::Stayed => &self.stayed_win_rates,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
