//! Shared types for the Monty Hall simulator.
//!
//! These types form the data model used across the engine, analysis,
//! and chart modules. They carry no behaviour beyond formatting and
//! parsing so every other module can depend on them freely.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A door number. Doors are numbered from 1.
pub type Door = u32;

/// Fewest doors for which the host always has a goat door to reveal.
pub const MIN_DOORS: u32 = 3;

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Policy governing whether the player switches after the host's reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyMode {
    /// Always move to another unopened door.
    #[serde(alias = "always-switch")]
    Switch,
    /// Always keep the initial pick.
    #[serde(alias = "never-switch")]
    Stay,
    /// Flip a fair coin every trial.
    #[default]
    #[serde(alias = "random-per-trial")]
    Random,
}

impl fmt::Display for StrategyMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyMode::Switch => write!(f, "always-switch"),
            StrategyMode::Stay => write!(f, "never-switch"),
            StrategyMode::Random => write!(f, "random-per-trial"),
        }
    }
}

/// Parse a strategy name (case-insensitive, accepts short and long forms).
impl std::str::FromStr for StrategyMode {
    type Err = MontyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "switch" | "always-switch" | "always" => Ok(StrategyMode::Switch),
            "stay" | "never-switch" | "never" => Ok(StrategyMode::Stay),
            "random" | "random-per-trial" | "coin" => Ok(StrategyMode::Random),
            other => Err(MontyError::Config(format!("unknown strategy: {other}"))),
        }
    }
}

// ---------------------------------------------------------------------------
// Outcomes
// ---------------------------------------------------------------------------

/// Whether the player switched doors in a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Decision {
    Switched,
    Stayed,
}

impl Decision {
    pub const ALL: &'static [Decision] = &[Decision::Switched, Decision::Stayed];

    /// Chart legend label for this strategy family.
    pub fn label(&self) -> &'static str {
        match self {
            Decision::Switched => "Switch Doors",
            Decision::Stayed => "Stay with Initial Choice",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Decision::Switched => write!(f, "switched"),
            Decision::Stayed => write!(f, "stayed"),
        }
    }
}

/// Whether the final pick hid the car.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Win,
    Lose,
}

/// Result of one trial: {win, lose} x {switched, stayed}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TrialOutcome {
    pub verdict: Verdict,
    pub decision: Decision,
}

impl TrialOutcome {
    pub fn new(verdict: Verdict, decision: Decision) -> Self {
        Self { verdict, decision }
    }

    pub fn is_win(&self) -> bool {
        self.verdict == Verdict::Win
    }

    /// Counter key, e.g. `win_changed` or `lose_unchanged`.
    pub fn key(&self) -> &'static str {
        match (self.verdict, self.decision) {
            (Verdict::Win, Decision::Switched) => "win_changed",
            (Verdict::Win, Decision::Stayed) => "win_unchanged",
            (Verdict::Lose, Decision::Switched) => "lose_changed",
            (Verdict::Lose, Decision::Stayed) => "lose_unchanged",
        }
    }
}

impl fmt::Display for TrialOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Full trace of one trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialRecord {
    pub winning_door: Door,
    pub initial_pick: Door,
    pub revealed_door: Door,
    pub final_pick: Door,
    pub outcome: TrialOutcome,
}

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Parameters of a single simulation run. Fixed once an engine is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub trial_count: u64,
    pub door_count: u32,
    pub strategy: StrategyMode,
    /// Seed for the random source. `None` draws from OS entropy.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            trial_count: 1000,
            door_count: 3,
            strategy: StrategyMode::Random,
            seed: None,
        }
    }
}

impl SimulationConfig {
    /// Check that the host-reveal rule is well-defined for this door count.
    pub fn validate(&self) -> Result<(), MontyError> {
        if self.door_count < MIN_DOORS {
            return Err(MontyError::Configuration(format!(
                "door_count must be at least {MIN_DOORS}, got {}",
                self.door_count
            )));
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Domain-specific error types.
#[derive(Debug, PartialEq, thiserror::Error)]
pub enum MontyError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Chart error: {0}")]
    Chart(String),

    #[error("Invalid config file: {0}")]
    Config(String),
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
