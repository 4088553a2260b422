//! Configuration loading from TOML.
//!
//! Reads `config.toml` and deserializes into strongly-typed structs.
//! Every section is optional; missing keys take their defaults, and a
//! missing file yields the all-default configuration.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::analysis::DEFAULT_TOLERANCE;
use crate::chart::ChartSpec;
use crate::types::{MontyError, SimulationConfig, StrategyMode};

/// Top-level application configuration.
#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub simulation: SimulationSection,
    pub chart: ChartConfig,
    pub analysis: AnalysisConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct SimulationSection {
    pub trial_count: u64,
    pub door_count: u32,
    pub strategy: StrategyMode,
    pub seed: Option<u64>,
}

impl Default for SimulationSection {
    fn default() -> Self {
        let sim = SimulationConfig::default();
        Self {
            trial_count: sim.trial_count,
            door_count: sim.door_count,
            strategy: sim.strategy,
            seed: sim.seed,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ChartConfig {
    pub enabled: bool,
    /// Output file; `.png` or `.svg`.
    pub output: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            output: PathBuf::from("monty_hall.png"),
            width: 1200,
            height: 600,
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Maximum |empirical - theoretical| counted as converged.
    pub tolerance: f64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self { tolerance: DEFAULT_TOLERANCE }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Load from `path` if it exists, otherwise use defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            info!(path = %path.display(), "No config file found, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn parse(contents: &str) -> Result<Self, MontyError> {
        let cfg: AppConfig = toml::from_str(contents).map_err(|e| MontyError::Config(e.to_string()))?;
        if !(cfg.analysis.tolerance > 0.0 && cfg.analysis.tolerance < 1.0) {
            return Err(MontyError::Config(format!(
                "analysis.tolerance must be in (0, 1), got {}",
                cfg.analysis.tolerance
            )));
        }
        Ok(cfg)
    }

    /// The engine-facing part of the configuration.
    pub fn simulation(&self) -> SimulationConfig {
        SimulationConfig {
            trial_count: self.simulation.trial_count,
            door_count: self.simulation.door_count,
            strategy: self.simulation.strategy,
            seed: self.simulation.seed,
        }
    }

    pub fn chart_spec(&self, trial_count: u64) -> ChartSpec {
        ChartSpec {
            output: self.chart.output.clone(),
            width: self.chart.width,
            height: self.chart.height,
            trial_count,
        }
    }
}
