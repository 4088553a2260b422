//! MONTYHALL: Monte Carlo simulation of the Monty Hall problem
//!
//! Entry point. Loads configuration, applies CLI overrides, initialises
//! structured logging, runs one engine per requested strategy, prints a
//! convergence summary, and renders the win-rate chart.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::{error, info};

use montyhall::analysis::SimulationSummary;
use montyhall::chart;
use montyhall::config::AppConfig;
use montyhall::engine::TrialEngine;
use montyhall::types::{SimulationConfig, StrategyMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum CliStrategy {
    /// Always switch doors.
    Switch,
    /// Never switch doors.
    Stay,
    /// Flip a coin every game.
    Random,
    /// Run an always-switch and a never-switch simulation side by side.
    Compare,
}

#[derive(Debug, Parser)]
#[command(name = "montyhall", version, about = "Simulate the Monty Hall problem")]
struct Cli {
    /// Path to the TOML configuration file.
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Number of games to simulate.
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    trials: Option<u64>,

    /// Number of doors (at least 3).
    #[arg(long)]
    doors: Option<u32>,

    /// Switching strategy.
    #[arg(long, value_enum)]
    strategy: Option<CliStrategy>,

    /// Seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,

    /// Chart output path (.png or .svg).
    #[arg(long)]
    chart: Option<PathBuf>,

    /// Skip chart rendering.
    #[arg(long)]
    no_chart: bool,

    /// Print the summary as JSON.
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Load .env file if present (non-fatal if missing)
    let _ = dotenv::dotenv();

    let cli = Cli::parse();
    init_logging();

    let mut cfg = AppConfig::load_or_default(&cli.config)?;
    if let Some(path) = &cli.chart {
        cfg.chart.output = path.clone();
    }
    if cli.no_chart {
        cfg.chart.enabled = false;
    }

    let mut base = cfg.simulation();
    if let Some(trials) = cli.trials {
        base.trial_count = trials;
    }
    if let Some(doors) = cli.doors {
        base.door_count = doors;
    }
    if let Some(seed) = cli.seed {
        base.seed = Some(seed);
    }

    let runs = plan_runs(base, cli.strategy);
    let compare = runs.len() > 1;

    let mut summaries = Vec::with_capacity(runs.len());
    for (tag, sim) in runs {
        info!(
            trials = sim.trial_count,
            doors = sim.door_count,
            strategy = %sim.strategy,
            "Starting simulation"
        );

        let mut engine = TrialEngine::from_config(sim.clone())
            .context("Invalid simulation configuration")?;
        let results = engine.run_all().context("Simulation failed")?;

        let summary = SimulationSummary::new(&sim, &results, cfg.analysis.tolerance);
        for report in summary.reports() {
            info!(
                decision = %report.decision,
                trials = report.trials,
                empirical = format!("{:.4}", report.empirical),
                theoretical = format!("{:.4}", report.theoretical),
                converged = report.converged,
                "Win rate"
            );
        }

        if cfg.chart.enabled {
            let mut spec = cfg.chart_spec(sim.trial_count);
            if compare {
                spec.output = chart::suffixed_path(&spec.output, tag);
            }
            if let Err(e) = chart::render_win_rates(
                &spec,
                results.switched_win_rates(),
                results.stayed_win_rates(),
            ) {
                error!(error = %e, path = %spec.output.display(), "Failed to render chart");
            }
        }

        summaries.push(summary);
    }

    if cli.json {
        let json = if let [only] = summaries.as_slice() {
            serde_json::to_string_pretty(only)
        } else {
            serde_json::to_string_pretty(&summaries)
        }
        .context("Failed to serialise summary")?;
        println!("{json}");
    } else {
        for summary in &summaries {
            println!("{summary}");
        }
    }

    Ok(())
}

/// One `(tag, config)` per engine to run.
fn plan_runs(base: SimulationConfig, strategy: Option<CliStrategy>) -> Vec<(&'static str, SimulationConfig)> {
    let single = |mode: StrategyMode| SimulationConfig { strategy: mode, ..base.clone() };
    match strategy {
        Some(CliStrategy::Switch) => vec![("switch", single(StrategyMode::Switch))],
        Some(CliStrategy::Stay) => vec![("stay", single(StrategyMode::Stay))],
        Some(CliStrategy::Random) => vec![("random", single(StrategyMode::Random))],
        Some(CliStrategy::Compare) => vec![
            ("switch", single(StrategyMode::Switch)),
            (
                "stay",
                SimulationConfig {
                    strategy: StrategyMode::Stay,
                    seed: base.seed.map(|s| s.wrapping_add(1)),
                    ..base.clone()
                },
            ),
        ],
        None => vec![("run", base.clone())],
    }
}

/// Initialise the `tracing` subscriber.
fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("montyhall=info"));

    let json_logging = std::env::var("MONTYHALL_LOG_JSON").is_ok();

    if json_logging {
        fmt()
            .json()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    } else {
        fmt()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_writer(std::io::stderr)
            .init();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_flags() {
        let cli = Cli::try_parse_from(["montyhall", "--trials", "500", "--strategy", "compare", "--seed", "7"]).unwrap();
        assert_eq!(cli.trials, Some(500));
        assert_eq!(cli.strategy, Some(CliStrategy::Compare));
        assert_eq!(cli.seed, Some(7));
        assert!(!cli.no_chart);
    }

    #[test]
    fn test_cli_rejects_zero_trials() {
        assert!(Cli::try_parse_from(["montyhall", "--trials", "0"]).is_err());
    }

    #[test]
    fn test_compare_plans_two_independent_runs() {
        let base = SimulationConfig { seed: Some(10), ..SimulationConfig::default() };
        let runs = plan_runs(base, Some(CliStrategy::Compare));
        assert_eq!(runs.len(), 2);
        assert_eq!(runs[0].1.strategy, StrategyMode::Switch);
        assert_eq!(runs[0].1.seed, Some(10));
        assert_eq!(runs[1].1.strategy, StrategyMode::Stay);
        assert_eq!(runs[1].1.seed, Some(11));
    }

    #[test]
    fn test_default_plan_uses_config_strategy() {
        let base = SimulationConfig { strategy: StrategyMode::Stay, ..SimulationConfig::default() };
        let runs = plan_runs(base, None);
        assert_eq!(runs.len(), 1);
        assert_eq!(runs[0].1.strategy, StrategyMode::Stay);
    }
}
