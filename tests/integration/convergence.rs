//! Monte Carlo convergence toward the closed-form win rates.

use montyhall::analysis::{theoretical_win_rate, ConvergenceReport, SimulationSummary};
use montyhall::engine::TrialEngine;
use montyhall::types::{Decision, SimulationConfig, StrategyMode};

const TRIALS: u64 = 100_000;
const TOLERANCE: f64 = 0.01;

fn config(doors: u32, strategy: StrategyMode, seed: u64) -> SimulationConfig {
    SimulationConfig { trial_count: TRIALS, door_count: doors, strategy, seed: Some(seed) }
}

#[test]
fn test_always_switch_wins_two_thirds() {
    let cfg = config(3, StrategyMode::Switch, 20_240_101);
    let results = TrialEngine::from_config(cfg).unwrap().run_all().unwrap();
    let rate = results.win_rate(Decision::Switched).unwrap();
    assert!((rate - 2.0 / 3.0).abs() < TOLERANCE, "switch win rate {rate}");
}

#[test]
fn test_never_switch_wins_one_third() {
    let cfg = config(3, StrategyMode::Stay, 20_240_102);
    let results = TrialEngine::from_config(cfg).unwrap().run_all().unwrap();
    let rate = results.win_rate(Decision::Stayed).unwrap();
    assert!((rate - 1.0 / 3.0).abs() < TOLERANCE, "stay win rate {rate}");
}

#[test]
fn test_random_mode_converges_for_both_families() {
    let cfg = config(3, StrategyMode::Random, 77);
    let results = TrialEngine::from_config(cfg.clone()).unwrap().run_all().unwrap();
    let summary = SimulationSummary::new(&cfg, &results, TOLERANCE);

    let switched = summary.switched.as_ref().unwrap();
    let stayed = summary.stayed.as_ref().unwrap();
    // roughly half the games go each way
    assert!((switched.trials as f64 / TRIALS as f64 - 0.5).abs() < 0.01);
    assert!(switched.converged, "{switched}");
    assert!(stayed.converged, "{stayed}");
}

#[test]
fn test_four_doors_switch_extension() {
    let cfg = config(4, StrategyMode::Switch, 4);
    let results = TrialEngine::from_config(cfg).unwrap().run_all().unwrap();
    let report = ConvergenceReport::from_results(&results, 4, Decision::Switched, TOLERANCE).unwrap();
    assert!((report.theoretical - theoretical_win_rate(4, Decision::Switched)).abs() < 1e-12);
    assert!(report.converged, "{report}");
}
