//! End-to-end run invariants.
//!
//! Drives `TrialEngine::run_all` with seeded pickers and checks the
//! bookkeeping guarantees that hold for every run.

use montyhall::engine::{AccumulatedResults, RngPicker, TrialEngine};
use montyhall::types::{Decision, MontyError, SimulationConfig, StrategyMode};

fn run(trials: u64, doors: u32, strategy: StrategyMode, seed: u64) -> AccumulatedResults {
    let cfg = SimulationConfig { trial_count: trials, door_count: doors, strategy, seed: Some(seed) };
    TrialEngine::from_config(cfg).unwrap().run_all().unwrap()
}

#[test]
fn test_counters_sum_to_trial_count() {
    for (n, strategy) in [(0, StrategyMode::Random), (1, StrategyMode::Stay), (999, StrategyMode::Random)] {
        let r = run(n, 3, strategy, 5);
        assert_eq!(r.total(), n);
    }
}

#[test]
fn test_rates_bounded_and_lengths_consistent() {
    let trials = 2_000;
    let r = run(trials, 3, StrategyMode::Random, 17);

    for decision in Decision::ALL {
        let rates = r.win_rates(*decision);
        assert!(rates.len() as u64 <= trials);
        assert!(rates.iter().all(|p| (0.0..=1.0).contains(p)));
    }
    // Both families get played early, so each history covers nearly every game.
    assert!(r.switched_win_rates().len() as u64 > trials - 50);
    assert!(r.stayed_win_rates().len() as u64 > trials - 50);
    // Final history entry equals the cumulative rate.
    let last = *r.switched_win_rates().last().unwrap();
    assert!((last - r.win_rate(Decision::Switched).unwrap()).abs() < 1e-12);
}

#[test]
fn test_fixed_strategy_fills_one_history() {
    let r = run(300, 3, StrategyMode::Switch, 8);
    assert_eq!(r.switched_win_rates().len(), 300);
    assert!(r.stayed_win_rates().is_empty());
    assert_eq!(r.win_unchanged + r.lose_unchanged, 0);

    let r = run(300, 3, StrategyMode::Stay, 8);
    assert_eq!(r.stayed_win_rates().len(), 300);
    assert!(r.switched_win_rates().is_empty());
    assert_eq!(r.win_changed + r.lose_changed, 0);
}

#[test]
fn test_seeded_runs_are_identical() {
    let a = run(5_000, 3, StrategyMode::Random, 2024);
    let b = run(5_000, 3, StrategyMode::Random, 2024);
    assert_eq!(a, b);
}

#[test]
fn test_different_seeds_diverge() {
    let a = run(5_000, 3, StrategyMode::Random, 1);
    let b = run(5_000, 3, StrategyMode::Random, 2);
    assert_ne!(a, b);
}

#[test]
fn test_single_trials_accumulate_into_caller_results() {
    let cfg = SimulationConfig { trial_count: 10, door_count: 3, strategy: StrategyMode::Random, seed: None };
    let mut engine = TrialEngine::new(cfg, RngPicker::seeded(3)).unwrap();
    let mut results = AccumulatedResults::new();
    for i in 1..=25 {
        let record = engine.run_single_trial(&mut results).unwrap();
        assert_ne!(record.revealed_door, record.winning_door);
        assert_ne!(record.revealed_door, record.initial_pick);
        assert_ne!(record.final_pick, record.revealed_door);
        assert_eq!(results.total(), i);
    }
}

#[test]
fn test_too_few_doors_fails_before_any_trial() {
    for doors in [0, 1, 2] {
        let cfg = SimulationConfig { door_count: doors, ..SimulationConfig::default() };
        let err = TrialEngine::from_config(cfg).err().unwrap();
        assert!(matches!(err, MontyError::Configuration(_)));
    }
}

#[test]
fn test_independent_engines_do_not_share_state() {
    let cfg = SimulationConfig { trial_count: 100, door_count: 3, strategy: StrategyMode::Switch, seed: Some(9) };
    let mut switch = TrialEngine::from_config(cfg.clone()).unwrap();
    let mut stay = TrialEngine::from_config(SimulationConfig { strategy: StrategyMode::Stay, ..cfg }).unwrap();

    let s = switch.run_all().unwrap();
    let t = stay.run_all().unwrap();
    assert_eq!(s.total(), 100);
    assert_eq!(t.total(), 100);
    assert_eq!(s.played(Decision::Stayed), 0);
    assert_eq!(t.played(Decision::Switched), 0);
}
