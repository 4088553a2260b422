//! Trial engine: plays Monty Hall games and tallies the outcomes.
//!
//! One trial is: hide the car, let the player pick, have the host open a
//! goat door that is neither the pick nor the car, then optionally switch.
//!
//! With three doors the switch target is the single remaining closed door.
//! With more doors the host still opens exactly one door, and a switching
//! player moves to one of the other closed doors chosen uniformly at random.

use rand::rngs::StdRng;
use tracing::{debug, trace};

use super::picker::{DoorPicker, RngPicker};
use super::results::AccumulatedResults;
use crate::types::{
    Decision, Door, MontyError, SimulationConfig, StrategyMode, TrialOutcome, TrialRecord, Verdict,
};

pub struct TrialEngine<P> {
    config: SimulationConfig,
    doors: Vec<Door>,
    picker: P,
}

impl TrialEngine<RngPicker<StdRng>> {
    /// Build an engine backed by `StdRng`, seeded from `config.seed` when set.
    pub fn from_config(config: SimulationConfig) -> Result<Self, MontyError> {
        let picker = RngPicker::from_seed(config.seed);
        Self::new(config, picker)
    }
}

impl<P: DoorPicker> TrialEngine<P> {
    /// Fails with `MontyError::Configuration` for fewer than three doors.
    pub fn new(config: SimulationConfig, picker: P) -> Result<Self, MontyError> {
        config.validate()?;
        let doors = (1..=config.door_count).collect();
        Ok(Self { config, doors, picker })
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Play one trial and bump the matching counter in `results`.
    pub fn run_single_trial(
        &mut self,
        results: &mut AccumulatedResults,
    ) -> Result<TrialRecord, MontyError> {
        let record = self.play()?;
        results.record(record.outcome);

        trace!(
            winning = record.winning_door,
            initial = record.initial_pick,
            revealed = record.revealed_door,
            final_pick = record.final_pick,
            outcome = %record.outcome,
            "Trial played"
        );

        Ok(record)
    }

    /// Play `trial_count` trials, extending both win-rate histories after each.
    pub fn run_all(&mut self) -> Result<AccumulatedResults, MontyError> {
        debug!(
            trials = self.config.trial_count,
            doors = self.config.door_count,
            strategy = %self.config.strategy,
            seed = ?self.config.seed,
            "Run starting"
        );

        let mut results = AccumulatedResults::new();
        for _ in 0..self.config.trial_count {
            self.run_single_trial(&mut results)?;
            results.record_win_rates();
        }

        debug!(
            win_changed = results.win_changed,
            win_unchanged = results.win_unchanged,
            lose_changed = results.lose_changed,
            lose_unchanged = results.lose_unchanged,
            "Run complete"
        );

        Ok(results)
    }

    fn play(&mut self) -> Result<TrialRecord, MontyError> {
        let winning_door = draw(&mut self.picker, &self.doors)?;
        let initial_pick = draw(&mut self.picker, &self.doors)?;

        let goats = self.closed_except(initial_pick, winning_door);
        let revealed_door = draw(&mut self.picker, &goats)?;

        let switch = match self.config.strategy {
            StrategyMode::Switch => true,
            StrategyMode::Stay => false,
            StrategyMode::Random => self.picker.coin(),
        };

        let (final_pick, decision) = if switch {
            let targets = self.closed_except(initial_pick, revealed_door);
            let target = match targets.as_slice() {
                [only] => *only,
                _ => draw(&mut self.picker, &targets)?,
            };
            (target, Decision::Switched)
        } else {
            (initial_pick, Decision::Stayed)
        };

        let verdict = if final_pick == winning_door { Verdict::Win } else { Verdict::Lose };

        Ok(TrialRecord {
            winning_door,
            initial_pick,
            revealed_door,
            final_pick,
            outcome: TrialOutcome::new(verdict, decision),
        })
    }

    /// Doors other than `a` and `b` (which may coincide).
    fn closed_except(&self, a: Door, b: Door) -> Vec<Door> {
        self.doors.iter().copied().filter(|&d| d != a && d != b).collect()
    }
}

fn draw<P: DoorPicker>(picker: &mut P, doors: &[Door]) -> Result<Door, MontyError> {
    picker
        .pick(doors)
        .ok_or_else(|| MontyError::Configuration("no door left to choose from".to_string()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
