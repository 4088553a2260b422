//! Random source for trials.
//!
//! The engine never touches a global RNG. Every random draw goes through
//! a `DoorPicker`, so runs are reproducible under a fixed seed and tests
//! can script exact draws.

use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::types::Door;

/// Uniform selection from a set of doors.
#[cfg_attr(test, mockall::automock)]
pub trait DoorPicker {
    /// Pick one door uniformly at random. Returns `None` only for an empty set.
    fn pick(&mut self, doors: &[Door]) -> Option<Door>;

    /// Fair coin flip.
    fn coin(&mut self) -> bool {
        self.pick(&[0, 1]) == Some(1)
    }
}

/// `DoorPicker` backed by any `rand` generator.
#[derive(Debug, Clone)]
pub struct RngPicker<R> {
    rng: R,
}

impl<R: Rng> RngPicker<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngPicker<StdRng> {
    /// Deterministic picker: same seed, same draws.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Picker seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_os_rng())
    }

    /// Seeded when a seed is given, entropy otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::seeded(s),
            None => Self::from_entropy(),
        }
    }
}

impl<R: Rng> DoorPicker for RngPicker<R> {
    fn pick(&mut self, doors: &[Door]) -> Option<Door> {
        doors.choose(&mut self.rng).copied()
    }

    fn coin(&mut self) -> bool {
        self.rng.random_bool(0.5)
    }
}
