//! Core engine: random source, trial loop, and result bookkeeping.

pub mod picker;
pub mod results;
pub mod trial;

pub use picker::{DoorPicker, RngPicker};
pub use results::AccumulatedResults;
pub use trial::TrialEngine;
