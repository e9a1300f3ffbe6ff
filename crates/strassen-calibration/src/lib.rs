//! # strassen-calibration
//!
//! Timing sweeps over matrix dimension and crossover threshold, and
//! persistence of their reports.

pub mod io;
pub mod runner;
pub mod sweep;

pub use sweep::{CrossoverSweep, SweepPoint, SweepReport};
