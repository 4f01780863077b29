//! Quality Degradation Simulator Core - Rust Engine
//!
//! Models the day-by-day quality degradation of a batch of manufactured
//! products as a discrete-time, finite-state Markov chain, and derives the
//! running monetary penalty and per-state discounts from the evolving state
//! distribution.
//!
//! # Architecture
//!
//! - **core**: Day clock (horizon bookkeeping)
//! - **models**: Domain types (states, matrix, penalties, snapshots)
//! - **rng**: Deterministic random number generation and the sampler seam
//! - **transition**: Per-product Markov state advancement
//! - **costs**: Daily penalty and discount accrual (pure)
//! - **orchestrator**: Day loop, snapshot sequence, end-of-run report
//!
//! # Critical Invariants
//!
//! 1. Occupancy counts sum to the batch size every day
//! 2. Cumulative cost and discounts never decrease
//! 3. All randomness is deterministic (seeded RNG); same seed + same
//!    config = identical snapshot sequence
//! 4. Parameters are validated before any simulation state is allocated

// Module declarations
pub mod core;
pub mod costs;
pub mod error;
pub mod models;
pub mod orchestrator;
pub mod rng;
pub mod transition;

// Re-exports for convenience
pub use crate::core::time::DayClock;
pub use costs::{CostAccrualTracker, CostTotals, DayAccrual};
pub use error::SimulationError;
pub use models::{
    count_states,
    matrix::{MatrixError, TransitionMatrix},
    penalty::{PenaltyError, PenaltyTable},
    snapshot::DailySnapshot,
    state::{OccupancyCounts, QualityState, StateVector, STATE_COUNT},
};
pub use orchestrator::{history_digest, Phase, RunReport, RunnerConfig, SimulationRunner};
pub use rng::{RngManager, StateSampler};
pub use transition::TransitionEngine;

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn quality_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::runner::PyRunner>()?;
    Ok(())
}
