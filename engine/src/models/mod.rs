//! Domain models for the quality degradation simulator

pub mod matrix;
pub mod penalty;
pub mod snapshot;
pub mod state;

// Re-exports
pub use matrix::{MatrixError, TransitionMatrix};
pub use penalty::{PenaltyError, PenaltyTable};
pub use snapshot::DailySnapshot;
pub use state::{count_states, OccupancyCounts, QualityState, StateVector, STATE_COUNT};
