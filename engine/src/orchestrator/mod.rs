//! Orchestrator - the simulation day loop
//!
//! See `engine.rs` for the runner and `report.rs` for the end-of-run
//! summary record.

pub mod engine;
pub mod report;

// Re-export main types for convenience
pub use engine::{Phase, RunnerConfig, SimulationRunner, Snapshots};
pub use report::{history_digest, RunReport};
