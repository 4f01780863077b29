//! Simulation runner
//!
//! Main day loop integrating the core components:
//! - Transition engine (per-product Markov step)
//! - Cost accrual (daily penalty + discount increments)
//! - Day clock (horizon bookkeeping)
//!
//! # Architecture
//!
//! ```text
//! For each day t in 0..days:
//! 1. Advance states (skipped at t = 0; all products start Excellent)
//! 2. Accrue costs for the resulting state vector
//! 3. Fold increments into runner-owned totals
//! 4. Record the day's occupancy counts in the history
//! 5. Emit an immutable DailySnapshot
//! ```
//!
//! The runner exposes a step function; the caller decides the cadence. A
//! renderer may pull one snapshot per wall-clock tick or drain the whole
//! sequence eagerly; both produce identical results for a fixed seed.
//!
//! # Example
//!
//! ```rust
//! use quality_simulator_core_rs::orchestrator::{RunnerConfig, SimulationRunner};
//!
//! let config = RunnerConfig::new(30, 100, 1_000_000.0).with_seed(12345);
//! let mut runner = SimulationRunner::new(config).unwrap();
//!
//! while let Some(snapshot) = runner.step() {
//!     assert_eq!(snapshot.total_products(), 100);
//! }
//! assert_eq!(runner.days_completed(), 30);
//! ```

use crate::core::time::DayClock;
use crate::costs::{CostAccrualTracker, CostTotals};
use crate::error::SimulationError;
use crate::models::matrix::TransitionMatrix;
use crate::models::penalty::PenaltyTable;
use crate::models::snapshot::DailySnapshot;
use crate::models::state::{OccupancyCounts, StateVector, STATE_COUNT};
use crate::rng::RngManager;
use crate::transition::TransitionEngine;
use uuid::Uuid;

// ============================================================================
// Configuration Types
// ============================================================================

/// Complete runner configuration
///
/// # Fields
///
/// * `days` - Simulation horizon in days
/// * `num_products` - Number of independent product trajectories
/// * `total_price` - Total batch price; `total_price / days` is billed daily
/// * `rng_seed` - Fixed seed for reproducible runs; `None` draws from the OS
/// * `matrix` - Validated transition matrix
/// * `penalties` - Validated per-state penalty factors
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Number of days to simulate
    pub days: usize,

    /// Number of independent products in the batch
    pub num_products: usize,

    /// Total batch price (monetary units)
    pub total_price: f64,

    /// RNG seed; `None` = system entropy (repeated runs differ)
    pub rng_seed: Option<u64>,

    /// Transition probabilities
    pub matrix: TransitionMatrix,

    /// Per-state penalty factors
    pub penalties: PenaltyTable,
}

impl RunnerConfig {
    /// Configuration with the reference matrix and penalty table
    pub fn new(days: usize, num_products: usize, total_price: f64) -> Self {
        Self {
            days,
            num_products,
            total_price,
            rng_seed: None,
            matrix: TransitionMatrix::default(),
            penalties: PenaltyTable::default(),
        }
    }

    /// Fix the RNG seed for a reproducible run
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Replace the transition matrix
    pub fn with_matrix(mut self, matrix: TransitionMatrix) -> Self {
        self.matrix = matrix;
        self
    }

    /// Replace the penalty table
    pub fn with_penalties(mut self, penalties: PenaltyTable) -> Self {
        self.penalties = penalties;
        self
    }
}

/// Lifecycle of a runner
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Constructed, no snapshot emitted yet
    NotStarted,
    /// At least one snapshot emitted, horizon not reached
    Running,
    /// All `days` snapshots emitted; `step()` returns `None` forever
    Completed,
}

// ============================================================================
// Runner
// ============================================================================

/// Owns all run state and drives the day loop
///
/// The state vector, cumulative totals and count history are owned
/// exclusively here and mutated only through [`SimulationRunner::step`].
/// The transition engine and cost tracker stay stateless collaborators.
///
/// # Determinism
///
/// All randomness goes through the seeded xorshift64* [`RngManager`]. Same
/// seed + same config = identical snapshot sequence.
pub struct SimulationRunner {
    /// Horizon bookkeeping
    clock: DayClock,

    /// Markov state advancement
    engine: TransitionEngine,

    /// Daily penalty / discount computation
    tracker: CostAccrualTracker,

    /// Deterministic RNG (the single shared random source for the run)
    rng: RngManager,

    /// Current per-product states
    states: StateVector,

    /// Runner-owned cumulative cost and discounts
    totals: CostTotals,

    /// Occupancy counts for every completed day, in day order
    history: Vec<OccupancyCounts>,

    /// Lifecycle phase
    phase: Phase,

    /// Effective seed (recorded even for entropy-seeded runs, for replay)
    seed: u64,

    /// Number of products (cached for accessors)
    num_products: usize,

    /// Identifier tagging this run's report
    run_id: Uuid,
}

impl SimulationRunner {
    /// Create a runner from configuration
    ///
    /// Validation precedes any state creation: if `days`, `num_products`
    /// or `total_price` is invalid, no state vector or history is
    /// allocated and the error carries a single human-readable message.
    ///
    /// # Errors
    ///
    /// * [`SimulationError::InvalidParameter`] - non-positive days,
    ///   products or price
    pub fn new(config: RunnerConfig) -> Result<Self, SimulationError> {
        Self::validate_config(&config)?;

        let engine = TransitionEngine::new(config.matrix);
        let tracker = CostAccrualTracker::new(
            config.total_price,
            config.days,
            config.num_products,
            config.penalties,
        )?;

        let rng = match config.rng_seed {
            Some(seed) => RngManager::new(seed),
            None => RngManager::from_entropy(),
        };
        // Before the first draw the internal state is the coerced seed
        let seed = rng.get_state();

        let states = engine.initialize(config.num_products)?;

        Ok(Self {
            clock: DayClock::new(config.days),
            engine,
            tracker,
            rng,
            states,
            totals: CostTotals::default(),
            history: Vec::with_capacity(config.days),
            phase: Phase::NotStarted,
            seed,
            num_products: config.num_products,
            run_id: Uuid::new_v4(),
        })
    }

    /// Validate configuration before any allocation
    fn validate_config(config: &RunnerConfig) -> Result<(), SimulationError> {
        if config.days == 0 {
            return Err(SimulationError::InvalidParameter(
                "number of days must be a positive integer".to_string(),
            ));
        }
        if config.num_products == 0 {
            return Err(SimulationError::InvalidParameter(
                "number of products must be a positive integer".to_string(),
            ));
        }
        if !config.total_price.is_finite() || config.total_price <= 0.0 {
            return Err(SimulationError::InvalidParameter(
                "total price must be a positive number".to_string(),
            ));
        }
        Ok(())
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Effective RNG seed for this run
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Identifier for this run
    pub fn run_id(&self) -> Uuid {
        self.run_id
    }

    /// Number of products in the batch
    pub fn num_products(&self) -> usize {
        self.num_products
    }

    /// Horizon in days
    pub fn horizon_days(&self) -> usize {
        self.clock.horizon_days()
    }

    /// Days emitted so far
    ///
    /// Valid mid-run: after cancellation this, together with
    /// [`SimulationRunner::history`] and the totals, forms a consistent
    /// "summary so far".
    pub fn days_completed(&self) -> usize {
        self.history.len()
    }

    /// Occupancy counts for every completed day, ordered by day
    pub fn history(&self) -> &[OccupancyCounts] {
        &self.history
    }

    /// Counts for the most recent completed day
    pub fn final_counts(&self) -> Option<OccupancyCounts> {
        self.history.last().copied()
    }

    /// Total cost billed so far
    pub fn cumulative_cost(&self) -> f64 {
        self.totals.cumulative_cost
    }

    /// Per-state discounts granted so far
    pub fn cumulative_discounts(&self) -> [f64; STATE_COUNT] {
        self.totals.cumulative_discounts
    }

    // ========================================================================
    // Day Loop
    // ========================================================================

    /// Process the next day and return its snapshot
    ///
    /// Day 0 is emitted without a transition (all products start
    /// Excellent); every later day first advances the state vector, then
    /// accrues costs. Returns `None` once the horizon is reached; the
    /// sequence is finite, ordered by day, and non-restartable.
    pub fn step(&mut self) -> Option<DailySnapshot> {
        if self.clock.is_complete() {
            self.phase = Phase::Completed;
            return None;
        }

        let day = self.clock.current_day();
        if day > 0 {
            self.states = self.engine.step(&self.states, &mut self.rng);
        }
        self.phase = Phase::Running;

        let accrual = self.tracker.accrue(&self.states);
        self.totals.fold(&accrual);
        self.history.push(accrual.counts);
        self.clock.advance_day();

        if self.clock.is_complete() {
            self.phase = Phase::Completed;
        }

        Some(DailySnapshot {
            day,
            counts: accrual.counts,
            daily_penalty: accrual.daily_penalty,
            cumulative_cost: self.totals.cumulative_cost,
            cumulative_discounts: self.totals.cumulative_discounts,
        })
    }

    /// Lazy iterator over the remaining snapshots
    ///
    /// Borrows the runner mutably; dropping the iterator mid-run leaves
    /// the history and totals valid for a partial summary.
    pub fn snapshots(&mut self) -> Snapshots<'_> {
        Snapshots { runner: self }
    }

    /// Drain the remaining days eagerly
    pub fn run_to_completion(&mut self) -> Vec<DailySnapshot> {
        self.snapshots().collect()
    }

    /// `k` evenly spaced completed days with their counts
    ///
    /// Day indices follow `linspace(0, n-1, k)` truncated to integers, so
    /// the first and last completed day are always included for `k >= 2`.
    /// Used for the end-of-run stacked-column comparison.
    pub fn sampled_days(&self, k: usize) -> Vec<(usize, OccupancyCounts)> {
        let n = self.history.len();
        if n == 0 || k == 0 {
            return Vec::new();
        }
        if k == 1 {
            return vec![(0, self.history[0])];
        }
        (0..k)
            .map(|i| {
                let day = i * (n - 1) / (k - 1);
                (day, self.history[day])
            })
            .collect()
    }
}

impl std::fmt::Debug for SimulationRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimulationRunner")
            .field("phase", &self.phase)
            .field("days_completed", &self.days_completed())
            .field("horizon_days", &self.horizon_days())
            .field("num_products", &self.num_products)
            .field("cumulative_cost", &self.totals.cumulative_cost)
            .finish()
    }
}

/// Lazy snapshot sequence (see [`SimulationRunner::snapshots`])
pub struct Snapshots<'a> {
    runner: &'a mut SimulationRunner,
}

impl Iterator for Snapshots<'_> {
    type Item = DailySnapshot;

    fn next(&mut self) -> Option<DailySnapshot> {
        self.runner.step()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.runner.horizon_days() - self.runner.days_completed();
        (remaining, Some(remaining))
    }
}

// ============================================================================
// Tests
// ============================================================================
