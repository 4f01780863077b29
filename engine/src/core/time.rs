//! Time management for the simulation
//!
//! The simulation operates in whole days over a fixed horizon. This module
//! provides deterministic day advancement; pacing (how often the consumer
//! asks for the next day) is the caller's concern.

use serde::{Deserialize, Serialize};

/// Tracks the current day against a fixed horizon
///
/// # Example
/// ```
/// use quality_simulator_core_rs::DayClock;
///
/// let mut clock = DayClock::new(3);
/// assert_eq!(clock.current_day(), 0);
/// assert!(!clock.is_complete());
///
/// clock.advance_day();
/// clock.advance_day();
/// clock.advance_day();
/// assert!(clock.is_complete());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayClock {
    /// Days fully processed so far
    current_day: usize,
    /// Total days in the run
    horizon_days: usize,
}

impl DayClock {
    /// Create a clock for a horizon of `horizon_days`
    pub fn new(horizon_days: usize) -> Self {
        assert!(horizon_days > 0, "horizon_days must be positive");
        Self {
            current_day: 0,
            horizon_days,
        }
    }

    /// Advance time by one day
    ///
    /// Saturates at the horizon; a completed clock never advances further.
    pub fn advance_day(&mut self) {
        if self.current_day < self.horizon_days {
            self.current_day += 1;
        }
    }

    /// Day about to be processed (0-indexed)
    pub fn current_day(&self) -> usize {
        self.current_day
    }

    /// Total days in the run
    pub fn horizon_days(&self) -> usize {
        self.horizon_days
    }

    /// Days left before the horizon is reached
    pub fn days_remaining(&self) -> usize {
        self.horizon_days - self.current_day
    }

    /// Whether every day of the horizon has been processed
    pub fn is_complete(&self) -> bool {
        self.current_day == self.horizon_days
    }
}
