//! Cost accrual
//!
//! Converts a day's state vector into money: the penalty billed for the day
//! and the per-state discount granted to the buyer. [`CostAccrualTracker`]
//! is a pure function of its construction parameters; the running totals
//! are owned and folded by the caller (the runner), which keeps accrual
//! independently testable.
//!
//! Money is f64 throughout: penalty factors are fractional multipliers, so
//! integer minor units would force a rounding policy the model does not
//! define.

use crate::error::SimulationError;
use crate::models::penalty::PenaltyTable;
use crate::models::state::{count_states, OccupancyCounts, QualityState, STATE_COUNT};

/// Result of accruing one day's costs
#[derive(Debug, Clone, PartialEq)]
pub struct DayAccrual {
    /// Products per state this day
    pub counts: OccupancyCounts,

    /// Penalty billed for this day
    pub daily_penalty: f64,

    /// Per-state discount granted this day
    pub discount_increment: [f64; STATE_COUNT],
}

/// Running totals owned by the runner
///
/// Folding a [`DayAccrual`] never decreases either field: increments are
/// products of non-negative factors.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CostTotals {
    /// Total cost billed so far
    pub cumulative_cost: f64,

    /// Per-state discount granted so far
    pub cumulative_discounts: [f64; STATE_COUNT],
}

impl CostTotals {
    /// Fold one day's accrual into the totals
    pub fn fold(&mut self, accrual: &DayAccrual) {
        self.cumulative_cost += accrual.daily_penalty;
        for (total, increment) in self
            .cumulative_discounts
            .iter_mut()
            .zip(accrual.discount_increment.iter())
        {
            *total += increment;
        }
    }
}

/// Converts occupancy into daily penalty and discount figures
///
/// # Example
/// ```
/// use quality_simulator_core_rs::{CostAccrualTracker, PenaltyTable, QualityState};
///
/// let tracker = CostAccrualTracker::new(1_000_000.0, 10, 100, PenaltyTable::default()).unwrap();
/// let states = vec![QualityState::Excellent; 100];
/// let accrual = tracker.accrue(&states);
///
/// // All products at full price: the whole day's cost is billed
/// assert!((accrual.daily_penalty - 100_000.0).abs() < 1e-9);
/// assert_eq!(accrual.discount_increment, [0.0; 5]);
/// ```
#[derive(Debug, Clone)]
pub struct CostAccrualTracker {
    cost_per_day: f64,
    num_products: usize,
    penalties: PenaltyTable,
}

impl CostAccrualTracker {
    /// Create a tracker
    ///
    /// Derives `cost_per_day = total_price / horizon_days`.
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidParameter`] if `total_price` is not a
    /// strictly positive finite number, or `horizon_days` / `num_products`
    /// is zero. Validation happens here, before any accrual state exists.
    pub fn new(
        total_price: f64,
        horizon_days: usize,
        num_products: usize,
        penalties: PenaltyTable,
    ) -> Result<Self, SimulationError> {
        if horizon_days == 0 {
            return Err(SimulationError::InvalidParameter(
                "number of days must be a positive integer".to_string(),
            ));
        }
        if num_products == 0 {
            return Err(SimulationError::InvalidParameter(
                "number of products must be a positive integer".to_string(),
            ));
        }
        if !total_price.is_finite() || total_price <= 0.0 {
            return Err(SimulationError::InvalidParameter(
                "total price must be a positive number".to_string(),
            ));
        }
        Ok(Self {
            cost_per_day: total_price / horizon_days as f64,
            num_products,
            penalties,
        })
    }

    /// Cost billed per day at full quality
    pub fn cost_per_day(&self) -> f64 {
        self.cost_per_day
    }

    /// Compute one day's counts, penalty and discount increments
    ///
    /// Pure: no internal state changes, identical input gives identical
    /// output. `states` must have one entry per product.
    pub fn accrue(&self, states: &[QualityState]) -> DayAccrual {
        let counts = count_states(states);
        let per_product = self.cost_per_day / self.num_products as f64;

        let mut daily_penalty = 0.0;
        let mut discount_increment = [0.0; STATE_COUNT];
        for (index, state) in QualityState::ALL.iter().enumerate() {
            let occupancy = counts[index] as f64;
            daily_penalty += occupancy * self.penalties.factor(*state) * per_product;
            discount_increment[index] = occupancy * self.penalties.discount_share(*state) * per_product;
        }

        DayAccrual {
            counts,
            daily_penalty,
            discount_increment,
        }
    }
}
