//! Per-state penalty factors
//!
//! Each quality state carries a multiplier in (0, 1] applied to the
//! per-product daily cost. Excellent products bill at full price (1.0);
//! degraded states bill at a fraction, and the shortfall is the discount
//! granted to the buyer. Factors are validated once at construction and
//! immutable afterwards.

use crate::models::state::{QualityState, STATE_COUNT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Reference penalty factors, one per state in severity order
const REFERENCE_FACTORS: [f64; STATE_COUNT] = [1.0, 0.95, 0.85, 0.5, 0.3];

/// Errors raised while validating a penalty table
#[derive(Debug, Error, PartialEq)]
pub enum PenaltyError {
    #[error("penalty factor [{index}] = {value} is outside (0, 1]")]
    OutOfRange { index: usize, value: f64 },

    #[error("penalty factor for Excellent must be 1.0, got {value}")]
    FirstNotUnity { value: f64 },

    #[error("penalty factors must be non-increasing by severity (violated at index {index})")]
    NotMonotonic { index: usize },
}

/// Validated per-state penalty factor table
///
/// # Example
/// ```
/// use quality_simulator_core_rs::{PenaltyTable, QualityState};
///
/// let table = PenaltyTable::default();
/// assert_eq!(table.factor(QualityState::Excellent), 1.0);
/// assert_eq!(table.discount_share(QualityState::Excellent), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PenaltyTable {
    factors: [f64; STATE_COUNT],
}

impl PenaltyTable {
    /// Build a table from raw factors, validating range and monotonicity
    ///
    /// # Errors
    ///
    /// * [`PenaltyError::OutOfRange`] - a factor is NaN, <= 0 or > 1
    /// * [`PenaltyError::FirstNotUnity`] - the Excellent factor is not 1.0
    /// * [`PenaltyError::NotMonotonic`] - a factor exceeds its predecessor
    pub fn new(factors: [f64; STATE_COUNT]) -> Result<Self, PenaltyError> {
        for (index, &value) in factors.iter().enumerate() {
            if !value.is_finite() || value <= 0.0 || value > 1.0 {
                return Err(PenaltyError::OutOfRange { index, value });
            }
        }
        if factors[0] != 1.0 {
            return Err(PenaltyError::FirstNotUnity { value: factors[0] });
        }
        for index in 1..STATE_COUNT {
            if factors[index] > factors[index - 1] {
                return Err(PenaltyError::NotMonotonic { index });
            }
        }
        Ok(Self { factors })
    }

    /// Penalty factor for a state
    pub fn factor(&self, state: QualityState) -> f64 {
        self.factors[state.index()]
    }

    /// Fraction of the per-product daily cost forgiven for a state
    pub fn discount_share(&self, state: QualityState) -> f64 {
        1.0 - self.factors[state.index()]
    }

    /// Raw factors (for serialization across the FFI boundary)
    pub fn factors(&self) -> &[f64; STATE_COUNT] {
        &self.factors
    }
}

impl Default for PenaltyTable {
    fn default() -> Self {
        Self {
            factors: REFERENCE_FACTORS,
        }
    }
}
