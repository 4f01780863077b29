//! Transition probability matrix
//!
//! Row-stochastic 5x5 matrix: entry `[i][j]` is the probability that a
//! product in state `i` today is in state `j` tomorrow. Rows are validated
//! at construction and the matrix is immutable afterwards, so every row
//! handed to the sampler is a well-formed categorical distribution.
//!
//! A malformed matrix is a configuration defect, not a runtime condition:
//! construction fails fast and nothing downstream ever re-checks.

use crate::models::state::{QualityState, STATE_COUNT};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Allowed deviation of a row sum from 1.0
pub const ROW_SUM_TOLERANCE: f64 = 1e-6;

/// Reference degradation matrix for manufactured products
///
/// Diagonal dominance models persistence: most products stay in their
/// current state from one day to the next.
const REFERENCE_ROWS: [[f64; STATE_COUNT]; STATE_COUNT] = [
    [0.60, 0.30, 0.05, 0.03, 0.02],
    [0.20, 0.50, 0.15, 0.10, 0.05],
    [0.10, 0.20, 0.50, 0.15, 0.05],
    [0.05, 0.10, 0.20, 0.50, 0.15],
    [0.02, 0.05, 0.10, 0.20, 0.63],
];

/// Errors raised while validating a transition matrix
#[derive(Debug, Error, PartialEq)]
pub enum MatrixError {
    #[error("matrix row {row} sums to {sum} (must be 1.0 within {tolerance})", tolerance = ROW_SUM_TOLERANCE)]
    RowNotStochastic { row: usize, sum: f64 },

    #[error("matrix entry [{row}][{col}] is negative: {value}")]
    NegativeEntry { row: usize, col: usize, value: f64 },

    #[error("matrix entry [{row}][{col}] is not finite")]
    NonFiniteEntry { row: usize, col: usize },
}

/// Validated row-stochastic transition matrix
///
/// # Example
/// ```
/// use quality_simulator_core_rs::{QualityState, TransitionMatrix};
///
/// let matrix = TransitionMatrix::default();
/// let row = matrix.row(QualityState::Excellent);
/// assert!((row.iter().sum::<f64>() - 1.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitionMatrix {
    rows: [[f64; STATE_COUNT]; STATE_COUNT],
}

impl TransitionMatrix {
    /// Build a matrix from raw rows, validating stochasticity
    ///
    /// # Errors
    ///
    /// * [`MatrixError::NonFiniteEntry`] - an entry is NaN or infinite
    /// * [`MatrixError::NegativeEntry`] - an entry is below zero
    /// * [`MatrixError::RowNotStochastic`] - a row sum deviates from 1.0
    ///   by more than [`ROW_SUM_TOLERANCE`]
    pub fn new(rows: [[f64; STATE_COUNT]; STATE_COUNT]) -> Result<Self, MatrixError> {
        for (i, row) in rows.iter().enumerate() {
            let mut sum = 0.0;
            for (j, &value) in row.iter().enumerate() {
                if !value.is_finite() {
                    return Err(MatrixError::NonFiniteEntry { row: i, col: j });
                }
                if value < 0.0 {
                    return Err(MatrixError::NegativeEntry {
                        row: i,
                        col: j,
                        value,
                    });
                }
                sum += value;
            }
            if (sum - 1.0).abs() > ROW_SUM_TOLERANCE {
                return Err(MatrixError::RowNotStochastic { row: i, sum });
            }
        }
        Ok(Self { rows })
    }

    /// Row of next-day probabilities for products currently in `state`
    pub fn row(&self, state: QualityState) -> &[f64; STATE_COUNT] {
        &self.rows[state.index()]
    }

    /// Raw rows (for serialization across the FFI boundary)
    pub fn rows(&self) -> &[[f64; STATE_COUNT]; STATE_COUNT] {
        &self.rows
    }

    /// Identity matrix: every product stays in its current state
    ///
    /// Useful as a boundary case in tests and calibration runs.
    pub fn identity() -> Self {
        let mut rows = [[0.0; STATE_COUNT]; STATE_COUNT];
        for (i, row) in rows.iter_mut().enumerate() {
            row[i] = 1.0;
        }
        Self { rows }
    }
}

impl Default for TransitionMatrix {
    fn default() -> Self {
        // Compile-time constant, known stochastic by inspection
        Self {
            rows: REFERENCE_ROWS,
        }
    }
}
