//! Simulation error types
//!
//! All failure handling in this crate is input validation performed once,
//! eagerly, before any simulation state is allocated. Nothing is retried:
//! there is no I/O and no network dependency, so an error here always means
//! the caller supplied bad parameters or a bad configuration.

use crate::models::matrix::MatrixError;
use crate::models::penalty::PenaltyError;
use thiserror::Error;

/// Errors surfaced by the simulation core
#[derive(Debug, Error, PartialEq)]
pub enum SimulationError {
    /// Non-positive or non-finite user parameter (days, products, price)
    ///
    /// Raised synchronously before any state is created; the message is
    /// suitable for showing to the user verbatim.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// Transition matrix failed row-stochasticity validation
    ///
    /// Treated as a configuration defect, not a recoverable condition.
    #[error("invalid transition matrix: {0}")]
    InvalidMatrix(#[from] MatrixError),

    /// Penalty table failed range/monotonicity validation
    #[error("invalid penalty table: {0}")]
    InvalidPenalties(#[from] PenaltyError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::matrix::TransitionMatrix;

    #[test]
    fn test_matrix_error_converts() {
        let mut rows = [[0.0; 5]; 5];
        rows[0][0] = 0.9; // row 0 sums to 0.9, rows 1..4 sum to 0.0
        let err: SimulationError = TransitionMatrix::new(rows).unwrap_err().into();
        assert!(matches!(err, SimulationError::InvalidMatrix(_)));
        assert!(err.to_string().contains("row 0"));
    }

    #[test]
    fn test_invalid_parameter_message() {
        let err = SimulationError::InvalidParameter("days must be > 0".to_string());
        assert_eq!(err.to_string(), "invalid parameter: days must be > 0");
    }
}
