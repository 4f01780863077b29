//! Transition engine
//!
//! Advances each product's quality state by one day using weighted random
//! sampling over the rows of a validated transition matrix. Transitions are
//! first-order Markov: each product's draw depends only on its current
//! state, and products are mutually independent.
//!
//! The engine holds no mutable state of its own. The state vector is owned
//! by the caller and passed in by reference; the randomness source comes in
//! through the [`StateSampler`] seam so tests can pin transitions.

use crate::error::SimulationError;
use crate::models::matrix::TransitionMatrix;
use crate::models::state::{QualityState, StateVector};
use crate::rng::StateSampler;

/// Per-product Markov state advancement
///
/// # Example
/// ```
/// use quality_simulator_core_rs::{RngManager, TransitionEngine, TransitionMatrix};
///
/// let engine = TransitionEngine::new(TransitionMatrix::default());
/// let day0 = engine.initialize(10).unwrap();
///
/// let mut rng = RngManager::new(42);
/// let day1 = engine.step(&day0, &mut rng);
/// assert_eq!(day1.len(), 10);
/// ```
#[derive(Debug, Clone)]
pub struct TransitionEngine {
    matrix: TransitionMatrix,
}

impl TransitionEngine {
    /// Create an engine over a validated matrix
    pub fn new(matrix: TransitionMatrix) -> Self {
        Self { matrix }
    }

    /// The matrix this engine samples from
    pub fn matrix(&self) -> &TransitionMatrix {
        &self.matrix
    }

    /// Day-0 state vector: every product starts Excellent
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidParameter`] if `num_products` is zero.
    pub fn initialize(&self, num_products: usize) -> Result<StateVector, SimulationError> {
        if num_products == 0 {
            return Err(SimulationError::InvalidParameter(
                "number of products must be a positive integer".to_string(),
            ));
        }
        Ok(vec![QualityState::Excellent; num_products])
    }

    /// Advance every product by one day
    ///
    /// Each product draws its next state from the matrix row indexed by its
    /// current state. Draws are independent and consume the sampler in
    /// product order, so a fixed seed reproduces the run exactly.
    pub fn step(&self, previous: &StateVector, sampler: &mut dyn StateSampler) -> StateVector {
        previous
            .iter()
            .map(|&state| sampler.sample(self.matrix.row(state)))
            .collect()
    }
}
