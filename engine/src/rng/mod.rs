//! Deterministic random number generation
//!
//! Uses the xorshift64* algorithm for fast, deterministic random number
//! generation. CRITICAL: all randomness in the simulator MUST go through
//! this module.

mod xorshift;

pub use xorshift::RngManager;

use crate::models::state::{QualityState, STATE_COUNT};

/// Source of next-day state draws
///
/// The transition engine samples through this trait rather than a concrete
/// RNG, so tests can pin transitions (e.g. force every product to stay in
/// its current state) while production code uses [`RngManager`].
pub trait StateSampler {
    /// Draw a next state from a categorical distribution
    ///
    /// `weights` is a row of a validated transition matrix.
    fn sample(&mut self, weights: &[f64; STATE_COUNT]) -> QualityState;
}
