//! xorshift64* random number generator
//!
//! Fast, high-quality PRNG, deterministic and suitable for simulation.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers. This is CRITICAL for:
//! - Debugging (reproduce an exact run)
//! - Testing (the spec-level determinism property)
//! - Comparing runs (history digests only line up for equal seeds)

use crate::models::state::{QualityState, STATE_COUNT};
use crate::rng::StateSampler;
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};

/// Deterministic random number generator using xorshift64*
///
/// # Example
/// ```
/// use quality_simulator_core_rs::RngManager;
///
/// let mut rng = RngManager::new(12345);
/// let value = rng.next();
/// let unit = rng.next_f64(); // [0.0, 1.0)
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RngManager {
    /// Internal state (64-bit)
    state: u64,
}

impl RngManager {
    /// Create a new RNG with given seed
    ///
    /// A zero seed is coerced to 1 (xorshift requirement).
    pub fn new(seed: u64) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Create a new RNG seeded from the system clock
    ///
    /// Used when the caller did not fix a seed: repeated runs differ.
    /// Pair with [`RngManager::get_state`] immediately after construction
    /// if the effective seed needs to be recorded for replay.
    pub fn from_entropy() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(1);
        Self::new(nanos)
    }

    /// Generate next random u64 value
    pub fn next(&mut self) -> u64 {
        // xorshift64* algorithm
        let mut x = self.state;
        x ^= x >> 12;
        x ^= x << 25;
        x ^= x >> 27;
        self.state = x;
        x.wrapping_mul(0x2545F4914F6CDD1D)
    }

    /// Generate random f64 in range [0.0, 1.0)
    pub fn next_f64(&mut self) -> f64 {
        let value = self.next();
        (value >> 11) as f64 * (1.0 / ((1u64 << 53) as f64))
    }

    /// Get current RNG state (doubles as the effective seed for replay)
    pub fn get_state(&self) -> u64 {
        self.state
    }

    /// Draw an index from a categorical distribution
    ///
    /// `weights` is a validated transition-matrix row: non-negative entries
    /// summing to 1 within tolerance. Inverse-CDF draw; the final bucket
    /// absorbs any floating-point shortfall in the accumulated sum.
    pub fn categorical(&mut self, weights: &[f64; STATE_COUNT]) -> usize {
        let draw = self.next_f64();
        let mut cumulative = 0.0;
        for (index, weight) in weights.iter().enumerate() {
            cumulative += weight;
            if draw < cumulative {
                return index;
            }
        }
        STATE_COUNT - 1
    }
}

impl StateSampler for RngManager {
    fn sample(&mut self, weights: &[f64; STATE_COUNT]) -> QualityState {
        // Index is always < STATE_COUNT by construction
        QualityState::ALL[self.categorical(weights)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_converted_to_nonzero() {
        let rng = RngManager::new(0);
        assert_ne!(rng.get_state(), 0, "Zero seed should be converted to 1");
    }

    #[test]
    fn test_next_f64_in_range() {
        let mut rng = RngManager::new(12345);

        for _ in 0..1000 {
            let val = rng.next_f64();
            assert!(
                (0.0..1.0).contains(&val),
                "next_f64() produced value {} outside [0.0, 1.0)",
                val
            );
        }
    }

    #[test]
    fn test_next_f64_deterministic() {
        let mut rng1 = RngManager::new(99999);
        let mut rng2 = RngManager::new(99999);

        for _ in 0..100 {
            assert_eq!(rng1.next_f64(), rng2.next_f64());
        }
    }

    #[test]
    fn test_categorical_degenerate_row() {
        let mut rng = RngManager::new(42);
        let weights = [0.0, 0.0, 1.0, 0.0, 0.0];
        for _ in 0..100 {
            assert_eq!(rng.categorical(&weights), 2);
        }
    }

    #[test]
    fn test_categorical_never_out_of_range() {
        let mut rng = RngManager::new(7);
        let weights = [0.2; STATE_COUNT];
        for _ in 0..10_000 {
            assert!(rng.categorical(&weights) < STATE_COUNT);
        }
    }

    #[test]
    fn test_categorical_roughly_matches_weights() {
        let mut rng = RngManager::new(2024);
        let weights = [0.6, 0.3, 0.05, 0.03, 0.02];
        let mut hits = [0usize; STATE_COUNT];
        let draws = 100_000;
        for _ in 0..draws {
            hits[rng.categorical(&weights)] += 1;
        }
        for (index, &weight) in weights.iter().enumerate() {
            let observed = hits[index] as f64 / draws as f64;
            assert!(
                (observed - weight).abs() < 0.01,
                "bucket {}: observed {} vs expected {}",
                index,
                observed,
                weight
            );
        }
    }
}
