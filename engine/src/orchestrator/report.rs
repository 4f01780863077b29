//! End-of-run report
//!
//! Immutable summary of a run (or of a run cancelled part-way): final
//! occupancy, per-state shares, cumulative discounts, total cost, and a
//! SHA-256 digest of the day-ordered count history. Two runs with the same
//! config and seed produce the same digest, so determinism can be checked
//! without comparing full histories.

use crate::models::state::{OccupancyCounts, STATE_COUNT};
use crate::orchestrator::engine::SimulationRunner;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

/// Summary of a completed (or cancelled) run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunReport {
    /// Identifier of the run that produced this report
    pub run_id: Uuid,

    /// Effective RNG seed (sufficient to replay the run)
    pub seed: u64,

    /// Configured horizon in days
    pub horizon_days: usize,

    /// Days actually emitted (== horizon for a full run)
    pub days_completed: usize,

    /// Number of products in the batch
    pub num_products: usize,

    /// Products per state on the last completed day
    pub final_counts: OccupancyCounts,

    /// `final_counts` as fractions of the batch size
    pub final_shares: [f64; STATE_COUNT],

    /// Per-state discount granted over the run
    pub cumulative_discounts: [f64; STATE_COUNT],

    /// Total cost billed over the run
    pub total_cost: f64,

    /// SHA-256 over the day-ordered occupancy history (hex)
    pub history_digest: String,
}

impl RunReport {
    /// Pretty-printed JSON rendering
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Digest of a day-ordered count history
///
/// Counts are fed as little-endian u64 words in day-major order; the day
/// count itself is folded in first so `[[5,0]]` and `[[5],[0]]`-shaped
/// histories cannot collide.
pub fn history_digest(history: &[OccupancyCounts]) -> String {
    let mut hasher = Sha256::new();
    hasher.update((history.len() as u64).to_le_bytes());
    for counts in history {
        for &count in counts {
            hasher.update((count as u64).to_le_bytes());
        }
    }
    format!("{:x}", hasher.finalize())
}

impl SimulationRunner {
    /// Build the summary for the run so far
    ///
    /// Callable mid-run (summary of the cancelled prefix) or after
    /// completion. With no completed days the counts and shares are zero.
    pub fn report(&self) -> RunReport {
        let final_counts = self.final_counts().unwrap_or([0; STATE_COUNT]);
        let mut final_shares = [0.0; STATE_COUNT];
        for (share, &count) in final_shares.iter_mut().zip(final_counts.iter()) {
            *share = count as f64 / self.num_products() as f64;
        }

        RunReport {
            run_id: self.run_id(),
            seed: self.seed(),
            horizon_days: self.horizon_days(),
            days_completed: self.days_completed(),
            num_products: self.num_products(),
            final_counts,
            final_shares,
            cumulative_discounts: self.cumulative_discounts(),
            total_cost: self.cumulative_cost(),
            history_digest: history_digest(self.history()),
        }
    }
}
