//! Per-day snapshot record
//!
//! One snapshot is produced per simulated day and handed to the rendering
//! collaborator. It is immutable after creation; the runner keeps its own
//! history of counts, so consumers may discard snapshots freely.

use crate::models::state::{OccupancyCounts, STATE_COUNT};
use serde::{Deserialize, Serialize};

/// Immutable record of one simulated day
///
/// # Invariants
///
/// - `counts` sums to the number of products
/// - `cumulative_cost` and every `cumulative_discounts` entry are
///   non-decreasing across consecutive snapshots of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySnapshot {
    /// Day index, 0-based
    pub day: usize,

    /// Products per state at the end of this day
    pub counts: OccupancyCounts,

    /// Monetary penalty billed for this day
    pub daily_penalty: f64,

    /// Total cost billed through this day
    pub cumulative_cost: f64,

    /// Per-state discount granted through this day
    pub cumulative_discounts: [f64; STATE_COUNT],
}

impl DailySnapshot {
    /// Total products covered by this snapshot
    pub fn total_products(&self) -> usize {
        self.counts.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_products() {
        let snapshot = DailySnapshot {
            day: 3,
            counts: [10, 5, 3, 1, 1],
            daily_penalty: 100.0,
            cumulative_cost: 400.0,
            cumulative_discounts: [0.0; STATE_COUNT],
        };
        assert_eq!(snapshot.total_products(), 20);
    }

    #[test]
    fn test_snapshot_json_round_trip() {
        let snapshot = DailySnapshot {
            day: 0,
            counts: [100, 0, 0, 0, 0],
            daily_penalty: 333333.33,
            cumulative_cost: 333333.33,
            cumulative_discounts: [0.0; STATE_COUNT],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        let back: DailySnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
