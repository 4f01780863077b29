//! Quality state space
//!
//! A product occupies exactly one of five discrete quality states on any
//! given day. The set is fixed at process start and ordered by severity:
//! index 0 is pristine, index 4 is the heaviest degradation.
//!
//! CRITICAL: Every per-state array in the crate (matrix rows, penalty
//! factors, occupancy counts, discount vectors) is indexed by these values.

use serde::{Deserialize, Serialize};

/// Number of quality states in the model
pub const STATE_COUNT: usize = 5;

/// Discrete quality level of a single product
///
/// # Example
/// ```
/// use quality_simulator_core_rs::QualityState;
///
/// let state = QualityState::Excellent;
/// assert_eq!(state.index(), 0);
/// assert_eq!(QualityState::from_index(4), Some(QualityState::Poor));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QualityState {
    Excellent,
    Good,
    Fair,
    Defective,
    Poor,
}

impl QualityState {
    /// All states in severity order (index 0..4)
    pub const ALL: [QualityState; STATE_COUNT] = [
        QualityState::Excellent,
        QualityState::Good,
        QualityState::Fair,
        QualityState::Defective,
        QualityState::Poor,
    ];

    /// Index of this state in severity order
    pub fn index(self) -> usize {
        match self {
            QualityState::Excellent => 0,
            QualityState::Good => 1,
            QualityState::Fair => 2,
            QualityState::Defective => 3,
            QualityState::Poor => 4,
        }
    }

    /// State for a severity index, `None` if out of range
    pub fn from_index(index: usize) -> Option<QualityState> {
        QualityState::ALL.get(index).copied()
    }

    /// Human-readable label (used by renderers)
    pub fn label(self) -> &'static str {
        match self {
            QualityState::Excellent => "Excellent",
            QualityState::Good => "Good",
            QualityState::Fair => "Fair",
            QualityState::Defective => "Defective",
            QualityState::Poor => "Poor",
        }
    }
}

impl std::fmt::Display for QualityState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Per-product state assignment for one day
///
/// One entry per product; entry `i` is product `i`'s current state.
pub type StateVector = Vec<QualityState>;

/// Per-state occupancy counts for one day
///
/// Invariant: entries sum to the number of products.
pub type OccupancyCounts = [usize; STATE_COUNT];

/// Count how many products occupy each state
///
/// # Example
/// ```
/// use quality_simulator_core_rs::models::state::{count_states, QualityState};
///
/// let states = vec![QualityState::Excellent, QualityState::Poor, QualityState::Excellent];
/// assert_eq!(count_states(&states), [2, 0, 0, 0, 1]);
/// ```
pub fn count_states(states: &[QualityState]) -> OccupancyCounts {
    let mut counts = [0usize; STATE_COUNT];
    for state in states {
        counts[state.index()] += 1;
    }
    counts
}
