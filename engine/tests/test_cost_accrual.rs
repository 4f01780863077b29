//! Integration tests for cost accrual
//!
//! Tests cover:
//! - Daily penalty and discount formulas
//! - Purity of accrue
//! - Construction-time validation
//! - Conservation: billed + forgiven = cost per day

use quality_simulator_core_rs::{
    CostAccrualTracker, CostTotals, PenaltyTable, QualityState, SimulationError,
};

#[test]
fn test_daily_penalty_formula() {
    // 1,000,000 over 3 days, 100 products: cost_per_day = 333,333.33,
    // per-product share 3,333.33
    let tracker =
        CostAccrualTracker::new(1_000_000.0, 3, 100, PenaltyTable::default()).unwrap();

    let states = vec![QualityState::Excellent; 100];
    let accrual = tracker.accrue(&states);

    assert_eq!(accrual.counts, [100, 0, 0, 0, 0]);
    assert!((accrual.daily_penalty - 1_000_000.0 / 3.0).abs() < 1e-6);
    assert_eq!(accrual.discount_increment, [0.0; 5]);
}

#[test]
fn test_three_days_all_excellent_bills_full_price() {
    let tracker =
        CostAccrualTracker::new(1_000_000.0, 3, 100, PenaltyTable::default()).unwrap();
    let states = vec![QualityState::Excellent; 100];

    let mut totals = CostTotals::default();
    for _ in 0..3 {
        totals.fold(&tracker.accrue(&states));
    }

    assert!((totals.cumulative_cost - 1_000_000.0).abs() < 1e-6);
    assert_eq!(totals.cumulative_discounts, [0.0; 5]);
}

#[test]
fn test_discount_increment_formula() {
    // 100 products, cost_per_day 1000, per-product 10.
    // 40 Defective (factor 0.5): discount 40 * 0.5 * 10 = 200
    let tracker = CostAccrualTracker::new(10_000.0, 10, 100, PenaltyTable::default()).unwrap();

    let mut states = vec![QualityState::Excellent; 60];
    states.extend(vec![QualityState::Defective; 40]);
    let accrual = tracker.accrue(&states);

    assert_eq!(accrual.counts, [60, 0, 0, 40, 0]);
    assert!((accrual.discount_increment[3] - 200.0).abs() < 1e-9);
    let expected_penalty = 60.0 * 10.0 + 40.0 * 0.5 * 10.0;
    assert!((accrual.daily_penalty - expected_penalty).abs() < 1e-9);
}

#[test]
fn test_billed_plus_forgiven_is_cost_per_day() {
    let tracker = CostAccrualTracker::new(50_000.0, 5, 25, PenaltyTable::default()).unwrap();

    let mut states = Vec::new();
    for (index, state) in QualityState::ALL.iter().enumerate() {
        states.extend(vec![*state; index + 3]); // 3+4+5+6+7 = 25 products
    }
    let accrual = tracker.accrue(&states);

    let forgiven: f64 = accrual.discount_increment.iter().sum();
    assert!((accrual.daily_penalty + forgiven - tracker.cost_per_day()).abs() < 1e-6);
}

#[test]
fn test_accrue_is_pure_and_repeatable() {
    let tracker = CostAccrualTracker::new(99_999.0, 7, 33, PenaltyTable::default()).unwrap();
    let states = vec![QualityState::Fair; 33];

    let first = tracker.accrue(&states);
    let second = tracker.accrue(&states);
    assert_eq!(first, second);
}

#[test]
fn test_construction_validation() {
    let table = PenaltyTable::default;

    assert!(matches!(
        CostAccrualTracker::new(1000.0, 0, 10, table()),
        Err(SimulationError::InvalidParameter(_))
    ));
    assert!(matches!(
        CostAccrualTracker::new(1000.0, 10, 0, table()),
        Err(SimulationError::InvalidParameter(_))
    ));
    assert!(matches!(
        CostAccrualTracker::new(0.0, 10, 10, table()),
        Err(SimulationError::InvalidParameter(_))
    ));
    assert!(matches!(
        CostAccrualTracker::new(-1.0, 10, 10, table()),
        Err(SimulationError::InvalidParameter(_))
    ));
}

#[test]
fn test_custom_penalty_table() {
    let penalties = PenaltyTable::new([1.0, 0.8, 0.6, 0.4, 0.2]).unwrap();
    let tracker = CostAccrualTracker::new(1000.0, 1, 5, penalties).unwrap();

    let states = vec![
        QualityState::Excellent,
        QualityState::Good,
        QualityState::Fair,
        QualityState::Defective,
        QualityState::Poor,
    ];
    let accrual = tracker.accrue(&states);

    // per-product 200; factors 1.0 + 0.8 + 0.6 + 0.4 + 0.2 = 3.0
    assert!((accrual.daily_penalty - 600.0).abs() < 1e-9);
    assert!((accrual.discount_increment[4] - 160.0).abs() < 1e-9);
}
