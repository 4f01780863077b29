//! Tests for the end-of-run report and history digest

use quality_simulator_core_rs::{history_digest, RunReport, RunnerConfig, SimulationRunner};

fn completed_runner(seed: u64) -> SimulationRunner {
    let mut runner =
        SimulationRunner::new(RunnerConfig::new(25, 120, 600_000.0).with_seed(seed)).unwrap();
    runner.run_to_completion();
    runner
}

#[test]
fn test_report_reflects_run() {
    let runner = completed_runner(1111);
    let report = runner.report();

    assert_eq!(report.seed, 1111);
    assert_eq!(report.horizon_days, 25);
    assert_eq!(report.days_completed, 25);
    assert_eq!(report.num_products, 120);
    assert_eq!(report.final_counts.iter().sum::<usize>(), 120);
    assert!((report.total_cost - runner.cumulative_cost()).abs() < 1e-12);
    assert_eq!(report.history_digest, history_digest(runner.history()));
}

#[test]
fn test_final_shares_sum_to_one() {
    let report = completed_runner(2222).report();
    let total: f64 = report.final_shares.iter().sum();
    assert!((total - 1.0).abs() < 1e-9);
}

#[test]
fn test_same_seed_same_digest() {
    let a = completed_runner(3333).report();
    let b = completed_runner(3333).report();
    assert_eq!(a.history_digest, b.history_digest);
    assert_eq!(a.total_cost, b.total_cost);
    // run ids are per-run, not per-config
    assert_ne!(a.run_id, b.run_id);
}

#[test]
fn test_different_seed_different_digest() {
    let a = completed_runner(1).report();
    let b = completed_runner(2).report();
    assert_ne!(a.history_digest, b.history_digest);
}

#[test]
fn test_report_json_round_trip() {
    let report = completed_runner(4444).report();
    let json = report.to_json_pretty().unwrap();
    let back: RunReport = serde_json::from_str(&json).unwrap();

    assert_eq!(back.run_id, report.run_id);
    assert_eq!(back.history_digest, report.history_digest);
    assert_eq!(back.final_counts, report.final_counts);
}

#[test]
fn test_report_before_first_step_is_empty() {
    let runner =
        SimulationRunner::new(RunnerConfig::new(10, 30, 300.0).with_seed(5)).unwrap();
    let report = runner.report();

    assert_eq!(report.days_completed, 0);
    assert_eq!(report.final_counts, [0; 5]);
    assert_eq!(report.total_cost, 0.0);
}
