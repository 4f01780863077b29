//! Determinism tests for the seeded RNG
//!
//! Same seed must reproduce the exact draw sequence; this underpins the
//! run-level reproducibility guarantee.

use quality_simulator_core_rs::{QualityState, RngManager, StateSampler, STATE_COUNT};

#[test]
fn test_same_seed_same_sequence() {
    let mut rng1 = RngManager::new(42);
    let mut rng2 = RngManager::new(42);

    for _ in 0..1000 {
        assert_eq!(rng1.next(), rng2.next());
    }
}

#[test]
fn test_different_seeds_diverge() {
    let mut rng1 = RngManager::new(1);
    let mut rng2 = RngManager::new(2);

    let a: Vec<u64> = (0..16).map(|_| rng1.next()).collect();
    let b: Vec<u64> = (0..16).map(|_| rng2.next()).collect();
    assert_ne!(a, b);
}

#[test]
fn test_categorical_sequence_deterministic() {
    let weights = [0.2, 0.2, 0.2, 0.2, 0.2];
    let mut rng1 = RngManager::new(555);
    let mut rng2 = RngManager::new(555);

    let a: Vec<usize> = (0..500).map(|_| rng1.categorical(&weights)).collect();
    let b: Vec<usize> = (0..500).map(|_| rng2.categorical(&weights)).collect();
    assert_eq!(a, b);
}

#[test]
fn test_sampler_trait_matches_categorical() {
    // Drawing through the trait object must consume the same stream as
    // calling categorical directly.
    let weights = [0.6, 0.3, 0.05, 0.03, 0.02];
    let mut direct = RngManager::new(9001);
    let mut via_trait = RngManager::new(9001);
    let sampler: &mut dyn StateSampler = &mut via_trait;

    for _ in 0..200 {
        let expected = QualityState::ALL[direct.categorical(&weights)];
        assert_eq!(sampler.sample(&weights), expected);
    }
}

#[test]
fn test_entropy_seeds_differ_across_constructions() {
    // Not strictly guaranteed, but a collision here would mean the clock
    // returned identical nanosecond readings twice in a row.
    let seeds: Vec<u64> = (0..4)
        .map(|_| {
            std::thread::sleep(std::time::Duration::from_millis(1));
            RngManager::from_entropy().get_state()
        })
        .collect();
    let mut unique = seeds.clone();
    unique.sort_unstable();
    unique.dedup();
    assert!(unique.len() > 1, "entropy seeding produced identical seeds");
}

#[test]
fn test_state_round_trip_reproduces_run() {
    let mut rng = RngManager::new(777);
    let _ = rng.next();
    let _ = rng.next();
    let checkpoint = rng.get_state();

    let tail: Vec<u64> = (0..100).map(|_| rng.next()).collect();
    let mut resumed = RngManager::new(checkpoint);
    let replayed: Vec<u64> = (0..100).map(|_| resumed.next()).collect();
    assert_eq!(tail, replayed);
}

#[test]
fn test_weights_cover_all_states() {
    let mut rng = RngManager::new(31337);
    let weights = [0.2; STATE_COUNT];
    let mut seen = [false; STATE_COUNT];
    for _ in 0..10_000 {
        seen[rng.categorical(&weights)] = true;
    }
    assert!(seen.iter().all(|&s| s), "uniform weights missed a bucket");
}
