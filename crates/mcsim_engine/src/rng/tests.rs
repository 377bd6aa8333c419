//! Unit tests for the RNG module.
//!
//! This module contains tests verifying:
//! - Seed reproducibility and entropy seed tracking
//! - Distribution properties (uniform range, normal moments)
//! - Stream seed derivation
//! - Replay source behaviour

use super::*;

#[test]
fn test_seed_reproducibility() {
    let mut rng1 = SimRng::from_seed(12345);
    let mut rng2 = SimRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng1.gen_uniform(), rng2.gen_uniform());
    }

    let mut rng3 = SimRng::from_seed(12345);
    let mut rng4 = SimRng::from_seed(12345);

    for _ in 0..100 {
        assert_eq!(rng3.gen_normal(), rng4.gen_normal());
    }
}

#[test]
fn test_entropy_seed_is_replayable() {
    let mut rng = SimRng::from_entropy();
    let mut replay = SimRng::from_seed(rng.seed());

    for _ in 0..10 {
        assert_eq!(rng.gen_normal(), replay.gen_normal());
    }
}

#[test]
fn test_uniform_range() {
    let mut rng = SimRng::from_seed(42);

    for _ in 0..10_000 {
        let value = rng.gen_uniform();
        assert!(value >= 0.0, "Uniform value {} is below 0", value);
        assert!(value < 1.0, "Uniform value {} is >= 1", value);
    }
}

#[test]
fn test_normal_moments() {
    let mut rng = SimRng::from_seed(42);
    let n = 100_000;
    let mut buffer = vec![0.0; n];
    rng.fill_normal(&mut buffer);

    let mean = buffer.iter().sum::<f64>() / n as f64;
    let variance = buffer.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;

    assert!(mean.abs() < 0.02, "Mean {} too far from 0", mean);
    assert!((variance - 1.0).abs() < 0.02, "Variance {} too far from 1", variance);
}

#[test]
fn test_fill_normal_matches_single_draws() {
    let mut batch = SimRng::from_seed(7);
    let mut single = SimRng::from_seed(7);
    let mut buffer = [0.0; 16];
    batch.fill_normal(&mut buffer);

    for &value in &buffer {
        assert_eq!(value, single.gen_normal());
    }
}

#[test]
fn test_fill_normal_empty_buffer() {
    let mut rng = SimRng::from_seed(42);
    let mut buffer: [f64; 0] = [];
    rng.fill_normal(&mut buffer);
}

#[test]
fn test_normal_source_delegates_to_gen_normal() {
    let mut a = SimRng::from_seed(99);
    let mut b = SimRng::from_seed(99);
    assert_eq!(a.next_normal(), b.gen_normal());
}

#[test]
fn test_stream_seeds_are_distinct() {
    let seeds: Vec<u64> = (0..1_000).map(|k| stream_seed(42, k)).collect();
    let mut sorted = seeds.clone();
    sorted.sort_unstable();
    sorted.dedup();
    assert_eq!(sorted.len(), seeds.len());

    assert_ne!(stream_seed(1, 0), stream_seed(2, 0));
    assert_eq!(SimRng::for_stream(42, 3).seed(), stream_seed(42, 3));
}

#[test]
fn test_adjacent_streams_uncorrelated() {
    let n = 20_000;
    let mut a = SimRng::for_stream(42, 0);
    let mut b = SimRng::for_stream(42, 1);

    let cross: f64 = (0..n).map(|_| a.gen_normal() * b.gen_normal()).sum::<f64>() / n as f64;
    assert!(cross.abs() < 0.05, "Streams look correlated: {}", cross);
}

#[test]
fn test_replay_normals_wraps() {
    let values = [0.5, -0.5, 2.0];
    let mut source = ReplayNormals::new(&values);
    let drawn: Vec<f64> = (0..7).map(|_| source.next_normal()).collect();
    assert_eq!(drawn, vec![0.5, -0.5, 2.0, 0.5, -0.5, 2.0, 0.5]);
    assert_eq!(source.drawn(), 7);
}

#[test]
fn test_replay_normals_empty_yields_zero() {
    let mut source = ReplayNormals::new(&[]);
    assert_eq!(source.next_normal(), 0.0);
    assert_eq!(source.next_normal(), 0.0);
}
