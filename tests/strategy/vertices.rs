use std::collections::{HashMap, HashSet};

use init_positions::Position;
use init_positions::strategy::Generator;

use crate::CountingRng;

fn all_corners(sizes: &[usize]) -> HashSet<Position> {
    (0..1usize << sizes.len())
        .map(|bits| {
            sizes
                .iter()
                .enumerate()
                .map(|(dim, &size)| if (bits >> dim) & 1 == 1 { size } else { 0 })
                .collect()
        })
        .collect()
}

#[test]
fn test_vertices_exact_count() {
    let mut rng = fastrand::Rng::with_seed(42);
    let mut generator = Generator::new(&[3, 3, 3], &mut rng);
    for n in [1, 2, 7, 8, 9, 20] {
        assert_eq!(generator.vertices(n).len(), n, "n = {n}");
    }
}

#[test]
fn test_vertices_all_corners_then_random() {
    let sizes = [4usize, 6, 2];
    let mut rng = fastrand::Rng::with_seed(42);
    let mut generator = Generator::new(&sizes, &mut rng);
    let positions = generator.vertices(12);

    assert_eq!(positions.len(), 12);
    let corners: HashSet<Position> = positions[..8].iter().cloned().collect();
    assert_eq!(corners, all_corners(&sizes));
    for pos in &positions[8..] {
        for (&coord, &size) in pos.iter().zip(&sizes) {
            assert!(coord < size);
        }
    }
}

#[test]
fn test_vertices_subset_is_distinct_corners() {
    let sizes = [5usize, 5, 5, 5];
    let corners = all_corners(&sizes);
    let mut rng = fastrand::Rng::with_seed(11);
    let mut generator = Generator::new(&sizes, &mut rng);

    for n in 1..16 {
        let positions = generator.vertices(n);
        assert_eq!(positions.len(), n);
        assert!(positions.iter().all(|p| corners.contains(p)));
        assert_eq!(positions.iter().collect::<HashSet<_>>().len(), n);
    }
}

#[test]
fn test_vertices_selection_is_uniform() {
    let sizes = [1usize, 1];
    let mut rng = fastrand::Rng::with_seed(99);
    let mut generator = Generator::new(&sizes, &mut rng);

    let n_samples = 4000;
    let mut counts: HashMap<Position, u32> = HashMap::new();
    for _ in 0..n_samples {
        for pos in generator.vertices(1) {
            *counts.entry(pos).or_default() += 1;
        }
    }

    assert_eq!(counts.len(), 4);
    let expected = f64::from(n_samples) / 4.0;
    for (corner, &count) in &counts {
        let diff = (f64::from(count) - expected).abs() / expected;
        assert!(
            diff < 0.15,
            "corner {corner:?} chosen {count} times, expected ~{expected}"
        );
    }
}

#[test]
fn test_vertices_rejection_sampling_is_unbiased() {
    // 2^20 corners is past the enumeration limit
    let sizes = vec![5usize; 20];
    let mut rng = fastrand::Rng::with_seed(1234);
    let mut generator = Generator::new(&sizes, &mut rng);

    let n_runs: u32 = 1000;
    let k = 10usize;
    let mut at_max = vec![0u32; sizes.len()];
    let mut first_at_max = vec![0u32; sizes.len()];
    let mut first_weight = 0usize;
    for _ in 0..n_runs {
        let positions = generator.vertices(k);
        assert_eq!(positions.iter().collect::<HashSet<_>>().len(), k);
        for (i, pos) in positions.iter().enumerate() {
            for (dim, &coord) in pos.iter().enumerate() {
                assert!(coord == 0 || coord == 5);
                if coord == 5 {
                    at_max[dim] += 1;
                    if i == 0 {
                        first_at_max[dim] += 1;
                        first_weight += 1;
                    }
                }
            }
        }
    }

    let expected = f64::from(n_runs) * k as f64 / 2.0;
    for (dim, &count) in at_max.iter().enumerate() {
        let diff = (f64::from(count) - expected).abs() / expected;
        assert!(
            diff < 0.1,
            "dimension {dim} at max {count} times, expected ~{expected}"
        );
    }

    let expected_first = f64::from(n_runs) / 2.0;
    for (dim, &count) in first_at_max.iter().enumerate() {
        let diff = (f64::from(count) - expected_first).abs() / expected_first;
        assert!(
            diff < 0.2,
            "first corner: dimension {dim} at max {count} times, expected ~{expected_first}"
        );
    }

    let mean_weight = first_weight as f64 / f64::from(n_runs);
    assert!(
        (mean_weight - 10.0).abs() < 0.5,
        "first corner has {mean_weight} coordinates at max on average"
    );
}

#[test]
fn test_vertices_zero_draws_nothing() {
    let (mut rng, draws) = CountingRng::new(0);
    let mut generator = Generator::new(&[3, 3, 3], &mut rng);
    assert!(generator.vertices(0).is_empty());
    assert_eq!(draws.get(), 0);
}

#[test]
fn test_vertices_large_dimension_count() {
    let sizes = vec![3usize; 24];
    let mut rng = fastrand::Rng::with_seed(8);
    let mut generator = Generator::new(&sizes, &mut rng);
    let positions = generator.vertices(100);

    assert_eq!(positions.len(), 100);
    assert_eq!(positions.iter().collect::<HashSet<_>>().len(), 100);
    assert!(
        positions
            .iter()
            .all(|p| p.iter().all(|&c| c == 0 || c == 3))
    );
}
