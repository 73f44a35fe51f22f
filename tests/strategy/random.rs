use init_positions::RandomBounds;
use init_positions::strategy::Generator;

use crate::{CountingRng, MaxRng};

#[test]
fn test_random_exact_count() {
    let mut rng = fastrand::Rng::with_seed(42);
    let mut generator = Generator::new(&[9, 4, 1], &mut rng);
    for n in [0, 1, 2, 17, 100] {
        assert_eq!(generator.random(n).len(), n);
    }
}

#[test]
fn test_random_half_open_range() {
    let mut rng = fastrand::Rng::with_seed(123);
    let sizes = [5usize, 2, 8];
    let mut generator = Generator::new(&sizes, &mut rng);

    let mut seen_top = [false; 3];
    for pos in generator.random(2000) {
        for (dim, (&coord, &size)) in pos.iter().zip(&sizes).enumerate() {
            assert!(coord < size, "coordinate {coord} reached size {size}");
            if coord == size - 1 {
                seen_top[dim] = true;
            }
        }
    }
    assert_eq!(seen_top, [true; 3]);
}

#[test]
fn test_random_roughly_uniform() {
    let mut rng = fastrand::Rng::with_seed(7);
    let mut generator = Generator::new(&[10], &mut rng);

    let n_samples = 5000;
    let mut counts = [0u32; 10];
    for pos in generator.random(n_samples) {
        counts[pos[0]] += 1;
    }

    let expected = n_samples as f64 / 10.0;
    for (value, &count) in counts.iter().enumerate() {
        let diff = (f64::from(count) - expected).abs() / expected;
        assert!(
            diff < 0.2,
            "index {value} appeared {count} times, expected ~{expected}"
        );
    }
}

#[test]
fn test_random_draws_one_value_per_dimension() {
    let (mut rng, draws) = CountingRng::new(1);
    let mut generator = Generator::new(&[3, 3, 3, 3], &mut rng);
    let _ = generator.random(5);
    assert_eq!(draws.get(), 20);
}

#[test]
fn test_random_zero_draws_nothing() {
    let (mut rng, draws) = CountingRng::new(1);
    let mut generator = Generator::new(&[3, 3], &mut rng);
    assert!(generator.random(0).is_empty());
    assert_eq!(draws.get(), 0);
}

#[test]
fn test_random_largest_draw_is_below_max_index() {
    let mut rng = MaxRng;
    let mut generator = Generator::new(&[6, 2], &mut rng);
    assert_eq!(generator.random(1), vec![vec![5, 1]]);
}

#[test]
fn test_random_inclusive_largest_draw_is_max_index() {
    let mut rng = MaxRng;
    let mut generator = Generator::new(&[6, 2], &mut rng).bounds(RandomBounds::Inclusive);
    assert_eq!(generator.random(1), vec![vec![6, 2]]);
}
