//! Position generators for each initialization strategy.
//!
//! [`Generator`] borrows a dimension-size vector and a random source and
//! implements the random, grid and vertex strategies on top of them. The grid
//! and vertex strategies top up any shortfall with random positions so they
//! always return the requested count.

pub mod grid;
pub mod random;
pub mod vertices;

use crate::rng_util::RandomSource;
use crate::types::{Position, RandomBounds};

/// Generates positions within a fixed set of dimension sizes.
///
/// `dim_sizes[i]` is the maximum valid index of dimension `i`.
///
/// # Examples
///
/// ```
/// use init_positions::strategy::Generator;
///
/// let mut rng = fastrand::Rng::with_seed(42);
/// let mut generator = Generator::new(&[10, 10], &mut rng);
///
/// assert_eq!(generator.random(3).len(), 3);
/// assert_eq!(generator.grid(4), vec![vec![3, 3], vec![3, 6], vec![6, 3], vec![6, 6]]);
/// ```
pub struct Generator<'a, R: RandomSource + ?Sized> {
    dim_sizes: &'a [usize],
    bounds: RandomBounds,
    rng: &'a mut R,
}

impl<'a, R: RandomSource + ?Sized> Generator<'a, R> {
    /// Creates a generator drawing random coordinates from `[0, dim_sizes[i])`.
    #[must_use]
    pub fn new(dim_sizes: &'a [usize], rng: &'a mut R) -> Self {
        Self {
            dim_sizes,
            bounds: RandomBounds::HalfOpen,
            rng,
        }
    }

    /// Sets the range random coordinates are drawn from.
    #[must_use]
    pub fn bounds(mut self, bounds: RandomBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Returns the dimension sizes this generator works with.
    #[must_use]
    pub fn dim_sizes(&self) -> &[usize] {
        self.dim_sizes
    }

    /// Appends random positions to `positions` until it holds `n` entries.
    ///
    /// Never truncates.
    pub fn fill_rest_random(&mut self, n: usize, mut positions: Vec<Position>) -> Vec<Position> {
        let missing = n.saturating_sub(positions.len());
        if missing > 0 {
            trace_debug!(
                requested = n,
                produced = positions.len(),
                missing,
                "filling shortfall with random positions"
            );
            positions.extend(self.random(missing));
        }
        positions
    }
}
