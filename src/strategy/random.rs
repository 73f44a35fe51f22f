//! Uniform random positions.

use crate::rng_util::RandomSource;
use crate::strategy::Generator;
use crate::types::{Position, RandomBounds};

impl<R: RandomSource + ?Sized> Generator<'_, R> {
    /// Returns `n` independent uniform random positions.
    ///
    /// With [`RandomBounds::HalfOpen`] coordinate `i` is drawn from
    /// `[0, dim_sizes[i])`, so the maximum index is never chosen. A dimension
    /// of size 0 has only index 0, which is emitted without a draw.
    pub fn random(&mut self, n: usize) -> Vec<Position> {
        (0..n).map(|_| self.random_position()).collect()
    }

    fn random_position(&mut self) -> Position {
        let bounds = self.bounds;
        let dim_sizes = self.dim_sizes;
        dim_sizes
            .iter()
            .map(|&size| {
                let upper = match bounds {
                    RandomBounds::HalfOpen => size,
                    RandomBounds::Inclusive => size.saturating_add(1),
                };
                if upper == 0 { 0 } else { self.rng.below(upper) }
            })
            .collect()
    }
}
