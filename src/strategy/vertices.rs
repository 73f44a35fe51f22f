//! Hypercube-vertex positions.
//!
//! A space with `d` dimensions has `2^d` corners, one per choice of minimum
//! (`0`) or maximum index along every dimension. Corner `c` is identified by
//! its bit pattern: bit `i` set means coordinate `i` sits at its maximum.
//!
//! `min(2^d, n)` corners are chosen uniformly without replacement. Small
//! corner sets are enumerated and partially shuffled. Large ones are sampled
//! by drawing random bit patterns and rejecting repeats, which keeps memory
//! proportional to `n` instead of `2^d`.

use std::collections::HashSet;

use crate::rng_util::{self, RandomSource};
use crate::strategy::Generator;
use crate::types::Position;

/// Corner sets up to this size are always enumerated.
const ENUMERATION_LIMIT: usize = 1 << 16;

impl<R: RandomSource + ?Sized> Generator<'_, R> {
    /// Returns `n` positions: distinct hypercube corners, topped up with random
    /// ones when `n` exceeds the number of corners.
    pub fn vertices(&mut self, n: usize) -> Vec<Position> {
        if n == 0 {
            return Vec::new();
        }

        let n_corners = n_corners(self.dim_sizes.len());
        let k = n_corners.map_or(n, |total| total.min(n));

        let corners = match n_corners {
            Some(total) if total <= ENUMERATION_LIMIT || k.saturating_mul(2) > total => {
                rng_util::partial_shuffle(total, k, &mut *self.rng)
                    .into_iter()
                    .map(|index| self.corner(|dim| (index >> dim) & 1 == 1))
                    .collect()
            }
            _ => self.distinct_random_corners(k),
        };
        trace_debug!(
            requested = n,
            n_corners = ?n_corners,
            selected = corners.len(),
            "vertices selected"
        );

        self.fill_rest_random(n, corners)
    }

    /// Draws `k` corners with pairwise distinct bit patterns.
    ///
    /// Only called when there are more than `2 * k` corners, so each draw is
    /// accepted with probability above one half.
    fn distinct_random_corners(&mut self, k: usize) -> Vec<Position> {
        let n_dims = self.dim_sizes.len();
        let mut seen: HashSet<Vec<bool>> = HashSet::with_capacity(k);
        let mut corners = Vec::with_capacity(k);

        while corners.len() < k {
            let bits: Vec<bool> = (0..n_dims).map(|_| self.rng.below(2) == 1).collect();
            let corner = self.corner(|dim| bits[dim]);
            if seen.insert(bits) {
                corners.push(corner);
            }
        }
        corners
    }

    fn corner(&self, at_max: impl Fn(usize) -> bool) -> Position {
        self.dim_sizes
            .iter()
            .enumerate()
            .map(|(dim, &size)| if at_max(dim) { size } else { 0 })
            .collect()
    }
}

/// Number of corners of a `n_dims`-dimensional hypercube, `None` if `2^n_dims`
/// overflows `usize`.
fn n_corners(n_dims: usize) -> Option<usize> {
    u32::try_from(n_dims)
        .ok()
        .and_then(|shift| 1usize.checked_shl(shift))
}
