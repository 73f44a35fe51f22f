//! Approximate grid positions.
//!
//! The grid places `p = floor(n^(1/d))` points along every dimension, spaced
//! `floor(size / (p + 1))` apart and never touching either boundary, then takes
//! the Cartesian product, sweeping the last dimension slowest and dimension 1
//! fastest. The product can be smaller than `n` (it is `p^d` at most, and
//! empty when `p == 0`); the shortfall is filled randomly. When a
//! dimension is too small for its spacing the points collapse onto the same
//! coordinate and the grid contains duplicate positions.

use crate::rng_util::RandomSource;
use crate::strategy::Generator;
use crate::types::Position;

impl<R: RandomSource + ?Sized> Generator<'_, R> {
    /// Returns `n` positions: the interior grid, topped up with random ones.
    pub fn grid(&mut self, n: usize) -> Vec<Position> {
        if n == 0 {
            return Vec::new();
        }

        let p = points_per_dim(n, self.dim_sizes.len());
        let axes: Vec<Vec<usize>> = self
            .dim_sizes
            .iter()
            .map(|&size| axis_points(size, p))
            .collect();
        let positions = cartesian_product(&axes);
        trace_debug!(
            requested = n,
            points_per_dim = p,
            grid_size = positions.len(),
            "grid built"
        );

        self.fill_rest_random(n, positions)
    }
}

/// Number of grid points per dimension, `floor(n^(1/d))`.
///
/// Computed in floating point, so exact powers can round down (for example
/// `64^(1/3)` evaluates just below 4).
///
/// # Examples
///
/// ```
/// use init_positions::strategy::grid::points_per_dim;
///
/// assert_eq!(points_per_dim(4, 2), 2);
/// assert_eq!(points_per_dim(10, 2), 3);
/// assert_eq!(points_per_dim(3, 4), 1);
/// ```
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss
)]
pub fn points_per_dim(n: usize, n_dims: usize) -> usize {
    if n_dims == 0 {
        return 0;
    }
    (n as f64).powf(1.0 / n_dims as f64).floor() as usize
}

/// The `p` evenly spaced interior points `step, 2*step, .., p*step` of a
/// dimension with maximum index `size`, where `step = floor(size / (p + 1))`.
///
/// # Examples
///
/// ```
/// use init_positions::strategy::grid::axis_points;
///
/// assert_eq!(axis_points(10, 2), vec![3, 6]);
/// assert_eq!(axis_points(2, 3), vec![0, 0, 0]);
/// assert!(axis_points(10, 0).is_empty());
/// ```
#[must_use]
pub fn axis_points(size: usize, p: usize) -> Vec<usize> {
    let step = size / p.saturating_add(1);
    (1..=p).map(|k| k * step).collect()
}

/// Order in which the grid sweeps its dimensions, slowest first.
///
/// The last dimension varies slowest, then the others down to dimension 2,
/// then dimension 0, with dimension 1 fastest. With one or two dimensions this
/// is plain lexicographic order.
fn sweep_order(n_dims: usize) -> Vec<usize> {
    if n_dims < 2 {
        return (0..n_dims).collect();
    }
    (2..n_dims).rev().chain([0, 1]).collect()
}

/// Cartesian product of `axes` in [`sweep_order`], each coordinate written to
/// its own dimension.
///
/// Empty if any axis is empty.
pub(crate) fn cartesian_product(axes: &[Vec<usize>]) -> Vec<Position> {
    let mut product: Vec<Position> = vec![vec![0; axes.len()]];
    for dim in sweep_order(axes.len()) {
        product = product
            .iter()
            .flat_map(|prefix| {
                axes[dim].iter().map(move |&coord| {
                    let mut pos = prefix.clone();
                    pos[dim] = coord;
                    pos
                })
            })
            .collect();
    }
    product
}
