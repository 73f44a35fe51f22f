//! Discrete search spaces.

use crate::types::Position;

/// An ordered collection of discrete per-dimension domains.
///
/// The generators only look at how many values each dimension holds. The
/// values themselves are used when converting warm starts to positions and
/// positions back to values.
///
/// # Examples
///
/// ```
/// use init_positions::SearchSpace;
///
/// let space = SearchSpace::builder()
///     .range(-1.0, 1.0, 0.5)
///     .dimension(vec![1.0, 10.0, 100.0])
///     .build();
///
/// assert_eq!(space.n_dims(), 2);
/// assert_eq!(space.dim_sizes(), vec![4, 2]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SearchSpace {
    dimensions: Vec<Vec<f64>>,
}

impl SearchSpace {
    /// Creates a search space from one value list per dimension.
    #[must_use]
    pub fn new(dimensions: Vec<Vec<f64>>) -> Self {
        Self { dimensions }
    }

    /// Creates a search space whose dimension `i` holds `0.0, 1.0, ..` up to
    /// `sizes[i] - 1`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn from_sizes(sizes: &[usize]) -> Self {
        let dimensions = sizes
            .iter()
            .map(|&size| (0..size).map(|i| i as f64).collect())
            .collect();
        Self { dimensions }
    }

    /// Creates a builder for assembling a search space dimension by dimension.
    #[must_use]
    pub fn builder() -> SearchSpaceBuilder {
        SearchSpaceBuilder::new()
    }

    /// Returns the number of dimensions.
    #[must_use]
    pub fn n_dims(&self) -> usize {
        self.dimensions.len()
    }

    /// Returns the number of values in dimension `dim`.
    ///
    /// # Panics
    ///
    /// Panics if `dim >= self.n_dims()`.
    #[must_use]
    pub fn dim_len(&self, dim: usize) -> usize {
        self.dimensions[dim].len()
    }

    /// Returns the values of dimension `dim`.
    ///
    /// # Panics
    ///
    /// Panics if `dim >= self.n_dims()`.
    #[must_use]
    pub fn values(&self, dim: usize) -> &[f64] {
        &self.dimensions[dim]
    }

    /// Returns all dimensions in order.
    #[must_use]
    pub fn dimensions(&self) -> &[Vec<f64>] {
        &self.dimensions
    }

    /// Returns the maximum valid index of every dimension (`len - 1`).
    #[must_use]
    pub fn dim_sizes(&self) -> Vec<usize> {
        self.dimensions
            .iter()
            .map(|values| values.len().saturating_sub(1))
            .collect()
    }

    /// Maps positions back to the values they index.
    ///
    /// # Panics
    ///
    /// Panics if a position has more coordinates than the space has
    /// dimensions or a coordinate is out of range.
    #[must_use]
    pub fn positions_to_values(&self, positions: &[Position]) -> Vec<Vec<f64>> {
        positions
            .iter()
            .map(|pos| {
                pos.iter()
                    .zip(&self.dimensions)
                    .map(|(&idx, values)| values[idx])
                    .collect()
            })
            .collect()
    }
}

impl From<Vec<Vec<f64>>> for SearchSpace {
    fn from(dimensions: Vec<Vec<f64>>) -> Self {
        Self::new(dimensions)
    }
}

/// Builder for a [`SearchSpace`].
#[derive(Clone, Debug, Default)]
pub struct SearchSpaceBuilder {
    dimensions: Vec<Vec<f64>>,
}

impl SearchSpaceBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a dimension holding `values`.
    #[must_use]
    pub fn dimension(mut self, values: Vec<f64>) -> Self {
        self.dimensions.push(values);
        self
    }

    /// Appends a dimension holding `low, low + step, ..` up to `high`.
    ///
    /// A non-positive `step` or `low > high` yields the single value `low`.
    #[must_use]
    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    pub fn range(mut self, low: f64, high: f64, step: f64) -> Self {
        let values = if step <= 0.0 || low >= high {
            vec![low]
        } else {
            // Counting steps avoids accumulating rounding error.
            let n_steps = ((high - low) / step + 1e-9).floor() as usize;
            (0..=n_steps).map(|k| low + k as f64 * step).collect()
        };
        self.dimensions.push(values);
        self
    }

    /// Builds the search space.
    #[must_use]
    pub fn build(self) -> SearchSpace {
        SearchSpace {
            dimensions: self.dimensions,
        }
    }
}
