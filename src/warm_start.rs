//! Conversion of warm-start values into positions.

use crate::error::{Error, Result};
use crate::space::SearchSpace;
use crate::types::Position;

/// Converts caller-supplied parameter values into positions.
///
/// The initializer calls the converter once per warm-start request and appends
/// whatever it returns without further checks.
///
/// Any closure with the matching signature is a converter:
///
/// ```
/// use init_positions::{InitRequest, Initializer, Position, Result, SearchSpace};
///
/// let space = SearchSpace::from_sizes(&[5, 5]);
/// let init = Initializer::builder(space)
///     .converter(|_: &SearchSpace, values: &[Vec<f64>]| -> Result<Vec<Position>> {
///         Ok(values.iter().map(|_| vec![0, 0]).collect())
///     })
///     .build()
///     .unwrap();
///
/// let positions = init
///     .init_positions(&InitRequest::new().warm_start(vec![vec![3.0, 1.0]]))
///     .unwrap();
/// assert_eq!(positions, vec![vec![0, 0]]);
/// ```
pub trait WarmStartConverter {
    /// Converts each value vector in `values` into a position in `space`.
    ///
    /// # Errors
    ///
    /// Returns an error if a value vector cannot be placed in `space`.
    fn convert(&self, space: &SearchSpace, values: &[Vec<f64>]) -> Result<Vec<Position>>;
}

impl<F> WarmStartConverter for F
where
    F: Fn(&SearchSpace, &[Vec<f64>]) -> Result<Vec<Position>>,
{
    fn convert(&self, space: &SearchSpace, values: &[Vec<f64>]) -> Result<Vec<Position>> {
        self(space, values)
    }
}

/// Maps every value to the index of the closest value in its dimension.
///
/// On ties the lower index wins.
///
/// # Examples
///
/// ```
/// use init_positions::{NearestValue, SearchSpace, WarmStartConverter};
///
/// let space = SearchSpace::builder()
///     .range(0.0, 1.0, 0.25)
///     .dimension(vec![1.0, 10.0, 100.0])
///     .build();
///
/// let positions = NearestValue.convert(&space, &[vec![0.6, 80.0]]).unwrap();
/// assert_eq!(positions, vec![vec![2, 2]]);
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestValue;

impl WarmStartConverter for NearestValue {
    fn convert(&self, space: &SearchSpace, values: &[Vec<f64>]) -> Result<Vec<Position>> {
        values
            .iter()
            .enumerate()
            .map(|(index, value)| {
                if value.len() != space.n_dims() {
                    return Err(Error::WarmStartDimensionMismatch {
                        expected: space.n_dims(),
                        got: value.len(),
                        index,
                    });
                }
                value
                    .iter()
                    .zip(space.dimensions())
                    .enumerate()
                    .map(|(dim, (&x, domain))| {
                        if !x.is_finite() {
                            return Err(Error::NonFiniteWarmStart { index, dim });
                        }
                        nearest_index(domain, x).ok_or(Error::EmptyDimension { dim })
                    })
                    .collect::<Result<Position>>()
            })
            .collect()
    }
}

/// Index of the value in `domain` closest to `x`, or `None` for an empty domain.
fn nearest_index(domain: &[f64], x: f64) -> Option<usize> {
    domain
        .iter()
        .map(|v| (v - x).abs())
        .enumerate()
        .min_by(|(_, a), (_, b)| a.total_cmp(b))
        .map(|(i, _)| i)
}
