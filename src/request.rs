//! Initialization requests.

use crate::types::Strategy;

/// How many initial positions to produce with each strategy.
///
/// Every field is optional. An absent strategy contributes nothing and is
/// never invoked; a strategy set to zero is invoked and produces nothing.
///
/// With the `serde` feature the request reads from a mapping such as
/// `{"random": 2, "vertices": 4, "warm_start": [[0.5, 1.0]]}`.
///
/// # Examples
///
/// ```
/// use init_positions::{InitRequest, Strategy};
///
/// let request = InitRequest::new().random(4).vertices(2);
///
/// assert!(request.requested(Strategy::Random));
/// assert!(!request.requested(Strategy::Grid));
/// assert_eq!(request.n_positions(), 6);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct InitRequest {
    /// Number of uniform random positions.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub random: Option<usize>,
    /// Number of grid positions.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub grid: Option<usize>,
    /// Number of hypercube-vertex positions.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub vertices: Option<usize>,
    /// Warm-start value vectors, one value per dimension.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub warm_start: Option<Vec<Vec<f64>>>,
}

impl InitRequest {
    /// Creates an empty request.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests `n` uniform random positions.
    #[must_use]
    pub fn random(mut self, n: usize) -> Self {
        self.random = Some(n);
        self
    }

    /// Requests `n` grid positions.
    #[must_use]
    pub fn grid(mut self, n: usize) -> Self {
        self.grid = Some(n);
        self
    }

    /// Requests `n` hypercube-vertex positions.
    #[must_use]
    pub fn vertices(mut self, n: usize) -> Self {
        self.vertices = Some(n);
        self
    }

    /// Adds warm-start value vectors.
    #[must_use]
    pub fn warm_start(mut self, values: Vec<Vec<f64>>) -> Self {
        self.warm_start = Some(values);
        self
    }

    /// Returns `true` if `strategy` is present in the request.
    #[must_use]
    pub fn requested(&self, strategy: Strategy) -> bool {
        match strategy {
            Strategy::Random => self.random.is_some(),
            Strategy::Grid => self.grid.is_some(),
            Strategy::Vertices => self.vertices.is_some(),
            Strategy::WarmStart => self.warm_start.is_some(),
        }
    }

    /// Returns `true` if no strategy is present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !Strategy::ORDER.into_iter().any(|s| self.requested(s))
    }

    /// Returns the number of positions the request produces.
    ///
    /// Assumes the warm-start converter emits one position per value vector,
    /// as the default converter does.
    #[must_use]
    pub fn n_positions(&self) -> usize {
        self.random.unwrap_or(0)
            + self.grid.unwrap_or(0)
            + self.vertices.unwrap_or(0)
            + self.warm_start.as_ref().map_or(0, Vec::len)
    }
}
