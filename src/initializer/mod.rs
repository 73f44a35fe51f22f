//! The position initializer: dispatches an [`InitRequest`] to the strategies.

use parking_lot::Mutex;

use crate::error::Result;
use crate::request::InitRequest;
use crate::rng_util::RandomSource;
use crate::space::SearchSpace;
use crate::strategy::Generator;
use crate::types::{Position, RandomBounds, Strategy};
use crate::warm_start::{NearestValue, WarmStartConverter};

mod builder;

pub use builder::InitializerBuilder;

/// Produces initial positions for an optimizer over one search space.
///
/// The initializer is built once per search space. Each call to
/// [`init_positions`](Self::init_positions) runs the requested strategies in
/// the fixed order of [`Strategy::ORDER`] (random, grid, vertices, warm start)
/// and concatenates their output.
///
/// Generation methods take `&self`; the random source lives behind a mutex,
/// so an initializer can be shared between threads when `R: Send`.
///
/// # Examples
///
/// ```
/// use init_positions::{InitRequest, Initializer, SearchSpace};
///
/// let space = SearchSpace::from_sizes(&[11, 11]);
/// let init = Initializer::with_seed(space, 42).unwrap();
///
/// let request = InitRequest::new().grid(4).vertices(4).random(2);
/// let positions = init.init_positions(&request).unwrap();
///
/// assert_eq!(positions.len(), 10);
/// // random first, then the grid
/// assert_eq!(&positions[2..6], &[vec![3, 3], vec![3, 6], vec![6, 3], vec![6, 6]]);
/// ```
pub struct Initializer<R = fastrand::Rng, C = NearestValue> {
    /// The search space positions index into.
    space: SearchSpace,
    /// Maximum valid index of every dimension.
    dim_sizes: Vec<usize>,
    /// Range of the random strategy.
    bounds: RandomBounds,
    /// Converts warm-start values to positions.
    converter: C,
    /// Source of every random draw.
    rng: Mutex<R>,
}

impl Initializer {
    /// Creates an initializer with an entropy-seeded random source.
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySearchSpace`](crate::Error::EmptySearchSpace) if
    /// the space has no dimensions, or
    /// [`Error::EmptyDimension`](crate::Error::EmptyDimension) if a dimension
    /// has no values.
    pub fn new(space: SearchSpace) -> Result<Self> {
        InitializerBuilder::new(space).build()
    }

    /// Creates an initializer with a fixed seed for reproducibility.
    ///
    /// # Errors
    ///
    /// Same as [`new`](Self::new).
    pub fn with_seed(space: SearchSpace, seed: u64) -> Result<Self> {
        InitializerBuilder::new(space).seed(seed).build()
    }

    /// Creates a builder for configuring an initializer.
    #[must_use]
    pub fn builder(space: SearchSpace) -> InitializerBuilder {
        InitializerBuilder::new(space)
    }
}

impl<R: RandomSource, C: WarmStartConverter> Initializer<R, C> {
    /// Returns the search space.
    #[must_use]
    pub fn space(&self) -> &SearchSpace {
        &self.space
    }

    /// Returns the maximum valid index of every dimension.
    #[must_use]
    pub fn dim_sizes(&self) -> &[usize] {
        &self.dim_sizes
    }

    /// Returns the range the random strategy draws from.
    #[must_use]
    pub fn random_bounds(&self) -> RandomBounds {
        self.bounds
    }

    /// Runs every strategy present in `request` and concatenates the results
    /// in [`Strategy::ORDER`].
    ///
    /// Strategies absent from the request are not invoked at all.
    ///
    /// # Errors
    ///
    /// Returns the warm-start converter's error if the warm-start values
    /// cannot be converted. The values are converted before any random draw,
    /// so a failed call leaves the random source untouched.
    pub fn init_positions(&self, request: &InitRequest) -> Result<Vec<Position>> {
        let mut warm = request
            .warm_start
            .as_deref()
            .map(|values| self.warm_start(values))
            .transpose()?;
        let mut positions = Vec::with_capacity(request.n_positions());

        for strategy in Strategy::ORDER {
            let produced = match strategy {
                Strategy::Random => match request.random {
                    Some(n) => self.random(n),
                    None => continue,
                },
                Strategy::Grid => match request.grid {
                    Some(n) => self.grid(n),
                    None => continue,
                },
                Strategy::Vertices => match request.vertices {
                    Some(n) => self.vertices(n),
                    None => continue,
                },
                Strategy::WarmStart => match warm.take() {
                    Some(converted) => converted,
                    None => continue,
                },
            };
            trace_debug!(%strategy, count = produced.len(), "strategy produced positions");
            positions.extend(produced);
        }

        trace_info!(count = positions.len(), "initial positions ready");
        Ok(positions)
    }

    /// Returns `n` uniform random positions.
    #[must_use]
    pub fn random(&self, n: usize) -> Vec<Position> {
        self.with_generator(|generator| generator.random(n))
    }

    /// Returns `n` approximate grid positions, topped up randomly.
    #[must_use]
    pub fn grid(&self, n: usize) -> Vec<Position> {
        self.with_generator(|generator| generator.grid(n))
    }

    /// Returns `n` positions starting with distinct hypercube corners, topped
    /// up randomly.
    #[must_use]
    pub fn vertices(&self, n: usize) -> Vec<Position> {
        self.with_generator(|generator| generator.vertices(n))
    }

    /// Converts warm-start values to positions with the configured converter.
    ///
    /// # Errors
    ///
    /// Returns the converter's error.
    pub fn warm_start(&self, values: &[Vec<f64>]) -> Result<Vec<Position>> {
        self.converter.convert(&self.space, values)
    }

    fn with_generator<T>(&self, f: impl FnOnce(&mut Generator<'_, R>) -> T) -> T {
        let mut rng = self.rng.lock();
        let mut generator = Generator::new(&self.dim_sizes, &mut *rng).bounds(self.bounds);
        f(&mut generator)
    }
}
