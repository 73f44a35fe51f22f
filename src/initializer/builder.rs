use parking_lot::Mutex;

use crate::error::{Error, Result};
use crate::rng_util::RandomSource;
use crate::space::SearchSpace;
use crate::types::RandomBounds;
use crate::warm_start::{NearestValue, WarmStartConverter};

use super::Initializer;

/// A builder for constructing [`Initializer`] instances with a fluent API.
///
/// Created via [`Initializer::builder()`].
///
/// # Defaults
///
/// - Random source: entropy-seeded [`fastrand::Rng`]
/// - Warm-start converter: [`NearestValue`]
/// - Random bounds: [`RandomBounds::HalfOpen`]
///
/// # Examples
///
/// ```
/// use init_positions::{Initializer, RandomBounds, SearchSpace};
///
/// let init = Initializer::builder(SearchSpace::from_sizes(&[4, 4]))
///     .seed(7)
///     .random_bounds(RandomBounds::Inclusive)
///     .build()
///     .unwrap();
///
/// assert_eq!(init.random_bounds(), RandomBounds::Inclusive);
/// ```
pub struct InitializerBuilder<R = fastrand::Rng, C = NearestValue> {
    space: SearchSpace,
    bounds: RandomBounds,
    converter: C,
    rng: R,
}

impl InitializerBuilder {
    /// Create a new builder for `space` with default settings.
    #[must_use]
    pub fn new(space: SearchSpace) -> Self {
        Self {
            space,
            bounds: RandomBounds::default(),
            converter: NearestValue,
            rng: fastrand::Rng::new(),
        }
    }
}

impl<C> InitializerBuilder<fastrand::Rng, C> {
    /// Seed the default random source for reproducible output.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = fastrand::Rng::with_seed(seed);
        self
    }
}

impl<R, C> InitializerBuilder<R, C> {
    /// Use `rng` as the random source.
    #[must_use]
    pub fn rng<R2: RandomSource>(self, rng: R2) -> InitializerBuilder<R2, C> {
        InitializerBuilder {
            space: self.space,
            bounds: self.bounds,
            converter: self.converter,
            rng,
        }
    }

    /// Use `converter` to turn warm-start values into positions.
    #[must_use]
    pub fn converter<C2: WarmStartConverter>(self, converter: C2) -> InitializerBuilder<R, C2> {
        InitializerBuilder {
            space: self.space,
            bounds: self.bounds,
            converter,
            rng: self.rng,
        }
    }

    /// Set the range the random strategy draws coordinates from.
    #[must_use]
    pub fn random_bounds(mut self, bounds: RandomBounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Build the [`Initializer`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::EmptySearchSpace`] if the space has no dimensions, or
    /// [`Error::EmptyDimension`] if a dimension has no values.
    pub fn build(self) -> Result<Initializer<R, C>> {
        if self.space.n_dims() == 0 {
            return Err(Error::EmptySearchSpace);
        }
        if let Some(dim) = self.space.dimensions().iter().position(Vec::is_empty) {
            return Err(Error::EmptyDimension { dim });
        }

        let dim_sizes = self.space.dim_sizes();
        trace_info!(n_dims = dim_sizes.len(), "initializer created");

        Ok(Initializer {
            space: self.space,
            dim_sizes,
            bounds: self.bounds,
            converter: self.converter,
            rng: Mutex::new(self.rng),
        })
    }
}
