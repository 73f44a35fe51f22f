#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(unreachable_pub)]
#![deny(clippy::correctness)]
#![deny(clippy::suspicious)]
#![deny(clippy::style)]
#![deny(clippy::complexity)]
#![deny(clippy::perf)]
#![deny(clippy::pedantic)]
#![deny(clippy::std_instead_of_core)]

//! Initial candidate positions for gradient-free optimizers over discrete
//! search spaces. Every dimension of the space is an ordered list of values
//! addressed by index, and a position is one index per dimension.
//!
//! # Getting Started
//!
//! ```
//! use init_positions::prelude::*;
//!
//! let space = SearchSpace::builder()
//!     .range(-5.0, 5.0, 0.5)
//!     .range(0.0, 1.0, 0.1)
//!     .build();
//! let init = Initializer::with_seed(space, 42).unwrap();
//!
//! let request = InitRequest::new()
//!     .grid(4)
//!     .vertices(4)
//!     .random(2)
//!     .warm_start(vec![vec![0.0, 0.5]]);
//! let positions = init.init_positions(&request).unwrap();
//!
//! assert_eq!(positions.len(), 11);
//! assert_eq!(positions[10], vec![10, 5]);
//! ```
//!
//! # Strategies
//!
//! Output is always concatenated in this order, whatever order the request
//! was written in:
//!
//! | Strategy | Produces | Coordinates |
//! |----------|----------|-------------|
//! | [`Random`](Strategy::Random) | Independent uniform positions | `[0, size)` (see [`RandomBounds`]) |
//! | [`Grid`](Strategy::Grid) | `floor(n^(1/d))` interior points per dimension, Cartesian product | `[0, size]` |
//! | [`Vertices`](Strategy::Vertices) | Distinct corners of the hypercube | `0` or `size` |
//! | [`WarmStart`](Strategy::WarmStart) | Caller values mapped by a [`WarmStartConverter`] | converter-defined |
//!
//! `size` is the maximum index of a dimension. Grid and vertex strategies
//! always return exactly the requested count; any shortfall is filled with
//! random positions.
//!
//! # Feature Flags
//!
//! | Flag | What it enables | Default |
//! |------|----------------|---------|
//! | `serde` | `Serialize`/`Deserialize` on [`InitRequest`], [`SearchSpace`], [`Strategy`] and [`RandomBounds`] | off |
//! | `tracing` | Structured log events via [`tracing`](https://docs.rs/tracing) when positions are generated | off |

/// Emit a `tracing::info!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_info {
    ($($arg:tt)*) => { tracing::info!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_info {
    ($($arg:tt)*) => {};
}

/// Emit a `tracing::debug!` event when the `tracing` feature is enabled.
/// No-op otherwise.
#[cfg(feature = "tracing")]
macro_rules! trace_debug {
    ($($arg:tt)*) => { tracing::debug!($($arg)*) };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_debug {
    ($($arg:tt)*) => {};
}

mod error;
mod initializer;
mod request;
mod rng_util;
mod space;
pub mod strategy;
mod types;
mod warm_start;

pub use error::{Error, Result};
pub use initializer::{Initializer, InitializerBuilder};
pub use request::InitRequest;
pub use rng_util::RandomSource;
pub use space::{SearchSpace, SearchSpaceBuilder};
pub use types::{Position, RandomBounds, Strategy};
pub use warm_start::{NearestValue, WarmStartConverter};

/// Convenient wildcard import for the most common types.
///
/// ```
/// use init_positions::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::initializer::{Initializer, InitializerBuilder};
    pub use crate::request::InitRequest;
    pub use crate::rng_util::RandomSource;
    pub use crate::space::SearchSpace;
    pub use crate::types::{Position, RandomBounds, Strategy};
    pub use crate::warm_start::{NearestValue, WarmStartConverter};
}
