//! Core types for the initializer.

use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;

/// An index-tuple into the search space, one coordinate per dimension.
pub type Position = Vec<usize>;

/// A strategy for producing initial positions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Strategy {
    /// Independent uniform random positions.
    Random,
    /// An approximate grid spread evenly through the interior of the space.
    Grid,
    /// Corners of the discretized hypercube.
    Vertices,
    /// Caller-supplied values converted to positions.
    WarmStart,
}

impl Strategy {
    /// The order in which strategies contribute to the output.
    pub const ORDER: [Strategy; 4] = [
        Strategy::Random,
        Strategy::Grid,
        Strategy::Vertices,
        Strategy::WarmStart,
    ];

    /// Returns the request key for this strategy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Strategy::Random => "random",
            Strategy::Grid => "grid",
            Strategy::Vertices => "vertices",
            Strategy::WarmStart => "warm_start",
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Strategy::ORDER
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| Error::UnknownStrategy(s.to_owned()))
    }
}

/// The range the random generator draws each coordinate from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum RandomBounds {
    /// `[0, dimension_size)`: the maximum index of a dimension is never drawn.
    #[default]
    HalfOpen,
    /// `[0, dimension_size]`: every index of a dimension can be drawn.
    Inclusive,
}
