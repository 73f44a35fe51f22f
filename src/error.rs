#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Returned when the search space has no dimensions.
    #[error("search space must have at least one dimension")]
    EmptySearchSpace,

    /// Returned when a dimension of the search space holds no values.
    #[error("dimension {dim} of the search space has no values")]
    EmptyDimension {
        /// The index of the empty dimension.
        dim: usize,
    },

    /// Returned when a warm-start value vector has the wrong number of entries.
    #[error(
        "warm start dimension mismatch: expected {expected} values but warm start {index} has {got}"
    )]
    WarmStartDimensionMismatch {
        /// The number of dimensions in the search space.
        expected: usize,
        /// The number of values supplied.
        got: usize,
        /// The index of the offending warm start.
        index: usize,
    },

    /// Returned when a warm-start value is NaN or infinite.
    #[error("warm start {index} has a non-finite value in dimension {dim}")]
    NonFiniteWarmStart {
        /// The index of the offending warm start.
        index: usize,
        /// The dimension holding the non-finite value.
        dim: usize,
    },

    /// Returned when a strategy name is not recognized.
    #[error("unknown initialization strategy '{0}'")]
    UnknownStrategy(String),
}

pub type Result<T> = core::result::Result<T, Error>;
