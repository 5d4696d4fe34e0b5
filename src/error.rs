//! Error types for the simulation library.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Lower bound is not strictly below the upper bound.
    #[error("invalid bounds: lower {lower} must be strictly less than upper {upper}")]
    InvalidBounds { lower: f64, upper: f64 },

    /// Percentile pair out of (0, 1) or out of order.
    #[error("invalid probability: {0}")]
    InvalidProbability(String),

    /// Log-normal fits need strictly positive bounds.
    #[error("log-normal bounds must be positive, got lower {0}")]
    NonPositiveBound(f64),

    #[error("non-finite input: {0}")]
    NonFinite(&'static str),

    #[error("empty sample")]
    EmptySample,

    /// Parameter rejected by `rand_distr`.
    #[error("distribution error: {0}")]
    Distribution(String),
}

pub type Result<T> = std::result::Result<T, Error>;
