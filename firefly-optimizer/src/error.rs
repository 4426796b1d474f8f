//! Error types for the Firefly optimizer.
//!
//! Every variant is a setup-time or caller error. Numeric singularities inside
//! an objective are not errors: they are neutralized to a sentinel fitness at
//! the point of evaluation (see [`crate::objective::SINGULARITY_SENTINEL`]).

use crate::objective::DimensionConstraint;
use thiserror::Error;

/// Errors that can occur while configuring or running a Firefly optimization.
#[derive(Debug, Error)]
pub enum FireflyError {
    /// The problem dimension violates the objective's declared constraint.
    #[error("dimension mismatch for '{function}': expected {expected}, got {got}")]
    DimensionMismatch {
        /// Name of the objective
        function: String,
        /// Constraint declared by the objective
        expected: DimensionConstraint,
        /// Dimension that was requested
        got: usize,
    },

    /// The search domain is empty or not finite.
    #[error("invalid bounds: lower ({lower}) must be finite and < upper ({upper})")]
    InvalidBounds {
        /// The lower bound value
        lower: f64,
        /// The upper bound value
        upper: f64,
    },

    /// Population size is too small (must be >= 1).
    #[error("population size ({pop_size}) must be >= 1")]
    PopulationTooSmall {
        /// The invalid population size
        pop_size: usize,
    },

    /// A numeric configuration value is out of range.
    #[error("invalid {name}: {value} ({reason})")]
    InvalidParameter {
        /// Name of the parameter
        name: &'static str,
        /// The rejected value
        value: f64,
        /// Constraint that was violated
        reason: &'static str,
    },

    /// Population storage would exceed the configured cell budget.
    #[error(
        "population of {population} x {dimension} exceeds the limit of {limit} cells"
    )]
    ResourceExhausted {
        /// Requested population size
        population: usize,
        /// Requested dimension
        dimension: usize,
        /// Maximum number of position cells
        limit: usize,
    },

    /// No objective is registered under this name.
    #[error("unknown objective function '{name}'")]
    UnknownFunction {
        /// The requested name
        name: String,
    },

    /// The per-run worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// Writing a benchmark report failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// A specialized `Result` type for Firefly operations.
pub type Result<T> = std::result::Result<T, FireflyError>;

impl FireflyError {
    /// Returns `true` if the caller asked for something the objective cannot
    /// evaluate (dimension mismatch or unknown function).
    pub fn is_precondition_error(&self) -> bool {
        matches!(
            self,
            FireflyError::DimensionMismatch { .. } | FireflyError::UnknownFunction { .. }
        )
    }

    /// Returns `true` if this is a configuration-related error.
    ///
    /// This includes bounds, population, parameter and resource-limit errors.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            FireflyError::InvalidBounds { .. }
                | FireflyError::PopulationTooSmall { .. }
                | FireflyError::InvalidParameter { .. }
                | FireflyError::ResourceExhausted { .. }
        )
    }
}
