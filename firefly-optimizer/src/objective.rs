//! Objective oracle contract.
//!
//! An objective maps a position to a scalar fitness (lower is better). The
//! [`ObjectiveDescriptor`] wraps it with the static metadata the engine needs:
//! a name, a dimension constraint and a box domain. Descriptors are immutable
//! and cheap to clone, so one descriptor can be shared read-only by many
//! concurrent runs.

use crate::error::{FireflyError, Result};
use ndarray::Array1;
use std::fmt;
use std::sync::Arc;

pub use firefly_test_functions::DimensionConstraint;
use firefly_test_functions::FunctionMetadata;

/// Fitness substituted for NaN or `+inf` results.
///
/// It is finite, so strict-less-than comparisons against it stay meaningful,
/// and it is never mistaken for an improvement.
pub const SINGULARITY_SENTINEL: f64 = f64::MAX;

/// Dimension used for objectives that accept more than one size.
pub const DEFAULT_DIMENSION: usize = 30;

/// A pure evaluation capability.
pub trait Objective: Send + Sync {
    /// Evaluates the objective at `x`.
    fn evaluate(&self, x: &Array1<f64>) -> f64;

    /// Whether two evaluations of the same point always agree.
    ///
    /// Callers must not assume repeatability unless this returns `true`.
    fn is_deterministic(&self) -> bool {
        true
    }
}

impl Objective for fn(&Array1<f64>) -> f64 {
    fn evaluate(&self, x: &Array1<f64>) -> f64 {
        self(x)
    }
}

/// Adapter turning a closure into an [`Objective`].
pub struct FnObjective<F> {
    f: F,
    deterministic: bool,
}

impl<F> FnObjective<F>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync,
{
    /// Wraps a deterministic closure.
    pub fn new(f: F) -> Self {
        Self {
            f,
            deterministic: true,
        }
    }

    /// Marks the closure as returning noisy values.
    pub fn noisy(mut self) -> Self {
        self.deterministic = false;
        self
    }
}

impl<F> Objective for FnObjective<F>
where
    F: Fn(&Array1<f64>) -> f64 + Send + Sync,
{
    fn evaluate(&self, x: &Array1<f64>) -> f64 {
        (self.f)(x)
    }

    fn is_deterministic(&self) -> bool {
        self.deterministic
    }
}

/// Static metadata plus the evaluation capability of one objective.
#[derive(Clone)]
pub struct ObjectiveDescriptor {
    name: String,
    label: Option<String>,
    dimension: DimensionConstraint,
    lower: f64,
    upper: f64,
    default_dimension: usize,
    singularity: Option<String>,
    objective: Arc<dyn Objective>,
}

impl ObjectiveDescriptor {
    /// Creates a descriptor for `objective` over the box `[lower, upper]^d`.
    ///
    /// # Errors
    ///
    /// Returns `FireflyError::InvalidBounds` if the bounds are not finite or
    /// `lower >= upper`.
    pub fn new<O>(
        name: impl Into<String>,
        dimension: DimensionConstraint,
        bounds: (f64, f64),
        objective: O,
    ) -> Result<Self>
    where
        O: Objective + 'static,
    {
        let (lower, upper) = bounds;
        validate_bounds(lower, upper)?;
        Ok(Self {
            name: name.into(),
            label: None,
            dimension,
            lower,
            upper,
            default_dimension: default_dimension_for(dimension),
            singularity: None,
            objective: Arc::new(objective),
        })
    }

    /// Builds a descriptor from a catalogue entry.
    pub fn from_metadata(meta: &FunctionMetadata) -> Self {
        Self {
            name: meta.name.clone(),
            label: Some(meta.label.clone()),
            dimension: meta.dimension,
            lower: meta.bounds.0,
            upper: meta.bounds.1,
            default_dimension: meta.default_dimension,
            singularity: meta.singularity.clone(),
            objective: Arc::new(CatalogueObjective {
                function: meta.function,
                deterministic: meta.deterministic,
            }),
        }
    }

    /// Returns a copy searching over `[lower, upper]` instead.
    ///
    /// # Errors
    ///
    /// Returns `FireflyError::InvalidBounds` for an empty or non-finite box.
    pub fn with_bounds(&self, lower: f64, upper: f64) -> Result<Self> {
        validate_bounds(lower, upper)?;
        Ok(Self {
            lower,
            upper,
            ..self.clone()
        })
    }

    /// Sets the human readable name printed in benchmark tables.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the dimension used when a run does not specify one.
    ///
    /// A value the dimension constraint rejects makes runs without an
    /// explicit dimension fail with `FireflyError::DimensionMismatch`.
    pub fn with_default_dimension(mut self, d: usize) -> Self {
        self.default_dimension = d;
        self
    }

    /// Documents how the objective resolves numeric singularities.
    pub fn with_singularity_note(mut self, note: impl Into<String>) -> Self {
        self.singularity = Some(note.into());
        self
    }

    /// Objective name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human readable name; falls back to [`name`](Self::name).
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.name)
    }

    /// Declared dimension constraint.
    pub fn dimension(&self) -> DimensionConstraint {
        self.dimension
    }

    /// Dimension used when the caller does not choose one.
    pub fn default_dimension(&self) -> usize {
        self.default_dimension
    }

    /// Search domain `(lower, upper)`, applied to every coordinate.
    pub fn bounds(&self) -> (f64, f64) {
        (self.lower, self.upper)
    }

    /// How the objective resolves singularities, if it documents any.
    pub fn singularity(&self) -> Option<&str> {
        self.singularity.as_deref()
    }

    /// Whether repeated evaluations of a point agree.
    pub fn is_deterministic(&self) -> bool {
        self.objective.is_deterministic()
    }

    /// Checks that positions of length `d` can be evaluated.
    ///
    /// # Errors
    ///
    /// Returns `FireflyError::DimensionMismatch` naming the function and its
    /// constraint.
    pub fn check_dimension(&self, d: usize) -> Result<()> {
        if self.dimension.accepts(d) {
            Ok(())
        } else {
            Err(FireflyError::DimensionMismatch {
                function: self.name.clone(),
                expected: self.dimension,
                got: d,
            })
        }
    }

    /// Evaluates `x`, replacing NaN and `+inf` with [`SINGULARITY_SENTINEL`].
    ///
    /// The length of `x` is not checked here; the engine validates the
    /// dimension once before any evaluation. Use [`Self::try_evaluate`] for
    /// one-off calls.
    pub fn evaluate(&self, x: &Array1<f64>) -> f64 {
        neutralize(self.objective.evaluate(x))
    }

    /// Checks the dimension of `x`, then evaluates it.
    pub fn try_evaluate(&self, x: &Array1<f64>) -> Result<f64> {
        self.check_dimension(x.len())?;
        Ok(self.evaluate(x))
    }
}

impl fmt::Debug for ObjectiveDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObjectiveDescriptor")
            .field("name", &self.name)
            .field("label", &self.label())
            .field("dimension", &self.dimension)
            .field("bounds", &(self.lower, self.upper))
            .field("default_dimension", &self.default_dimension)
            .field("deterministic", &self.is_deterministic())
            .finish()
    }
}

struct CatalogueObjective {
    function: fn(&Array1<f64>) -> f64,
    deterministic: bool,
}

impl Objective for CatalogueObjective {
    fn evaluate(&self, x: &Array1<f64>) -> f64 {
        (self.function)(x)
    }

    fn is_deterministic(&self) -> bool {
        self.deterministic
    }
}

fn default_dimension_for(constraint: DimensionConstraint) -> usize {
    match constraint {
        DimensionConstraint::Exact(n) => n,
        DimensionConstraint::MultipleOf(n) if n > 0 => DEFAULT_DIMENSION.div_ceil(n) * n,
        other => DEFAULT_DIMENSION.max(other.smallest()),
    }
}

fn neutralize(v: f64) -> f64 {
    if v.is_nan() || v == f64::INFINITY {
        SINGULARITY_SENTINEL
    } else {
        v
    }
}

fn validate_bounds(lower: f64, upper: f64) -> Result<()> {
    if lower.is_finite() && upper.is_finite() && lower < upper {
        Ok(())
    } else {
        Err(FireflyError::InvalidBounds { lower, upper })
    }
}
