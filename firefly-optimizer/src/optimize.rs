use crate::{Firefly, FireflyConfig, FireflyReport, ObjectiveDescriptor, Result};

/// Runs Firefly optimization on an objective.
///
/// This is a convenience function that validates `config` against
/// `objective`, runs every generation and returns the report.
///
/// # Arguments
///
/// * `objective` - The objective to minimize, with its domain and dimension rule
/// * `config` - Firefly configuration (use `FireflyConfigBuilder` to construct)
///
/// # Errors
///
/// Returns a precondition or configuration error, before any evaluation, if
/// the run cannot be set up. See [`Firefly::new`].
///
/// # Example
///
/// ```rust
/// use firefly_optimizer::{FireflyConfigBuilder, FireflyError, ObjectiveRegistry, optimize};
///
/// let registry = ObjectiveRegistry::new();
/// let colville = registry.get("colville").unwrap();
/// let config = FireflyConfigBuilder::new().dimension(3).build().unwrap();
///
/// let err = optimize(colville, config).unwrap_err();
/// assert!(matches!(err, FireflyError::DimensionMismatch { got: 3, .. }));
/// ```
pub fn optimize(objective: &ObjectiveDescriptor, config: FireflyConfig) -> Result<FireflyReport> {
    let mut firefly = Firefly::new(objective, config)?;
    firefly.solve()
}
