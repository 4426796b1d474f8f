#![doc = include_str!("../README.md")]

use ndarray::Array1;
use std::collections::HashMap;
use std::fmt;

pub mod functions;
pub use functions::*;

/// Signature shared by every formula in the catalogue.
pub type TestFunction = fn(&Array1<f64>) -> f64;

/// Which problem dimensions a formula accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DimensionConstraint {
    /// Any dimension >= 1.
    Any,
    /// Exactly this many variables.
    Exact(usize),
    /// A positive multiple of this block size.
    MultipleOf(usize),
    /// At least this many variables.
    AtLeast(usize),
}

impl DimensionConstraint {
    /// Returns `true` if a position of length `d` satisfies the constraint.
    pub fn accepts(&self, d: usize) -> bool {
        match *self {
            DimensionConstraint::Any => d >= 1,
            DimensionConstraint::Exact(n) => d == n,
            DimensionConstraint::MultipleOf(n) => n > 0 && d > 0 && d % n == 0,
            DimensionConstraint::AtLeast(n) => d >= n.max(1),
        }
    }

    /// Smallest dimension accepted by the constraint.
    pub fn smallest(&self) -> usize {
        match *self {
            DimensionConstraint::Any => 1,
            DimensionConstraint::Exact(n)
            | DimensionConstraint::MultipleOf(n)
            | DimensionConstraint::AtLeast(n) => n.max(1),
        }
    }
}

impl fmt::Display for DimensionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DimensionConstraint::Any => write!(f, "any dimension"),
            DimensionConstraint::Exact(n) => write!(f, "exactly {n} dimensions"),
            DimensionConstraint::MultipleOf(n) => write!(f, "a multiple of {n} dimensions"),
            DimensionConstraint::AtLeast(n) => write!(f, "at least {n} dimensions"),
        }
    }
}

/// Metadata for a test function: domain, dimension rule and known minima.
#[derive(Debug, Clone)]
pub struct FunctionMetadata {
    /// Function name
    pub name: String,
    /// Human readable label, as printed in benchmark tables
    pub label: String,
    /// Canonical search domain, applied to every coordinate
    pub bounds: (f64, f64),
    /// Accepted problem dimensions
    pub dimension: DimensionConstraint,
    /// Dimension used when the caller does not pick one
    pub default_dimension: usize,
    /// Known global minima locations and values
    pub global_minima: Vec<(Vec<f64>, f64)>,
    /// Whether repeated evaluation of one point returns the same value
    pub deterministic: bool,
    /// Whether the function is multimodal
    pub multimodal: bool,
    /// How numeric singularities are resolved, if the formula has any
    pub singularity: Option<String>,
    /// The formula itself
    pub function: TestFunction,
}

#[allow(clippy::too_many_arguments)]
fn entry(
    name: &str,
    label: &str,
    function: TestFunction,
    bounds: (f64, f64),
    dimension: DimensionConstraint,
    default_dimension: usize,
    global_minima: Vec<(Vec<f64>, f64)>,
    multimodal: bool,
) -> FunctionMetadata {
    FunctionMetadata {
        name: name.to_string(),
        label: label.to_string(),
        bounds,
        dimension,
        default_dimension,
        global_minima,
        deterministic: true,
        multimodal,
        singularity: None,
        function,
    }
}

/// Get metadata for all available test functions, keyed by name.
pub fn get_function_metadata() -> HashMap<String, FunctionMetadata> {
    use DimensionConstraint::*;
    use std::f64::consts::PI;

    let origin = |d: usize| vec![(vec![0.0; d], 0.0)];
    let ones = |d: usize| vec![(vec![1.0; d], 0.0)];

    let mut quartic_meta = entry(
        "quartic",
        "Quartic Function",
        quartic,
        (-1.28, 1.28),
        Any,
        30,
        vec![],
        false,
    );
    quartic_meta.deterministic = false;

    let mut csendes_meta = entry(
        "csendes",
        "Csendes Function",
        csendes,
        (-1.0, 1.0),
        Any,
        30,
        origin(2),
        false,
    );
    csendes_meta.singularity =
        Some("x_i = 0 contributes its limit 0 instead of evaluating sin(1/0)".to_string());

    let all = vec![
        entry("sum_squares", "Sum Squares Function", sum_squares, (-10.0, 10.0), Any, 30, origin(3), false),
        entry("step2", "Step 2 Function", step2, (-100.0, 100.0), Any, 30, origin(3), false),
        quartic_meta,
        entry("powell", "Powell Function", powell, (-4.0, 5.0), MultipleOf(4), 32, origin(8), false),
        entry("rosenbrock", "Rosenbrock Function", rosenbrock, (-2.048, 2.048), AtLeast(2), 30, ones(3), false),
        entry(
            "dixon_price",
            "Dixon & Price Function",
            dixon_price,
            (-10.0, 10.0),
            Any,
            30,
            vec![(vec![1.0, std::f64::consts::FRAC_1_SQRT_2], 0.0)],
            false,
        ),
        entry("schwefel_1_2", "Schwefel 1.2 Function", schwefel_1_2, (-100.0, 100.0), Any, 30, origin(3), false),
        entry("schwefel_2_20", "Schwefel 2.20 Function", schwefel_2_20, (-100.0, 100.0), Any, 30, origin(3), false),
        entry("schwefel_2_21", "Schwefel 2.21 Function", schwefel_2_21, (-100.0, 100.0), Any, 30, origin(3), false),
        entry("schwefel_2_22", "Schwefel 2.22 Function", schwefel_2_22, (-10.0, 10.0), Any, 30, origin(3), false),
        entry("rastrigin", "Rastrigin Function", rastrigin, (-5.12, 5.12), Any, 30, origin(3), true),
        entry("griewank", "Griewank Function", griewank, (-600.0, 600.0), Any, 30, origin(3), true),
        csendes_meta,
        entry("colville", "Colville Function", colville, (-10.0, 10.0), Exact(4), 4, ones(4), false),
        entry("easom", "Easom Function", easom, (-100.0, 100.0), Exact(2), 2, vec![(vec![PI, PI], -1.0)], true),
        entry(
            "michalewicz",
            "Michalewicz Function",
            michalewicz,
            (0.0, PI),
            Any,
            10,
            vec![(vec![2.202906, 1.570796], -1.8013034)],
            true,
        ),
        entry(
            "shekel",
            "Shekel Function",
            shekel,
            (0.0, 10.0),
            Exact(4),
            4,
            vec![(vec![4.0, 4.0, 4.0, 4.0], -10.536284)],
            true,
        ),
        entry(
            "schwefel",
            "Schwefel Function",
            schwefel,
            (-500.0, 500.0),
            Any,
            30,
            vec![(vec![420.9687, 420.9687], 0.0)],
            true,
        ),
        entry("schwefel_2_4", "Schwefel 2.4 Function", schwefel_2_4, (0.0, 10.0), Any, 30, ones(3), false),
        entry("schaffer", "Schaffer Function", schaffer, (-100.0, 100.0), AtLeast(2), 30, origin(2), true),
        entry("sphere", "Sphere Function", sphere, (-5.0, 5.0), Any, 30, origin(3), false),
        entry("ackley", "Ackley Function", ackley, (-32.768, 32.768), Any, 30, origin(2), true),
        entry("alpine", "Alpine Function", alpine, (-10.0, 10.0), Any, 30, origin(2), true),
    ];

    all.into_iter().map(|m| (m.name.clone(), m)).collect()
}

/// Helper function to get the canonical domain of a function by name.
/// Returns None if function is not found in metadata
pub fn get_function_bounds(function_name: &str) -> Option<(f64, f64)> {
    get_function_metadata()
        .get(function_name)
        .map(|meta| meta.bounds)
}

/// Checks that every recorded global minimum lies inside the domain, has an
/// accepted dimension, and evaluates to the recorded value.
#[cfg(test)]
pub(crate) fn assert_known_minima(name: &str, f: TestFunction) {
    let metadata = get_function_metadata();
    let meta = metadata
        .get(name)
        .unwrap_or_else(|| panic!("Function {name} should have metadata"));
    let (lower, upper) = meta.bounds;

    for (coords, expected) in &meta.global_minima {
        assert!(
            meta.dimension.accepts(coords.len()),
            "{name}: minimum {coords:?} violates {}",
            meta.dimension
        );
        for (i, &c) in coords.iter().enumerate() {
            assert!(
                c >= lower && c <= upper,
                "{name}: coordinate {i} = {c} outside [{lower}, {upper}]"
            );
        }
        let actual = f(&Array1::from_vec(coords.clone()));
        let tolerance = 1e-4 * expected.abs().max(1.0);
        assert!(
            (actual - expected).abs() <= tolerance,
            "{name}: f({coords:?}) = {actual}, expected {expected} (tolerance {tolerance})"
        );
        assert!(actual.is_finite(), "{name}: non-finite value at minimum");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_is_consistent() {
        let metadata = get_function_metadata();
        assert_eq!(metadata.len(), 23);
        for (key, meta) in &metadata {
            assert_eq!(key, &meta.name);
            assert!(meta.bounds.0 < meta.bounds.1, "{key}: empty domain");
            assert!(
                meta.dimension.accepts(meta.default_dimension),
                "{key}: default dimension {} violates {}",
                meta.default_dimension,
                meta.dimension
            );
        }
    }

    #[test]
    fn test_dimension_constraints() {
        assert!(DimensionConstraint::Exact(4).accepts(4));
        assert!(!DimensionConstraint::Exact(4).accepts(3));
        assert!(DimensionConstraint::MultipleOf(4).accepts(8));
        assert!(!DimensionConstraint::MultipleOf(4).accepts(6));
        assert!(!DimensionConstraint::MultipleOf(4).accepts(0));
        assert!(DimensionConstraint::AtLeast(2).accepts(2));
        assert!(!DimensionConstraint::AtLeast(2).accepts(1));
        assert!(!DimensionConstraint::Any.accepts(0));
        assert_eq!(
            DimensionConstraint::MultipleOf(4).to_string(),
            "a multiple of 4 dimensions"
        );
    }

    #[test]
    fn test_every_function_is_finite_at_domain_corners() {
        for meta in get_function_metadata().values() {
            let d = meta.default_dimension;
            for corner in [meta.bounds.0, meta.bounds.1] {
                let v = (meta.function)(&Array1::from_elem(d, corner));
                assert!(v.is_finite(), "{} at corner {corner}: {v}", meta.name);
            }
        }
    }

    #[test]
    fn test_bounds_lookup() {
        assert_eq!(get_function_bounds("sphere"), Some((-5.0, 5.0)));
        assert_eq!(get_function_bounds("no_such_function"), None);
    }
}
