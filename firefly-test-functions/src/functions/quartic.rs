//! Quartic test function with noise

use ndarray::Array1;
use rand::Rng;

/// Quartic function with uniform noise, f(x) = sum (i+1) * x_i^4 + U[0, 1)
/// Global minimum: f(x) ≈ 0 at x = (0, 0, ..., 0), plus noise
/// Bounds: x_i in [-1.28, 1.28]
///
/// Not deterministic: every call draws fresh noise from the calling thread's
/// generator, so two evaluations of the same point generally differ.
pub fn quartic(x: &Array1<f64>) -> f64 {
    quartic_noiseless(x) + rand::rng().random::<f64>()
}

/// The deterministic part of [`quartic`].
pub fn quartic_noiseless(x: &Array1<f64>) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| (i as f64 + 1.0) * xi.powi(4))
        .sum()
}
