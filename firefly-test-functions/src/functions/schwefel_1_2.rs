//! Schwefel 1.2 test function

use ndarray::Array1;

/// Schwefel 1.2 (double sum) function, f(x) = sum_i (sum_{j<=i} x_j)^2
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn schwefel_1_2(x: &Array1<f64>) -> f64 {
    x.iter()
        .scan(0.0, |prefix, &xi| {
            *prefix += xi;
            Some(*prefix * *prefix)
        })
        .sum()
}
