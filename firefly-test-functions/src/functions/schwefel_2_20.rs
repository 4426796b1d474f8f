//! Schwefel 2.20 test function

use ndarray::Array1;

/// Schwefel 2.20 function, f(x) = sum |x_i|
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn schwefel_2_20(x: &Array1<f64>) -> f64 {
    x.iter().map(|xi| xi.abs()).sum()
}
