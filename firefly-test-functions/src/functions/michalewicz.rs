//! Michalewicz test function

use ndarray::Array1;
use std::f64::consts::PI;

/// Michalewicz function (m = 10) - steep ridges and valleys
/// Global minimum (2D): f(x) ≈ -1.8013 at x ≈ (2.20, 1.57)
/// Bounds: x_i in [0, π]
pub fn michalewicz(x: &Array1<f64>) -> f64 {
    let m = 10;
    -x.iter()
        .enumerate()
        .map(|(i, &xi)| xi.sin() * ((i as f64 + 1.0) * xi * xi / PI).sin().powi(2 * m))
        .sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_michalewicz_known_properties() {
        crate::assert_known_minima("michalewicz", michalewicz);
    }
}
