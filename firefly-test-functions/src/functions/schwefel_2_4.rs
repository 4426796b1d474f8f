//! Schwefel 2.4 test function

use ndarray::Array1;

/// Schwefel 2.4 function, f(x) = sum_i (x_i - 1)^2 + (x_1 - x_i^2)^2
/// Global minimum: f(x) = 0 at x = (1, 1, ..., 1)
/// Bounds: x_i in [0, 10]
pub fn schwefel_2_4(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    x.iter()
        .map(|&xi| (xi - 1.0).powi(2) + (x1 - xi * xi).powi(2))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_schwefel_2_4_known_properties() {
        crate::assert_known_minima("schwefel_2_4", schwefel_2_4);
        // i = 1: 1 + (0 - 0)^2, i = 2: 1 + (0 - 4)^2
        assert_eq!(schwefel_2_4(&array![0.0, 2.0]), 1.0 + 1.0 + 16.0);
    }
}
