//! Schwefel 2.21 test function

use ndarray::Array1;

/// Schwefel 2.21 function, f(x) = max |x_i|
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
pub fn schwefel_2_21(x: &Array1<f64>) -> f64 {
    x.iter().fold(0.0, |acc: f64, xi| acc.max(xi.abs()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_schwefel_2_21_uses_magnitude() {
        crate::assert_known_minima("schwefel_2_21", schwefel_2_21);
        assert_eq!(schwefel_2_21(&array![-7.0, 3.0, 5.0]), 7.0);
    }
}
