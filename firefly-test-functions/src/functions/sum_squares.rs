//! Sum Squares test function

use ndarray::Array1;

/// Sum Squares function - weighted sphere, f(x) = sum (i+1) * x_i^2
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
pub fn sum_squares(x: &Array1<f64>) -> f64 {
    x.iter()
        .enumerate()
        .map(|(i, &xi)| (i as f64 + 1.0) * xi * xi)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_sum_squares_known_properties() {
        crate::assert_known_minima("sum_squares", sum_squares);
        // weights are 1, 2, 3
        assert_eq!(sum_squares(&array![1.0, 1.0, 1.0]), 6.0);
    }
}
