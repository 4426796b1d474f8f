//! Schwefel 2.22 test function

use ndarray::Array1;

/// Schwefel 2.22 function, f(x) = sum |x_i| + prod |x_i|
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
pub fn schwefel_2_22(x: &Array1<f64>) -> f64 {
    let sum: f64 = x.iter().map(|xi| xi.abs()).sum();
    let product: f64 = x.iter().map(|xi| xi.abs()).product();
    sum + product
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_schwefel_2_22_known_properties() {
        crate::assert_known_minima("schwefel_2_22", schwefel_2_22);
        assert_eq!(schwefel_2_22(&array![-2.0, 3.0]), 5.0 + 6.0);
    }
}
