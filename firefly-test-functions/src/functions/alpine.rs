//! Alpine N.1 test function

use ndarray::Array1;

/// Alpine N.1 function, f(x) = sum |x_i sin(x_i) + 0.1 x_i|
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-10, 10]
pub fn alpine(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| (xi * xi.sin() + 0.1 * xi).abs()).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpine_known_properties() {
        crate::assert_known_minima("alpine", alpine);
    }
}
