//! Schwefel test function

use ndarray::Array1;

/// Schwefel function, f(x) = 418.9829 n - sum x_i sin(sqrt(|x_i|))
/// Global minimum: f(x) ≈ 0 at x = (420.9687, ..., 420.9687)
/// Bounds: x_i in [-500, 500]
pub fn schwefel(x: &Array1<f64>) -> f64 {
    let n = x.len() as f64;
    418.9829 * n - x.iter().map(|&xi| xi * xi.abs().sqrt().sin()).sum::<f64>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schwefel_known_properties() {
        crate::assert_known_minima("schwefel", schwefel);
    }
}
