//! Csendes test function

use ndarray::Array1;

/// Csendes function, f(x) = sum x_i^6 (2 + sin(1 / x_i))
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-1, 1]
///
/// Singularity: `sin(1 / x_i)` is undefined at `x_i = 0`. The term is
/// replaced by its limit there, which is exactly `0.0` because
/// `|x^6 (2 + sin(1/x))| <= 3 x^6`. The function is therefore finite
/// everywhere, including at the origin.
pub fn csendes(x: &Array1<f64>) -> f64 {
    x.iter()
        .map(|&xi| {
            if xi == 0.0 {
                0.0
            } else {
                xi.powi(6) * (2.0 + (1.0 / xi).sin())
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_csendes_known_properties() {
        crate::assert_known_minima("csendes", csendes);
    }

    #[test]
    fn test_csendes_zero_component_is_finite() {
        let v = csendes(&array![0.0, 0.5]);
        assert!(v.is_finite());
        assert!((v - 0.5f64.powi(6) * (2.0 + 2f64.sin())).abs() < 1e-15);
        assert_eq!(csendes(&array![-0.0, 0.0]), 0.0);
    }
}
