//! Easom test function

use ndarray::Array1;
use std::f64::consts::PI;

/// Easom function - flat almost everywhere with a very narrow global basin
/// Global minimum: f(x) = -1 at x = (π, π)
/// Bounds: x_i in [-100, 100]
/// Dimension: exactly 2
pub fn easom(x: &Array1<f64>) -> f64 {
    let x1 = x[0];
    let x2 = x[1];
    -x1.cos() * x2.cos() * (-(x1 - PI).powi(2) - (x2 - PI).powi(2)).exp()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_easom_known_properties() {
        crate::assert_known_minima("easom", easom);
        // far from the basin the exponential underflows to zero
        assert_eq!(easom(&array![-90.0, 80.0]).abs(), 0.0);
    }
}
