//! Schaffer test function

use ndarray::Array1;

/// Extended Schaffer F6 function, summed over consecutive pairs
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-100, 100]
/// Dimension: at least 2
pub fn schaffer(x: &Array1<f64>) -> f64 {
    x.windows(2)
        .into_iter()
        .map(|w| {
            let r2 = w[0] * w[0] + w[1] * w[1];
            0.5 + (r2.sqrt().sin().powi(2) - 0.5) / (1.0 + 0.001 * r2).powi(2)
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schaffer_known_properties() {
        crate::assert_known_minima("schaffer", schaffer);
    }
}
