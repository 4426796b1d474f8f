//! Powell singular test function

use ndarray::Array1;

/// Powell singular function - defined on blocks of four variables
/// Global minimum: f(x) = 0 at x = (0, 0, ..., 0)
/// Bounds: x_i in [-4, 5]
/// Dimension: a multiple of 4; a trailing partial block is ignored
pub fn powell(x: &Array1<f64>) -> f64 {
    x.as_slice()
        .map(|s| s.chunks_exact(4).map(block).sum::<f64>())
        .unwrap_or_else(|| x.to_vec().chunks_exact(4).map(block).sum())
}

fn block(b: &[f64]) -> f64 {
    let t1 = b[0] + 10.0 * b[1];
    let t2 = b[2] - b[3];
    let t3 = b[1] - 2.0 * b[2];
    let t4 = b[0] - b[3];
    t1 * t1 + 5.0 * t2 * t2 + t3.powi(4) + 10.0 * t4.powi(4)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_powell_known_properties() {
        crate::assert_known_minima("powell", powell);
        // (3 + 10*(-1))^2 + 5*(0 - 1)^2 + (-1 - 0)^4 + 10*(3 - 1)^4
        assert_eq!(powell(&array![3.0, -1.0, 0.0, 1.0]), 49.0 + 5.0 + 1.0 + 160.0);
    }

    #[test]
    fn test_powell_blocks_are_independent() {
        let one = array![3.0, -1.0, 0.0, 1.0];
        let two = array![3.0, -1.0, 0.0, 1.0, 3.0, -1.0, 0.0, 1.0];
        assert_eq!(powell(&two), 2.0 * powell(&one));
    }
}
