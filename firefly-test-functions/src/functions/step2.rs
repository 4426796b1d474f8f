//! Step 2 test function

use ndarray::Array1;

/// De Jong Step 2 function - piecewise constant plateaus
/// Global minimum: f(x) = 0 for every x_i in [-0.5, 0.5)
/// Bounds: x_i in [-100, 100]
pub fn step2(x: &Array1<f64>) -> f64 {
    x.iter().map(|&xi| (xi + 0.5).floor().powi(2)).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_step2_known_properties() {
        crate::assert_known_minima("step2", step2);
        assert_eq!(step2(&array![0.49, -0.5]), 0.0);
        assert_eq!(step2(&array![0.5, -0.51]), 2.0);
    }
}
