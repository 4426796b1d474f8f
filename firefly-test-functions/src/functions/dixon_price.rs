//! Dixon & Price test function

use ndarray::Array1;

/// Dixon-Price function, f(x) = (x_1 - 1)^2 + sum_{i>=2} i * (2 x_i^2 - x_{i-1})^2
/// Global minimum: f(x) = 0 at x_i = 2^(-(2^i - 2) / 2^i)
/// Bounds: x_i in [-10, 10]
pub fn dixon_price(x: &Array1<f64>) -> f64 {
    let head = (x[0] - 1.0).powi(2);
    let tail: f64 = (1..x.len())
        .map(|i| (i as f64 + 1.0) * (2.0 * x[i] * x[i] - x[i - 1]).powi(2))
        .sum();
    head + tail
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_dixon_price_known_properties() {
        crate::assert_known_minima("dixon_price", dixon_price);
        assert_eq!(dixon_price(&array![0.0, 0.0]), 1.0);
    }

    #[test]
    fn test_dixon_price_minimum_in_three_dimensions() {
        let x: Array1<f64> = (1..=3)
            .map(|i| {
                let p = 2f64.powi(i);
                2f64.powf(-(p - 2.0) / p)
            })
            .collect();
        assert!(dixon_price(&x).abs() < 1e-12, "f = {}", dixon_price(&x));
    }
}
