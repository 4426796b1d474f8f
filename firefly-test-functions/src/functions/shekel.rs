//! Shekel test function

use ndarray::Array1;

const A: [[f64; 4]; 10] = [
    [4.0, 4.0, 4.0, 4.0],
    [1.0, 1.0, 1.0, 1.0],
    [8.0, 8.0, 8.0, 8.0],
    [6.0, 6.0, 6.0, 6.0],
    [3.0, 7.0, 3.0, 7.0],
    [2.0, 9.0, 2.0, 9.0],
    [5.0, 5.0, 3.0, 3.0],
    [8.0, 1.0, 8.0, 1.0],
    [6.0, 2.0, 6.0, 2.0],
    [7.0, 3.6, 7.0, 3.6],
];
const C: [f64; 10] = [0.1, 0.2, 0.2, 0.4, 0.4, 0.6, 0.3, 0.7, 0.5, 0.5];

/// Shekel function (m = 10) - 4D with ten local minima
/// Global minimum: f(x) ≈ -10.5364 at x ≈ (4, 4, 4, 4)
/// Bounds: x_i in [0, 10]
/// Dimension: exactly 4
pub fn shekel(x: &Array1<f64>) -> f64 {
    -A.iter()
        .zip(C.iter())
        .map(|(a, &c)| {
            let dist: f64 = a.iter().enumerate().map(|(j, &aj)| (x[j] - aj).powi(2)).sum();
            1.0 / (dist + c)
        })
        .sum::<f64>()
}
