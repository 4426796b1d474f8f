use firefly_optimizer::{
    ConsistencyMode, DimensionConstraint, FireflyConfigBuilder, FnObjective,
    ObjectiveDescriptor, optimize,
};
use ndarray::Array1;
use std::time::Instant;

fn main() {
    env_logger::init();

    // Rastrigin function with artificial compute delay to simulate expensive evaluations
    let rastrigin = ObjectiveDescriptor::new(
        "slow_rastrigin",
        DimensionConstraint::Any,
        (-5.12, 5.12),
        FnObjective::new(|x: &Array1<f64>| -> f64 {
            let mut sum = 0.0;
            for _ in 0..1000 {
                for &xi in x.iter() {
                    sum += xi.sin().cos().exp().ln_1p();
                }
            }

            let a = 10.0;
            let n = x.len() as f64;
            let result = a * n
                + x.iter()
                    .map(|&xi| xi * xi - a * (2.0 * std::f64::consts::PI * xi).cos())
                    .sum::<f64>();
            result + sum * 1e-10
        }),
    )
    .expect("valid bounds");

    for mode in [ConsistencyMode::Generational, ConsistencyMode::Live] {
        println!("\n{mode:?} mode:");
        let mut baseline = None;
        for threads in [1, 2, 4, 8] {
            let config = FireflyConfigBuilder::new()
                .population_size(40)
                .max_generations(30)
                .dimension(10)
                .linear_alpha(0.5, 0.05)
                .gamma(0.1)
                .consistency(mode)
                .threads(threads)
                .seed(42)
                .build()
                .expect("valid config");

            let start = Instant::now();
            let report = optimize(&rastrigin, config).expect("optimization failed");
            let secs = start.elapsed().as_secs_f64();
            let speedup = baseline.map_or(1.0, |b: f64| b / secs);
            baseline.get_or_insert(secs);

            println!(
                "  {} thread(s): {:.3} s (speedup {:.2}x) | best f {:.6e} | nfev {}",
                threads, secs, speedup, report.fun, report.nfev
            );
        }
    }
}
