//! Repeated-trial benchmarking.
//!
//! For every (function, thread count) pair the engine is run `trials` times
//! and the average and best final fitness are recorded together with the
//! total wall-clock time. Trial `t` uses the same seed for every thread
//! count, so in generational mode all columns of one row agree and only the
//! timings differ.

use crate::error::{FireflyError, Result};
use crate::function_registry::ObjectiveRegistry;
use crate::objective::ObjectiveDescriptor;
use crate::{AlphaSchedule, ConsistencyMode, FireflyConfigBuilder, optimize};
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};

const TRIAL_SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// Configuration for a benchmark sweep.
#[derive(Clone, Debug)]
pub struct BenchmarkConfig {
    /// Objective names; empty means every registered objective.
    pub functions: Vec<String>,
    /// Thread counts to compare.
    pub thread_counts: Vec<usize>,
    /// Independent runs per (function, thread count).
    pub trials: usize,
    /// Problem dimension; functions that reject it use their own default.
    pub dimension: Option<usize>,
    /// Number of candidates.
    pub population_size: usize,
    /// Generations per run.
    pub max_generations: usize,
    /// Randomization schedule.
    pub alpha: AlphaSchedule,
    /// Attractiveness at zero distance.
    pub beta0: f64,
    /// Light absorption coefficient.
    pub gamma: f64,
    /// Consistency mode of every run.
    pub consistency: ConsistencyMode,
    /// Base seed; trial seeds are derived from it. `None` draws entropy.
    pub seed: Option<u64>,
    /// Domain override applied to every function.
    pub bounds: Option<(f64, f64)>,
    /// Per-run deadline.
    pub max_duration: Option<Duration>,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            functions: Vec::new(),
            thread_counts: vec![1, 2, 4, 8],
            trials: 30,
            dimension: Some(30),
            population_size: 50,
            max_generations: 30,
            alpha: AlphaSchedule::Constant(0.2),
            beta0: 1.0,
            gamma: 1.0,
            consistency: ConsistencyMode::Generational,
            seed: None,
            bounds: None,
            max_duration: None,
        }
    }
}

/// Outcome of all trials for one (function, thread count) pair.
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkRecord {
    /// Objective name.
    pub function: String,
    /// Worker threads per run.
    pub threads: usize,
    /// Dimension the runs used.
    pub dimension: usize,
    /// Mean of the reported fitness over all trials.
    pub average_result: f64,
    /// Lowest reported fitness over all trials.
    pub best_result: f64,
    /// Total wall-clock time of all trials.
    pub elapsed: Duration,
}

/// Runs every configured (function, thread count) pair.
///
/// # Errors
///
/// Returns `FireflyError::InvalidParameter` when `trials` is zero,
/// `FireflyError::UnknownFunction` for an unregistered name, and propagates
/// any setup error of the underlying runs.
pub fn run_benchmark(
    registry: &ObjectiveRegistry,
    cfg: &BenchmarkConfig,
) -> Result<Vec<BenchmarkRecord>> {
    if cfg.trials == 0 {
        return Err(FireflyError::InvalidParameter {
            name: "trials",
            value: 0.0,
            reason: "must be >= 1",
        });
    }
    let names = if cfg.functions.is_empty() {
        registry.list_functions()
    } else {
        cfg.functions.clone()
    };
    let base_seed = cfg.seed.unwrap_or_else(rand::random);

    let mut records = Vec::with_capacity(names.len() * cfg.thread_counts.len());
    for name in &names {
        let mut descriptor = registry.descriptor_or_err(name)?.clone();
        if let Some((lower, upper)) = cfg.bounds {
            descriptor = descriptor.with_bounds(lower, upper)?;
        }
        let dimension = resolve_dimension(&descriptor, cfg.dimension);

        for &threads in &cfg.thread_counts {
            records.push(run_pair(&descriptor, cfg, dimension, threads, base_seed)?);
        }
    }
    Ok(records)
}

fn resolve_dimension(descriptor: &ObjectiveDescriptor, requested: Option<usize>) -> usize {
    match requested {
        Some(d) if descriptor.dimension().accepts(d) => d,
        Some(d) => {
            log::warn!(
                "{} requires {}; using {} instead of {}",
                descriptor.name(),
                descriptor.dimension(),
                descriptor.default_dimension(),
                d
            );
            descriptor.default_dimension()
        }
        None => descriptor.default_dimension(),
    }
}

fn run_pair(
    descriptor: &ObjectiveDescriptor,
    cfg: &BenchmarkConfig,
    dimension: usize,
    threads: usize,
    base_seed: u64,
) -> Result<BenchmarkRecord> {
    let start = Instant::now();
    let mut results = Vec::with_capacity(cfg.trials);
    for trial in 0..cfg.trials {
        let seed = base_seed.wrapping_add((trial as u64).wrapping_mul(TRIAL_SEED_STRIDE));
        let mut builder = FireflyConfigBuilder::new()
            .population_size(cfg.population_size)
            .max_generations(cfg.max_generations)
            .dimension(dimension)
            .alpha(cfg.alpha)
            .beta0(cfg.beta0)
            .gamma(cfg.gamma)
            .threads(threads)
            .consistency(cfg.consistency)
            .seed(seed);
        if let Some(limit) = cfg.max_duration {
            builder = builder.max_duration(limit);
        }
        let report = optimize(descriptor, builder.build()?)?;
        results.push(report.fun);
    }
    let elapsed = start.elapsed();

    let average_result = if results.is_empty() {
        f64::NAN
    } else {
        results.iter().sum::<f64>() / results.len() as f64
    };
    let best_result = results.iter().copied().fold(f64::INFINITY, f64::min);
    log::info!(
        "{} with {} threads: average={:.6e} best={:.6e} in {:.3?}",
        descriptor.name(),
        threads,
        average_result,
        best_result,
        elapsed
    );

    Ok(BenchmarkRecord {
        function: descriptor.name().to_string(),
        threads,
        dimension,
        average_result,
        best_result,
        elapsed,
    })
}

/// Formats records as a table: function name, one average-result column per
/// entry of `thread_counts`, then the best result over all of them.
///
/// Rows follow the first appearance of each function in `records`. Missing
/// (function, thread count) pairs are left empty.
pub fn format_csv(records: &[BenchmarkRecord], thread_counts: &[usize]) -> String {
    let mut out = String::from("function");
    for t in thread_counts {
        let _ = write!(out, ",threads_{t}");
    }
    out.push_str(",best\n");

    let mut functions: Vec<&str> = Vec::new();
    for r in records {
        if !functions.contains(&r.function.as_str()) {
            functions.push(&r.function);
        }
    }

    for function in functions {
        out.push_str(function);
        let mut best = f64::INFINITY;
        for &t in thread_counts {
            out.push(',');
            if let Some(r) = records
                .iter()
                .find(|r| r.function == function && r.threads == t)
            {
                let _ = write!(out, "{:e}", r.average_result);
                best = best.min(r.best_result);
            }
        }
        if best.is_finite() {
            let _ = write!(out, ",{:e}", best);
        } else {
            out.push(',');
        }
        out.push('\n');
    }
    out
}

/// Writes [`format_csv`] output to `path`.
///
/// # Errors
///
/// Returns `FireflyError::Io` if the file cannot be created or written.
pub fn write_csv<P: AsRef<Path>>(
    path: P,
    records: &[BenchmarkRecord],
    thread_counts: &[usize],
) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    writer.write_all(format_csv(records, thread_counts).as_bytes())?;
    writer.flush()?;
    Ok(())
}
