use clap::{Parser, ValueEnum};
use firefly_optimizer::benchmark::{BenchmarkConfig, BenchmarkRecord, run_benchmark, write_csv};
use firefly_optimizer::{AlphaSchedule, ConsistencyMode, ObjectiveRegistry};
use std::process;
use std::time::{Duration, Instant};

#[derive(Parser, Debug)]
#[command(
    name = "run_firefly",
    about = "Benchmark the parallel Firefly optimizer across thread counts"
)]
struct Cli {
    /// Benchmark function to run; repeat for several (default: all registered functions)
    #[arg(long)]
    function: Vec<String>,

    /// List all available functions and exit
    #[arg(long)]
    list_functions: bool,

    /// Dimensionality of the problem (functions with a fixed dimension keep their own)
    #[arg(long, default_value_t = 30)]
    dim: usize,

    /// Number of fireflies
    #[arg(long, default_value_t = 50)]
    population: usize,

    /// Number of generations per run
    #[arg(long, default_value_t = 30)]
    generations: usize,

    /// Randomization step at the first generation
    #[arg(long, default_value_t = 0.2)]
    alpha_min: f64,

    /// Randomization step approached at the last generation (defaults to --alpha-min)
    #[arg(long)]
    alpha_max: Option<f64>,

    /// Attractiveness at zero distance
    #[arg(long, default_value_t = 1.0)]
    beta0: f64,

    /// Light absorption coefficient
    #[arg(long, default_value_t = 1.0)]
    gamma: f64,

    /// Comma-separated thread counts to compare
    #[arg(long, value_delimiter = ',', default_values_t = [1usize, 2, 4, 8])]
    threads: Vec<usize>,

    /// Independent runs per (function, thread count)
    #[arg(long, default_value_t = 30)]
    trials: usize,

    /// Consistency mode of the population updates
    #[arg(long, value_enum, default_value_t = ModeChoice::Generational)]
    mode: ModeChoice,

    /// Optional base random seed for reproducibility
    #[arg(long)]
    seed: Option<u64>,

    /// Override the lower bound of every function's domain
    #[arg(long, requires = "upper", allow_hyphen_values = true)]
    lower: Option<f64>,

    /// Override the upper bound of every function's domain
    #[arg(long, requires = "lower", allow_hyphen_values = true)]
    upper: Option<f64>,

    /// Write the result table to this CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Stop each run after this many seconds (optional)
    #[arg(long)]
    max_seconds: Option<f64>,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ModeChoice {
    Generational,
    Live,
}

impl From<ModeChoice> for ConsistencyMode {
    fn from(choice: ModeChoice) -> Self {
        match choice {
            ModeChoice::Generational => ConsistencyMode::Generational,
            ModeChoice::Live => ConsistencyMode::Live,
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Cli::parse();
    let registry = ObjectiveRegistry::new();

    if args.list_functions {
        list_available_functions(&registry);
        return;
    }

    if args.threads.is_empty() {
        eprintln!("Error: --threads needs at least one thread count.");
        process::exit(2);
    }

    let max_duration = match args.max_seconds {
        Some(s) if s.is_finite() && s > 0.0 => Some(Duration::from_secs_f64(s)),
        Some(s) => {
            eprintln!("Error: --max-seconds must be a positive number; got {s}");
            process::exit(2);
        }
        None => None,
    };

    let alpha = match args.alpha_max {
        Some(max) if max != args.alpha_min => AlphaSchedule::Linear {
            min: args.alpha_min,
            max,
        },
        _ => AlphaSchedule::Constant(args.alpha_min),
    };

    let cfg = BenchmarkConfig {
        functions: args.function.iter().map(|f| f.trim().to_string()).collect(),
        thread_counts: args.threads.clone(),
        trials: args.trials,
        dimension: Some(args.dim),
        population_size: args.population,
        max_generations: args.generations,
        alpha,
        beta0: args.beta0,
        gamma: args.gamma,
        consistency: args.mode.into(),
        seed: args.seed,
        bounds: args.lower.zip(args.upper),
        max_duration,
    };

    println!(
        "Running Firefly: {} fireflies, {} generations, {} trials, mode {:?}, threads {:?}",
        cfg.population_size, cfg.max_generations, cfg.trials, cfg.consistency, cfg.thread_counts
    );

    let overall_start = Instant::now();
    let records = match run_benchmark(&registry, &cfg) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: benchmark failed: {}", e);
            if e.is_precondition_error() {
                eprintln!("Use --list-functions to inspect available names.");
            }
            process::exit(2);
        }
    };

    print_records(&registry, &records);
    println!("\nBenchmark completed in {:.2?}", overall_start.elapsed());

    if let Some(path) = &args.csv {
        if let Err(e) = write_csv(path, &records, &cfg.thread_counts) {
            eprintln!("Error: failed to write '{path}': {e}");
            process::exit(2);
        }
        println!("Results written to {path}");
    }
}

fn list_available_functions(registry: &ObjectiveRegistry) {
    let names = registry.list_functions();
    println!("Available test functions ({}):", names.len());
    for name in names {
        if let Some(d) = registry.get(&name) {
            let (lower, upper) = d.bounds();
            println!(
                "- {name:<14} {:<28} [{lower}, {upper}], {}",
                d.label(),
                d.dimension()
            );
        }
    }
}

fn print_records(registry: &ObjectiveRegistry, records: &[BenchmarkRecord]) {
    let mut current: Option<&str> = None;
    for r in records {
        if current != Some(r.function.as_str()) {
            current = Some(r.function.as_str());
            let descriptor = registry.get(&r.function);
            let label = descriptor.map_or(r.function.as_str(), |d| d.label());
            let note = descriptor
                .and_then(|d| d.singularity().map(|s| format!(" (note: {s})")))
                .unwrap_or_default();
            println!("\nFunction: {} ({}D){}", label, r.dimension, note);
        }
        println!(
            "  threads {:>3} | average {:>14.6e} | best {:>14.6e} | {:>10.3} ms",
            r.threads,
            r.average_result,
            r.best_result,
            r.elapsed.as_secs_f64() * 1e3
        );
    }
}
