//! Parallel Firefly optimization library.
//!
//! This crate provides a Rust implementation of the Firefly algorithm, a
//! population-based stochastic optimizer for continuous, box-bounded
//! minimization problems. Every candidate moves toward each brighter (lower
//! fitness) candidate with an attractiveness that decays with distance, plus a
//! small random step.
//!
//! # Features
//!
//! - Constant or linearly annealed randomization step
//! - Per-run worker pool with work-stealing over candidates
//! - Two consistency modes: a deterministic double-buffered generation, or
//!   live in-place updates
//! - Reproducible per-candidate random streams
//! - A benchmark catalogue and repeated-trial harness
//!
//! # Example
//!
//! ```rust
//! use firefly_optimizer::{FireflyConfigBuilder, ObjectiveRegistry, optimize};
//!
//! let registry = ObjectiveRegistry::new();
//! let sphere = registry.get("sphere").expect("sphere is registered");
//!
//! let config = FireflyConfigBuilder::new()
//!     .population_size(15)
//!     .max_generations(60)
//!     .dimension(2)
//!     .gamma(0.1)
//!     .threads(2)
//!     .seed(42)
//!     .build()
//!     .expect("invalid config");
//!
//! let report = optimize(sphere, config).expect("optimization should succeed");
//! assert!(report.fun < 0.1);
//! ```
#![warn(missing_docs)]

pub mod error;
pub use error::{FireflyError, Result};

use ndarray::{Array1, Array2};
use std::fmt;
use std::time::{Duration, Instant};

/// Attraction move and per-candidate update.
pub mod attraction;
/// Repeated-trial benchmarking across thread counts.
pub mod benchmark;
/// Name-keyed registry of objectives.
pub mod function_registry;
mod generation;
/// Objective oracle contract and descriptors.
pub mod objective;
/// Convenience entry point.
pub mod optimize;
/// Candidate positions and fitness.
pub mod population;
/// Deterministic per-candidate random streams.
pub mod rng_pool;
/// Randomization step schedules.
pub mod schedule;
/// Per-run worker pool.
pub mod scheduler;
mod shared_population;


pub use function_registry::ObjectiveRegistry;
pub use objective::{
    DimensionConstraint, FnObjective, Objective, ObjectiveDescriptor, SINGULARITY_SENTINEL,
};
pub use optimize::optimize;
pub use population::Population;
pub use rng_pool::RngPool;
pub use schedule::AlphaSchedule;
pub use scheduler::GenerationScheduler;

use attraction::MoveParams;
use generation::{Sweep, step_generational, step_live};
use schedule::check_non_negative;
use shared_population::SharedPopulation;

/// Upper limit on `population_size * dimension`.
pub const MAX_POPULATION_CELLS: usize = 1 << 28;

/// Per-generation callback; returning [`CallbackAction::Stop`] ends the run.
pub type CallbackFn = Box<dyn FnMut(&FireflyIntermediate) -> CallbackAction>;

/// Whether neighbours observe moves made earlier in the same generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsistencyMode {
    /// Every candidate reads a frozen snapshot of the previous generation and
    /// writes into a fresh buffer. Results depend only on the seed, never on
    /// the thread count.
    #[default]
    Generational,
    /// Candidates publish moves in place as soon as they happen; neighbours
    /// may see them within the same generation. Not reproducible across
    /// thread counts.
    Live,
}

/// Which solution the report returns as `x` / `fun`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IncumbentPolicy {
    /// Best candidate of the final population. Better positions visited
    /// earlier and later abandoned are not returned.
    #[default]
    FinalPopulation,
    /// Best position evaluated at any generation boundary during the run.
    /// The population itself is left untouched (no elitism).
    BestEver,
}

/// Configuration for the Firefly optimizer.
pub struct FireflyConfig {
    /// Number of candidates M.
    pub population_size: usize,
    /// Number of generations to run.
    pub max_generations: usize,
    /// Problem dimension; `None` uses the objective's default.
    pub dimension: Option<usize>,
    /// Randomization step schedule.
    pub alpha: AlphaSchedule,
    /// Attractiveness at zero distance.
    pub beta0: f64,
    /// Light absorption coefficient.
    pub gamma: f64,
    /// Worker threads for this run; `None` uses rayon's default.
    pub threads: Option<usize>,
    /// Intra-generation visibility of moves.
    pub consistency: ConsistencyMode,
    /// Optional random seed for reproducibility.
    pub seed: Option<u64>,
    /// Which solution is reported.
    pub incumbent: IncumbentPolicy,
    /// Stop between generations once this much time has passed.
    pub max_duration: Option<Duration>,
    /// Optional per-generation callback (may stop early).
    pub callback: Option<CallbackFn>,
}

impl Default for FireflyConfig {
    fn default() -> Self {
        Self {
            population_size: 50,
            max_generations: 30,
            dimension: None,
            alpha: AlphaSchedule::default(),
            beta0: 1.0,
            gamma: 1.0,
            threads: None,
            consistency: ConsistencyMode::default(),
            seed: None,
            incumbent: IncumbentPolicy::default(),
            max_duration: None,
            callback: None,
        }
    }
}

impl FireflyConfig {
    /// Checks every objective-independent setting.
    ///
    /// # Errors
    ///
    /// Returns `FireflyError::PopulationTooSmall` for an empty population and
    /// `FireflyError::InvalidParameter` for a zero dimension or thread count,
    /// or a negative or non-finite coefficient.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 1 {
            return Err(FireflyError::PopulationTooSmall {
                pop_size: self.population_size,
            });
        }
        if self.dimension == Some(0) {
            return Err(FireflyError::InvalidParameter {
                name: "dimension",
                value: 0.0,
                reason: "must be >= 1",
            });
        }
        if self.threads == Some(0) {
            return Err(FireflyError::InvalidParameter {
                name: "threads",
                value: 0.0,
                reason: "must be >= 1",
            });
        }
        self.alpha.validate()?;
        check_non_negative("beta0", self.beta0)?;
        check_non_negative("gamma", self.gamma)
    }
}

/// Fluent builder for `FireflyConfig`.
///
/// # Example
///
/// ```rust
/// use firefly_optimizer::{ConsistencyMode, FireflyConfigBuilder};
///
/// let config = FireflyConfigBuilder::new()
///     .population_size(40)
///     .max_generations(200)
///     .linear_alpha(0.5, 0.05)
///     .consistency(ConsistencyMode::Live)
///     .threads(4)
///     .seed(7)
///     .build()
///     .expect("valid config");
/// assert_eq!(config.population_size, 40);
/// ```
pub struct FireflyConfigBuilder {
    cfg: FireflyConfig,
}

impl Default for FireflyConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl FireflyConfigBuilder {
    /// Creates a new builder with default configuration.
    pub fn new() -> Self {
        Self {
            cfg: FireflyConfig::default(),
        }
    }
    /// Sets the number of candidates.
    pub fn population_size(mut self, v: usize) -> Self {
        self.cfg.population_size = v;
        self
    }
    /// Sets the number of generations.
    pub fn max_generations(mut self, v: usize) -> Self {
        self.cfg.max_generations = v;
        self
    }
    /// Sets the problem dimension.
    pub fn dimension(mut self, v: usize) -> Self {
        self.cfg.dimension = Some(v);
        self
    }
    /// Sets the randomization schedule.
    pub fn alpha(mut self, v: AlphaSchedule) -> Self {
        self.cfg.alpha = v;
        self
    }
    /// Uses the same randomization step every generation.
    pub fn constant_alpha(mut self, v: f64) -> Self {
        self.cfg.alpha = AlphaSchedule::Constant(v);
        self
    }
    /// Anneals the randomization step linearly from `min` toward `max`.
    pub fn linear_alpha(mut self, min: f64, max: f64) -> Self {
        self.cfg.alpha = AlphaSchedule::Linear { min, max };
        self
    }
    /// Sets the attractiveness at zero distance.
    pub fn beta0(mut self, v: f64) -> Self {
        self.cfg.beta0 = v;
        self
    }
    /// Sets the light absorption coefficient.
    pub fn gamma(mut self, v: f64) -> Self {
        self.cfg.gamma = v;
        self
    }
    /// Sets the number of worker threads for this run.
    pub fn threads(mut self, v: usize) -> Self {
        self.cfg.threads = Some(v);
        self
    }
    /// Sets the consistency mode.
    pub fn consistency(mut self, v: ConsistencyMode) -> Self {
        self.cfg.consistency = v;
        self
    }
    /// Sets the random seed.
    pub fn seed(mut self, v: u64) -> Self {
        self.cfg.seed = Some(v);
        self
    }
    /// Sets which solution is reported.
    pub fn incumbent(mut self, v: IncumbentPolicy) -> Self {
        self.cfg.incumbent = v;
        self
    }
    /// Stops the run between generations once `v` has elapsed.
    pub fn max_duration(mut self, v: Duration) -> Self {
        self.cfg.max_duration = Some(v);
        self
    }
    /// Sets a per-generation callback function.
    pub fn callback(mut self, cb: CallbackFn) -> Self {
        self.cfg.callback = Some(cb);
        self
    }
    /// Builds and returns the configuration.
    ///
    /// # Errors
    ///
    /// See [`FireflyConfig::validate`].
    pub fn build(self) -> Result<FireflyConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// All configured generations ran.
    MaxGenerations,
    /// The callback returned [`CallbackAction::Stop`].
    Callback,
    /// `max_duration` elapsed.
    Deadline,
}

/// Best position seen at any generation boundary.
#[derive(Debug, Clone)]
pub struct Incumbent {
    /// Position.
    pub x: Array1<f64>,
    /// Fitness at `x`.
    pub fun: f64,
    /// Generations completed when it was found (0 = initial population).
    pub generation: usize,
}

/// Result/report of a Firefly optimization run.
#[derive(Clone)]
pub struct FireflyReport {
    /// The reported solution vector (see [`IncumbentPolicy`]).
    pub x: Array1<f64>,
    /// The objective value at `x`.
    pub fun: f64,
    /// Number of generations performed.
    pub nit: usize,
    /// Number of function evaluations performed.
    pub nfev: usize,
    /// Seed the run's random streams were derived from.
    pub seed: u64,
    /// Worker threads used.
    pub threads: usize,
    /// Consistency mode used.
    pub consistency: ConsistencyMode,
    /// Why the run ended.
    pub stop_reason: StopReason,
    /// Human-readable status message.
    pub message: String,
    /// Final population matrix (M x D).
    pub population: Array2<f64>,
    /// Fitness values for each final population member.
    pub population_fitness: Array1<f64>,
    /// Best position seen at any generation boundary.
    pub best_seen: Incumbent,
    /// Wall-clock time of the run.
    pub elapsed: Duration,
}

impl fmt::Debug for FireflyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FireflyReport")
            .field("x", &format!("len={}", self.x.len()))
            .field("fun", &self.fun)
            .field("nit", &self.nit)
            .field("nfev", &self.nfev)
            .field("seed", &self.seed)
            .field("threads", &self.threads)
            .field("consistency", &self.consistency)
            .field("stop_reason", &self.stop_reason)
            .field("message", &self.message)
            .field(
                "population",
                &format!("{}x{}", self.population.nrows(), self.population.ncols()),
            )
            .field("best_seen", &self.best_seen.fun)
            .field("elapsed", &self.elapsed)
            .finish()
    }
}

/// Information passed to callback after each generation.
pub struct FireflyIntermediate {
    /// Generations completed so far (1-based).
    pub generation: usize,
    /// Randomization step used by that generation.
    pub alpha: f64,
    /// Best fitness in the current population.
    pub fun: f64,
    /// Position of the current best candidate.
    pub x: Array1<f64>,
    /// Mean fitness of the current population.
    pub mean_fitness: f64,
}

/// Action returned by callback to control optimization flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallbackAction {
    /// Continue optimization.
    Continue,
    /// Stop optimization early.
    Stop,
}

/// Firefly optimizer.
///
/// Use [`Firefly::new`] to validate a configuration against an objective,
/// then call [`solve`](Self::solve).
pub struct Firefly<'a> {
    objective: &'a ObjectiveDescriptor,
    config: FireflyConfig,
    dimension: usize,
    scheduler: GenerationScheduler,
}

impl<'a> Firefly<'a> {
    /// Creates an optimizer for `objective`.
    ///
    /// All setup validation happens here, before any evaluation.
    ///
    /// # Errors
    ///
    /// Returns `FireflyError::DimensionMismatch` if the objective cannot be
    /// evaluated at the requested dimension, `FireflyError::ResourceExhausted`
    /// if the population would exceed [`MAX_POPULATION_CELLS`], any error of
    /// [`FireflyConfig::validate`], or `FireflyError::ThreadPool` if the
    /// worker pool cannot be built.
    pub fn new(objective: &'a ObjectiveDescriptor, config: FireflyConfig) -> Result<Self> {
        let dimension = check_setup(objective, &config)?;
        let scheduler = GenerationScheduler::new(config.threads)?;
        Ok(Self {
            objective,
            config,
            dimension,
            scheduler,
        })
    }

    /// Mutable access to configuration. Changes are validated again by
    /// [`solve`](Self::solve).
    pub fn config_mut(&mut self) -> &mut FireflyConfig {
        &mut self.config
    }

    /// Problem dimension of this run.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Run the optimization and return a report
    ///
    /// # Errors
    ///
    /// Returns the same setup errors as [`Firefly::new`] when the
    /// configuration was made invalid through [`config_mut`](Self::config_mut).
    /// Nothing is evaluated in that case.
    pub fn solve(&mut self) -> Result<FireflyReport> {
        self.dimension = check_setup(self.objective, &self.config)?;
        if self
            .config
            .threads
            .is_some_and(|t| t != self.scheduler.threads())
        {
            self.scheduler = GenerationScheduler::new(self.config.threads)?;
        }

        let start = Instant::now();
        let rng_pool = RngPool::new(self.config.seed);
        let (lower, upper) = self.objective.bounds();
        let npop = self.config.population_size;
        let max_generations = self.config.max_generations;

        log::info!(
            "Firefly init: function={}, dimension={}, population={}, generations={}, threads={}, mode={:?}, seed={}",
            self.objective.name(),
            self.dimension,
            npop,
            max_generations,
            self.scheduler.threads(),
            self.config.consistency,
            rng_pool.base_seed()
        );
        if !self.objective.is_deterministic() {
            log::debug!(
                "objective '{}' is noisy; runs are not repeatable",
                self.objective.name()
            );
        }

        let mut pop = Population::initialize(
            self.objective,
            npop,
            self.dimension,
            &rng_pool,
            &self.scheduler,
        );
        let mut nfev = npop;
        let mut best_seen = incumbent_of(&pop, 0);
        log::debug!(
            "initial population: best={:.6e} mean={:.6e}",
            best_seen.fun,
            pop.mean_fitness()
        );

        let mut stop_reason = StopReason::MaxGenerations;
        let mut nit = 0;
        for generation in 0..max_generations {
            let alpha = self.config.alpha.alpha(generation, max_generations);
            let sweep = Sweep {
                objective: self.objective,
                params: MoveParams {
                    alpha,
                    beta0: self.config.beta0,
                    gamma: self.config.gamma,
                    lower,
                    upper,
                },
                rng_pool: &rng_pool,
                scheduler: &self.scheduler,
                generation,
            };

            pop = match self.config.consistency {
                ConsistencyMode::Generational => {
                    let (next, evals) = step_generational(&pop, &sweep);
                    nfev += evals;
                    next
                }
                ConsistencyMode::Live => {
                    let shared = SharedPopulation::from_population(&pop);
                    nfev += step_live(&shared, &sweep);
                    shared.to_population()
                }
            };
            nit = generation + 1;

            let (best_idx, best_fun) = pop.best();
            if best_fun < best_seen.fun {
                best_seen = incumbent_of(&pop, nit);
            }
            let mean_fitness = pop.mean_fitness();
            log::debug!(
                "generation {:>4}/{}: alpha={:.4} best={:.6e} mean={:.6e} best_seen={:.6e}",
                nit,
                max_generations,
                alpha,
                best_fun,
                mean_fitness,
                best_seen.fun
            );

            if let Some(ref mut cb) = self.config.callback {
                let intermediate = FireflyIntermediate {
                    generation: nit,
                    alpha,
                    fun: best_fun,
                    x: pop.position(best_idx).to_owned(),
                    mean_fitness,
                };
                if cb(&intermediate) == CallbackAction::Stop {
                    stop_reason = StopReason::Callback;
                    break;
                }
            }

            if let Some(limit) = self.config.max_duration
                && start.elapsed() >= limit
            {
                stop_reason = StopReason::Deadline;
                break;
            }
        }

        let message = match stop_reason {
            StopReason::MaxGenerations => {
                format!("Maximum generations reached: {}", max_generations)
            }
            StopReason::Callback => "Optimization stopped by callback".to_string(),
            StopReason::Deadline => format!(
                "Deadline of {:.3?} reached after {} generations",
                self.config.max_duration.unwrap_or_default(),
                nit
            ),
        };

        let (x, fun) = match self.config.incumbent {
            IncumbentPolicy::FinalPopulation => {
                let (_, f) = pop.best();
                (pop.best_position(), f)
            }
            IncumbentPolicy::BestEver => (best_seen.x.clone(), best_seen.fun),
        };
        let elapsed = start.elapsed();
        log::info!(
            "Firefly finished: {}; fun={:.6e}, nit={}, nfev={}, elapsed={:.3?}",
            message,
            fun,
            nit,
            nfev,
            elapsed
        );

        let (population, population_fitness) = pop.into_parts();
        Ok(FireflyReport {
            x,
            fun,
            nit,
            nfev,
            seed: rng_pool.base_seed(),
            threads: self.scheduler.threads(),
            consistency: self.config.consistency,
            stop_reason,
            message,
            population,
            population_fitness,
            best_seen,
            elapsed,
        })
    }
}

/// Validates `config` against `objective` and returns the problem dimension.
fn check_setup(objective: &ObjectiveDescriptor, config: &FireflyConfig) -> Result<usize> {
    config.validate()?;
    let dimension = config
        .dimension
        .unwrap_or_else(|| objective.default_dimension());
    objective.check_dimension(dimension)?;

    let cells = config.population_size.checked_mul(dimension);
    if cells.is_none_or(|c| c > MAX_POPULATION_CELLS) {
        return Err(FireflyError::ResourceExhausted {
            population: config.population_size,
            dimension,
            limit: MAX_POPULATION_CELLS,
        });
    }
    Ok(dimension)
}

fn incumbent_of(pop: &Population, generation: usize) -> Incumbent {
    let (_, fun) = pop.best();
    Incumbent {
        x: pop.best_position(),
        fun,
        generation,
    }
}
