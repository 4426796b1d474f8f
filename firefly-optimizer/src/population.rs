use crate::objective::ObjectiveDescriptor;
use crate::rng_pool::RngPool;
use crate::scheduler::GenerationScheduler;
use ndarray::{Array1, Array2, ArrayView1};
use rand::Rng;

/// Positions (one row per candidate) and their fitness values.
#[derive(Debug, Clone)]
pub struct Population {
    positions: Array2<f64>,
    fitness: Array1<f64>,
}

impl Population {
    /// Draws `size` uniform positions in `[lower, upper]^dimension` and
    /// evaluates them, one candidate per task.
    pub fn initialize(
        objective: &ObjectiveDescriptor,
        size: usize,
        dimension: usize,
        rng_pool: &RngPool,
        scheduler: &GenerationScheduler,
    ) -> Self {
        let (lower, upper) = objective.bounds();
        let rows = scheduler.map_indexed(size, |i| {
            let mut rng = rng_pool.init_stream(i);
            let x: Array1<f64> = (0..dimension)
                .map(|_| lower + rng.random::<f64>() * (upper - lower))
                .collect();
            let fx = objective.evaluate(&x);
            (x, fx)
        });
        Self::from_rows(rows, dimension)
    }

    pub(crate) fn from_rows(rows: Vec<(Array1<f64>, f64)>, dimension: usize) -> Self {
        let mut positions = Array2::zeros((rows.len(), dimension));
        let mut fitness = Array1::zeros(rows.len());
        for (i, (x, fx)) in rows.into_iter().enumerate() {
            positions.row_mut(i).assign(&x);
            fitness[i] = fx;
        }
        Self { positions, fitness }
    }

    pub(crate) fn from_parts(positions: Array2<f64>, fitness: Array1<f64>) -> Self {
        debug_assert_eq!(positions.nrows(), fitness.len());
        Self { positions, fitness }
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.fitness.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.fitness.is_empty()
    }

    /// Problem dimension.
    pub fn dimension(&self) -> usize {
        self.positions.ncols()
    }

    /// All positions, one candidate per row.
    pub fn positions(&self) -> &Array2<f64> {
        &self.positions
    }

    /// Fitness of every candidate.
    pub fn fitness(&self) -> &Array1<f64> {
        &self.fitness
    }

    /// Position of candidate `i`.
    pub fn position(&self, i: usize) -> ArrayView1<'_, f64> {
        self.positions.row(i)
    }

    /// Index and fitness of the best candidate; ties go to the lowest index.
    pub fn best(&self) -> (usize, f64) {
        argmin(&self.fitness)
    }

    /// Copy of the best candidate's position.
    pub fn best_position(&self) -> Array1<f64> {
        let (i, _) = self.best();
        self.positions.row(i).to_owned()
    }

    /// Mean fitness over the population.
    pub fn mean_fitness(&self) -> f64 {
        self.fitness.mean().unwrap_or(f64::NAN)
    }

    /// Splits into positions and fitness.
    pub fn into_parts(self) -> (Array2<f64>, Array1<f64>) {
        (self.positions, self.fitness)
    }
}

fn argmin(v: &Array1<f64>) -> (usize, f64) {
    let mut best_i = 0usize;
    let mut best_v = v.first().copied().unwrap_or(f64::INFINITY);
    for (i, &val) in v.iter().enumerate() {
        if val < best_v {
            best_v = val;
            best_i = i;
        }
    }
    (best_i, best_v)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function_registry::ObjectiveRegistry;
    use ndarray::array;

    #[test]
    fn test_initialize_within_bounds() {
        let registry = ObjectiveRegistry::new();
        let sphere = registry.get("sphere").unwrap();
        let scheduler = GenerationScheduler::new(Some(2)).unwrap();
        let pool = RngPool::new(Some(11));

        let pop = Population::initialize(sphere, 40, 3, &pool, &scheduler);

        assert_eq!(pop.len(), 40);
        assert_eq!(pop.dimension(), 3);
        assert!(pop.positions().iter().all(|&v| (-5.0..=5.0).contains(&v)));
        for i in 0..pop.len() {
            let expected = sphere.evaluate(&pop.position(i).to_owned());
            assert_eq!(pop.fitness()[i], expected);
        }
    }

    #[test]
    fn test_initialize_ignores_thread_count() {
        let registry = ObjectiveRegistry::new();
        let rastrigin = registry.get("rastrigin").unwrap();
        let pool = RngPool::new(Some(5));

        let one = GenerationScheduler::new(Some(1)).unwrap();
        let four = GenerationScheduler::new(Some(4)).unwrap();
        let a = Population::initialize(rastrigin, 25, 4, &pool, &one);
        let b = Population::initialize(rastrigin, 25, 4, &pool, &four);

        assert_eq!(a.positions(), b.positions());
        assert_eq!(a.fitness(), b.fitness());
    }

    #[test]
    fn test_best_prefers_lowest_index_on_ties() {
        let pop = Population::from_parts(
            array![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]],
            array![3.0, 1.0, 1.0],
        );
        assert_eq!(pop.best(), (1, 1.0));
        assert_eq!(pop.best_position(), array![1.0, 1.0]);
        assert!((pop.mean_fitness() - 5.0 / 3.0).abs() < 1e-12);
    }
}
