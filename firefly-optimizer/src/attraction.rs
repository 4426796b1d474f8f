//! Attraction move and per-candidate generation update.

use crate::objective::ObjectiveDescriptor;
use crate::population::Population;
use crate::shared_population::SharedPopulation;
use ndarray::{Array1, ArrayView1};
use rand::Rng;

/// Coefficients of one attraction move.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveParams {
    /// Randomization step size for the current generation.
    pub alpha: f64,
    /// Attractiveness at zero distance.
    pub beta0: f64,
    /// Light absorption coefficient.
    pub gamma: f64,
    /// Lower bound of every coordinate.
    pub lower: f64,
    /// Upper bound of every coordinate.
    pub upper: f64,
}

/// Squared Euclidean distance between two positions.
pub fn squared_distance(a: ArrayView1<f64>, b: ArrayView1<f64>) -> f64 {
    a.iter().zip(b.iter()).map(|(x, y)| (x - y) * (x - y)).sum()
}

/// Moves `xi` toward the brighter `xj`.
///
/// With `r2 = |xi - xj|^2` and `beta = beta0 * exp(-gamma * r2)`, every
/// coordinate becomes `xi[k] + beta * (xj[k] - xi[k]) + alpha * (u - 0.5)`
/// for a fresh uniform `u` in `[0, 1)`, clamped to `[lower, upper]`.
pub fn attract<R: Rng + ?Sized>(
    xi: &mut Array1<f64>,
    xj: ArrayView1<f64>,
    params: &MoveParams,
    rng: &mut R,
) {
    let r2 = squared_distance(xi.view(), xj);
    let beta = params.beta0 * (-params.gamma * r2).exp();
    for (a, &b) in xi.iter_mut().zip(xj.iter()) {
        let step = beta * (b - *a) + params.alpha * (rng.random::<f64>() - 0.5);
        *a = (*a + step).clamp(params.lower, params.upper);
    }
}

/// Read access to the neighbours a candidate compares itself against.
pub(crate) trait Neighbours: Sync {
    fn len(&self) -> usize;
    fn fitness(&self, j: usize) -> f64;
    fn load_position(&self, j: usize, out: &mut Array1<f64>);
}

impl Neighbours for Population {
    fn len(&self) -> usize {
        Population::len(self)
    }

    fn fitness(&self, j: usize) -> f64 {
        self.fitness()[j]
    }

    fn load_position(&self, j: usize, out: &mut Array1<f64>) {
        out.assign(&self.position(j));
    }
}

impl Neighbours for SharedPopulation {
    fn len(&self) -> usize {
        SharedPopulation::len(self)
    }

    fn fitness(&self, j: usize) -> f64 {
        SharedPopulation::fitness(self, j)
    }

    fn load_position(&self, j: usize, out: &mut Array1<f64>) {
        self.read_row(j, out);
    }
}

/// Final state of one candidate after its pass over the neighbours.
#[derive(Debug, Clone)]
pub(crate) struct CandidateUpdate {
    pub position: Array1<f64>,
    pub fitness: f64,
    pub moves: usize,
}

/// Runs candidate `i`'s pass over every other candidate in index order.
///
/// Each strictly brighter neighbour triggers a move followed by a fresh
/// evaluation; the new position is kept even when it is worse. `publish` is
/// called after every move.
#[allow(clippy::too_many_arguments)]
pub(crate) fn update_candidate<N, R, P>(
    i: usize,
    neighbours: &N,
    mut position: Array1<f64>,
    mut fitness: f64,
    objective: &ObjectiveDescriptor,
    params: &MoveParams,
    rng: &mut R,
    mut publish: P,
) -> CandidateUpdate
where
    N: Neighbours + ?Sized,
    R: Rng + ?Sized,
    P: FnMut(&Array1<f64>, f64),
{
    let mut other = Array1::zeros(position.len());
    let mut moves = 0;
    for j in 0..neighbours.len() {
        if j == i || neighbours.fitness(j) >= fitness {
            continue;
        }
        neighbours.load_position(j, &mut other);
        attract(&mut position, other.view(), params, rng);
        fitness = objective.evaluate(&position);
        moves += 1;
        publish(&position, fitness);
    }
    CandidateUpdate {
        position,
        fitness,
        moves,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::{DimensionConstraint, FnObjective};
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn params(alpha: f64, beta0: f64, gamma: f64) -> MoveParams {
        MoveParams {
            alpha,
            beta0,
            gamma,
            lower: -5.0,
            upper: 5.0,
        }
    }

    fn sphere() -> ObjectiveDescriptor {
        ObjectiveDescriptor::new(
            "sphere",
            DimensionConstraint::Any,
            (-5.0, 5.0),
            FnObjective::new(|x: &Array1<f64>| x.iter().map(|v| v * v).sum()),
        )
        .unwrap()
    }

    #[test]
    fn test_full_attraction_without_noise_lands_on_neighbour() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut xi = array![1.0, 1.0];
        let xj = array![0.0, 0.0];
        // gamma = 0 makes beta = beta0 = 1 regardless of distance.
        attract(&mut xi, xj.view(), &params(0.0, 1.0, 0.0), &mut rng);
        assert_eq!(xi, xj);
    }

    #[test]
    fn test_attraction_decays_with_distance() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut near = array![0.5];
        let mut far = array![3.0];
        let target = array![0.0];
        attract(&mut near, target.view(), &params(0.0, 1.0, 1.0), &mut rng);
        attract(&mut far, target.view(), &params(0.0, 1.0, 1.0), &mut rng);

        let expected_near = 0.5 - 0.5 * (-0.25f64).exp();
        assert!((near[0] - expected_near).abs() < 1e-12);
        assert!((3.0 - far[0]) < 1e-3);
    }

    #[test]
    fn test_noise_is_bounded_and_clamped() {
        let mut rng = StdRng::seed_from_u64(9);
        let p = params(0.4, 0.0, 1.0);
        for _ in 0..200 {
            let mut x = array![4.95, -4.95, 0.0];
            attract(&mut x, array![0.0, 0.0, 0.0].view(), &p, &mut rng);
            assert!(x.iter().all(|&v| (-5.0..=5.0).contains(&v)));
            assert!((x[2]).abs() <= 0.2);
        }
    }

    #[test]
    fn test_update_skips_self_and_ties() {
        let pop = Population::from_parts(
            array![[1.0, 0.0], [2.0, 0.0], [1.0, 0.0]],
            array![1.0, 4.0, 1.0],
        );
        let objective = sphere();
        let mut rng = StdRng::seed_from_u64(3);

        let start = pop.position(0).to_owned();
        let update = update_candidate(
            0,
            &pop,
            start.clone(),
            1.0,
            &objective,
            &params(0.2, 1.0, 1.0),
            &mut rng,
            |_, _| {},
        );

        // Candidate 2 is equally bright, candidate 1 is dimmer.
        assert_eq!(update.moves, 0);
        assert_eq!(update.position, start);
        assert_eq!(update.fitness, 1.0);
    }

    #[test]
    fn test_update_compares_against_evolving_fitness() {
        // After moving onto candidate 1 the mover is as bright as candidate 2
        // and must not move again.
        let pop = Population::from_parts(
            array![[3.0], [0.0], [0.0]],
            array![9.0, 0.0, 0.0],
        );
        let objective = sphere();
        let mut rng = StdRng::seed_from_u64(3);
        let mut published = Vec::new();

        let update = update_candidate(
            0,
            &pop,
            array![3.0],
            9.0,
            &objective,
            &params(0.0, 1.0, 0.0),
            &mut rng,
            |x, fx| published.push((x[0], fx)),
        );

        assert_eq!(update.moves, 1);
        assert_eq!(update.position, array![0.0]);
        assert_eq!(update.fitness, 0.0);
        assert_eq!(published, vec![(0.0, 0.0)]);
    }

    #[test]
    fn test_move_is_kept_unconditionally() {
        // Pure noise step: no attraction, the new position is kept as is.
        let pop = Population::from_parts(array![[0.1], [0.0]], array![0.01, 0.0]);
        let objective = sphere();
        let mut rng = StdRng::seed_from_u64(17);
        let update = update_candidate(
            0,
            &pop,
            array![0.1],
            0.01,
            &objective,
            &params(4.0, 0.0, 1.0),
            &mut rng,
            |_, _| {},
        );
        assert_eq!(update.moves, 1);
        assert_eq!(update.fitness, objective.evaluate(&update.position));
        assert_ne!(update.position, array![0.1]);
    }
}
