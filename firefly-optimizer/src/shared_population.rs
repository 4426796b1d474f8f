//! Population store for live updates.
//!
//! Workers publish every accepted move immediately, so a candidate processed
//! later in the same generation may see a neighbour's already-moved position.
//! Each cell is an atomic `f64`, so concurrent reads and writes are well
//! defined. A reader may still observe a row that is partly old and partly
//! new; the algorithm tolerates that. Row `i` is only ever written by the task
//! that owns candidate `i`.

use crate::population::Population;
use ndarray::{Array1, Array2};
use std::sync::atomic::{AtomicU64, Ordering};

struct AtomicF64(AtomicU64);

impl AtomicF64 {
    fn new(v: f64) -> Self {
        AtomicF64(AtomicU64::new(v.to_bits()))
    }

    #[inline]
    fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    fn store(&self, v: f64) {
        self.0.store(v.to_bits(), Ordering::Relaxed)
    }
}

pub(crate) struct SharedPopulation {
    dimension: usize,
    positions: Vec<AtomicF64>,
    fitness: Vec<AtomicF64>,
}

impl SharedPopulation {
    pub(crate) fn from_population(pop: &Population) -> Self {
        Self {
            dimension: pop.dimension(),
            positions: pop.positions().iter().map(|&v| AtomicF64::new(v)).collect(),
            fitness: pop.fitness().iter().map(|&v| AtomicF64::new(v)).collect(),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.fitness.len()
    }

    pub(crate) fn dimension(&self) -> usize {
        self.dimension
    }

    pub(crate) fn fitness(&self, i: usize) -> f64 {
        self.fitness[i].load()
    }

    pub(crate) fn read_row(&self, i: usize, out: &mut Array1<f64>) {
        let row = &self.positions[i * self.dimension..(i + 1) * self.dimension];
        for (dst, cell) in out.iter_mut().zip(row) {
            *dst = cell.load();
        }
    }

    pub(crate) fn row(&self, i: usize) -> Array1<f64> {
        let mut out = Array1::zeros(self.dimension);
        self.read_row(i, &mut out);
        out
    }

    /// Publishes a moved position and its fitness.
    pub(crate) fn publish(&self, i: usize, x: &Array1<f64>, fx: f64) {
        let row = &self.positions[i * self.dimension..(i + 1) * self.dimension];
        for (cell, &v) in row.iter().zip(x.iter()) {
            cell.store(v);
        }
        self.fitness[i].store(fx);
    }

    /// Copies the store back into a plain population. Only meaningful once
    /// every worker has passed the generation barrier.
    pub(crate) fn to_population(&self) -> Population {
        let d = self.dimension;
        let positions = Array2::from_shape_fn((self.len(), d), |(i, k)| {
            self.positions[i * d + k].load()
        });
        let fitness = self.fitness.iter().map(AtomicF64::load).collect();
        Population::from_parts(positions, fitness)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_round_trip_keeps_row_major_layout() {
        let pop = Population::from_parts(
            array![[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]],
            array![0.0, 1.0],
        );
        let back = SharedPopulation::from_population(&pop).to_population();
        assert_eq!(back.positions(), pop.positions());
        assert_eq!(back.fitness(), pop.fitness());
    }

    #[test]
    fn test_round_trip() {
        let pop = Population::from_parts(array![[1.0, 2.0], [3.0, 4.0]], array![5.0, 25.0]);
        let shared = SharedPopulation::from_population(&pop);

        assert_eq!(shared.len(), 2);
        assert_eq!(shared.dimension(), 2);
        assert_eq!(shared.row(1), array![3.0, 4.0]);
        assert_eq!(shared.fitness(0), 5.0);

        shared.publish(1, &array![0.5, -0.5], 0.5);
        let back = shared.to_population();
        assert_eq!(back.positions(), &array![[1.0, 2.0], [0.5, -0.5]]);
        assert_eq!(back.fitness(), &array![5.0, 0.5]);
    }

    #[test]
    fn test_concurrent_publish() {
        let pop = Population::from_parts(Array2::zeros((8, 3)), Array1::zeros(8));
        let shared = SharedPopulation::from_population(&pop);

        std::thread::scope(|s| {
            for i in 0..8 {
                let shared = &shared;
                s.spawn(move || {
                    for step in 0..100 {
                        let v = (i * 100 + step) as f64;
                        shared.publish(i, &Array1::from_elem(3, v), v);
                        let mut seen = Array1::zeros(3);
                        shared.read_row((i + 1) % 8, &mut seen);
                        assert!(seen.iter().all(|x| x.is_finite()));
                    }
                });
            }
        });

        let back = shared.to_population();
        for i in 0..8 {
            let last = (i * 100 + 99) as f64;
            assert_eq!(back.fitness()[i], last);
            assert!(back.position(i).iter().all(|&x| x == last));
        }
    }
}
