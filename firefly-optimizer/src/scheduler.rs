//! Per-run worker pool and generation barrier.

use crate::error::Result;
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

/// Runs one bulk-parallel phase at a time on a pool owned by a single run.
///
/// Candidates are handed out one index per task, so idle workers steal
/// whatever is left. [`map_indexed`](Self::map_indexed) returns only after
/// every index has been processed, which is the generation barrier.
pub struct GenerationScheduler {
    pool: ThreadPool,
}

impl GenerationScheduler {
    /// Builds a pool with `threads` workers, or rayon's default when `None`.
    ///
    /// # Errors
    ///
    /// Returns `FireflyError::ThreadPool` if the OS refuses to spawn workers.
    pub fn new(threads: Option<usize>) -> Result<Self> {
        let mut builder =
            ThreadPoolBuilder::new().thread_name(|i| format!("firefly-worker-{i}"));
        if let Some(n) = threads {
            builder = builder.num_threads(n);
        }
        let pool = builder.build()?;
        Ok(Self { pool })
    }

    /// Number of workers in the pool.
    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Applies `f` to every index in `0..count` exactly once and collects the
    /// results in index order.
    pub fn map_indexed<T, F>(&self, count: usize, f: F) -> Vec<T>
    where
        T: Send,
        F: Fn(usize) -> T + Send + Sync,
    {
        self.pool
            .install(|| (0..count).into_par_iter().with_max_len(1).map(f).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn test_every_index_runs_exactly_once() {
        let scheduler = GenerationScheduler::new(Some(4)).unwrap();
        let counts: Vec<AtomicUsize> = (0..257).map(|_| AtomicUsize::new(0)).collect();

        let out = scheduler.map_indexed(counts.len(), |i| {
            counts[i].fetch_add(1, Ordering::Relaxed);
            i * 2
        });

        assert!(counts.iter().all(|c| c.load(Ordering::Relaxed) == 1));
        assert_eq!(out, (0..257).map(|i| i * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_worker_count() {
        let scheduler = GenerationScheduler::new(Some(3)).unwrap();
        assert_eq!(scheduler.threads(), 3);

        let names = Mutex::new(HashSet::new());
        scheduler.map_indexed(64, |_| {
            let name = std::thread::current().name().map(str::to_string);
            names.lock().unwrap().insert(name);
        });
        let names = names.into_inner().unwrap();
        assert!(names.len() <= 3);
        assert!(
            names
                .iter()
                .all(|n| n.as_deref().is_some_and(|n| n.starts_with("firefly-worker-")))
        );
    }

    #[test]
    fn test_empty_phase() {
        let scheduler = GenerationScheduler::new(Some(2)).unwrap();
        let out: Vec<usize> = scheduler.map_indexed(0, |i| i);
        assert!(out.is_empty());
    }

    #[test]
    fn test_independent_pools() {
        let a = GenerationScheduler::new(Some(1)).unwrap();
        let b = GenerationScheduler::new(Some(2)).unwrap();
        let left = a.map_indexed(10, |i| i + 1);
        let right = b.map_indexed(10, |i| i + 1);
        assert_eq!(left, right);
    }
}
