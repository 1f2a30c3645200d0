//! Resolving the requested degree of parallelism into a worker pool.

use rayon::prelude::*;

use crate::{PairwiseError, Result};

/// How a computation is spread over threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Jobs {
    /// Run on the calling thread.
    Sequential,
    /// Run on a dedicated pool with the given number of threads.
    Parallel(usize),
}

impl Jobs {
    /// Resolves `n_jobs` against the compute units available to the process.
    ///
    /// * `n_jobs <= 0` uses all available compute units.
    /// * `n_jobs == 1` is strictly sequential.
    /// * `n_jobs == k` uses exactly `k` threads.
    ///
    /// # Errors
    ///
    /// * If the available parallelism cannot be determined.
    /// * If `n_jobs` exceeds the available parallelism.
    pub fn resolve(n_jobs: i32) -> Result<Self> {
        if n_jobs == 1 {
            return Ok(Self::Sequential);
        }

        let available = std::thread::available_parallelism()
            .map_err(|e| PairwiseError::Resource(format!("Could not determine available parallelism: {e}")))?
            .get();

        let requested = match usize::try_from(n_jobs) {
            Ok(k) if k > 0 => k,
            _ => available,
        };

        if requested > available {
            return Err(PairwiseError::Resource(format!(
                "Requested {requested} jobs but only {available} compute units are available."
            )));
        }

        Ok(if requested == 1 {
            Self::Sequential
        } else {
            Self::Parallel(requested)
        })
    }

    /// The number of threads that will do the work.
    #[must_use]
    pub const fn num_threads(&self) -> usize {
        match self {
            Self::Sequential => 1,
            Self::Parallel(k) => *k,
        }
    }

    /// Runs `op` with the resolved parallelism.
    ///
    /// For `Parallel(k)`, a fresh pool of `k` threads is built and `op` runs
    /// inside it, so every `rayon` parallel iterator in `op` uses that pool.
    /// For `Sequential`, `op` runs directly on the calling thread. Use
    /// [`Jobs::for_each`] or [`Jobs::map`] for work that must not touch the
    /// global pool in that case.
    ///
    /// # Errors
    ///
    /// * If the pool cannot be built.
    pub fn install<R, F>(&self, op: F) -> Result<R>
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        match self {
            Self::Sequential => Ok(op()),
            Self::Parallel(k) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(*k)
                    .thread_name(|i| format!("nichespace-{i}"))
                    .build()
                    .map_err(|e| PairwiseError::Resource(format!("Could not build a pool of {k} threads: {e}")))?;
                Ok(pool.install(op))
            }
        }
    }

    /// Applies `op` to every item, on the calling thread for `Sequential`
    /// and on a dedicated pool for `Parallel`.
    ///
    /// # Errors
    ///
    /// See [`Jobs::install`].
    pub fn for_each<I, F>(&self, items: Vec<I>, op: F) -> Result<()>
    where
        I: Send,
        F: Fn(I) + Send + Sync,
    {
        match self {
            Self::Sequential => {
                items.into_iter().for_each(op);
                Ok(())
            }
            Self::Parallel(_) => self.install(|| items.into_par_iter().for_each(op)),
        }
    }

    /// Maps `op` over every item, keeping the order of the items.
    ///
    /// # Errors
    ///
    /// See [`Jobs::install`].
    pub fn map<I, R, F>(&self, items: Vec<I>, op: F) -> Result<Vec<R>>
    where
        I: Send,
        R: Send,
        F: Fn(I) -> R + Send + Sync,
    {
        match self {
            Self::Sequential => Ok(items.into_iter().map(op).collect()),
            Self::Parallel(_) => self.install(|| items.into_par_iter().map(op).collect()),
        }
    }
}
