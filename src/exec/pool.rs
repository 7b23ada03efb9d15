//! Fixed-size fork-join worker pool.
//!
//! One pool is built per run with exactly the caller-supplied thread
//! count and reused for every parallel stage; stages submit their
//! partitions and block on the join barrier before the next stage
//! starts. The global rayon pool is never used, so T is exact rather
//! than advisory.

use core::fmt;

use crate::error::{Error, Result};

/// A worker pool with a fixed, caller-chosen thread count.
pub struct WorkerPool {
    pool: rayon::ThreadPool,
    threads: usize,
}

impl WorkerPool {
    /// Build a pool with exactly `threads` workers.
    ///
    /// Fails with `InvalidParameter` when `threads` is zero.
    pub fn new(threads: usize) -> Result<Self> {
        if threads == 0 {
            return Err(Error::InvalidParameter {
                name: "threads",
                message: "thread count must be at least 1",
            });
        }
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build()
            .map_err(|e| Error::Other(e.to_string()))?;
        Ok(Self { pool, threads })
    }

    /// Configured thread count.
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Run `op` on the pool, blocking until it and all parallel work it
    /// spawns have completed. This is the per-stage join barrier.
    pub fn install<OP, R>(&self, op: OP) -> R
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        self.pool.install(op)
    }
}

impl fmt::Debug for WorkerPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkerPool")
            .field("threads", &self.threads)
            .finish()
    }
}
