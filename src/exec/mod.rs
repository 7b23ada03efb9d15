//! Execution model: fixed worker pool + exact row partitioning.
//!
//! Every parallel stage follows the same fork-join shape: split the row
//! space into contiguous ranges with [`partition::ranges`] (or the
//! equivalent chunking), run one task per range on a [`WorkerPool`]
//! sized to the caller's thread count, and block on the join barrier
//! before the next stage reads any of the writes. Tasks within a stage
//! only ever write disjoint index ranges, so the stages need no locks;
//! the barrier is the only synchronization point.

pub mod partition;
mod pool;

pub use pool::WorkerPool;
