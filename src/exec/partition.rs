//! Exact row-range partitioning.
//!
//! Parallel stages split the point sequence into at most T contiguous
//! ranges, one per worker. The union of the ranges must equal `[0, N)`
//! with no gap and no overlap for every (N, T): range ends are clamped
//! to N and boundary indices are never shared between neighbors.

use std::ops::Range;

/// Length of each contiguous chunk when splitting `n` rows across
/// `tasks` workers: ceiling division, never below 1.
///
/// A task count of zero is treated as one.
pub fn chunk_len(n: usize, tasks: usize) -> usize {
    n.div_ceil(tasks.max(1)).max(1)
}

/// The contiguous row ranges covering `[0, n)` for `tasks` workers.
///
/// Produces at most `tasks` ranges; fewer when `n < tasks` (each row then
/// gets its own range) and none when `n == 0`. The last range's end is
/// clamped to `n`.
pub fn ranges(n: usize, tasks: usize) -> Vec<Range<usize>> {
    let len = chunk_len(n, tasks);
    (0..n)
        .step_by(len)
        .map(|start| start..usize::min(start + len, n))
        .collect()
}
