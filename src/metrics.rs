//! Clustering quality metrics.
//!
//! Internal measures for scoring a finished partition against itself,
//! with no ground-truth labels involved.
//!
//! | Metric | Range | Best | Properties |
//! |--------|-------|------|------------|
//! | [`silhouette`] | [-1, 1] | 1 | Cohesion vs separation, per point and averaged |
//! | [`wcss`] | [0, ∞) | 0 | The k-means objective itself; not comparable across K |
//!
//! # Silhouette
//!
//! For each point `p` in cluster `c`:
//!
//! ```text
//! a(p) = mean distance from p to the other members of c
//! b(p) = min over c' != c of the mean distance from p to members of c'
//! s(p) = (b(p) - a(p)) / max(a(p), b(p))
//! ```
//!
//! Conventions: `a(p) = 0` when `p` is its cluster's only member, and
//! `s(p) = 0` when `max(a(p), b(p)) = 0` (coincident points), so the
//! score never divides by zero.
//!
//! Scoring runs the same row-range fork-join as the assignment stage:
//! each partition fills a disjoint slice of the per-point score array,
//! and the aggregate mean is taken single-threaded after the join.
//!
//! # References
//!
//! - Rousseeuw (1987). "Silhouettes: a graphical aid to the
//!   interpretation and validation of cluster analysis"

use log::debug;
use rayon::prelude::*;
use std::time::Instant;

use crate::cluster::{ClusterId, ClusterSet, Point};
use crate::error::{Error, Result};
use crate::exec::{partition, WorkerPool};

/// Per-point silhouette values and their mean.
#[derive(Debug, Clone)]
pub struct Silhouette {
    /// `s(p)` per input point, in input order.
    pub values: Vec<f64>,
    /// Arithmetic mean of `values`, in [-1, 1].
    pub mean: f64,
}

/// Silhouette coefficient of a finished clustering.
///
/// `points` must be the assigned sequence the cluster set was built
/// from, e.g. [`KmeansFit::points`](crate::cluster::KmeansFit); `threads`
/// sizes the scoring pool exactly as in [`Kmeans`](crate::cluster::Kmeans).
///
/// # Errors
///
/// - `EmptyInput` when `points` is empty.
/// - `EmptyClusterSet` when fewer than two clusters exist (with no
///   "other cluster", `b(p)` has no value; this covers K = 1) or any
///   point is still unassigned (clustering never ran).
/// - `DegenerateCluster` when a cluster has no members: its mean
///   distance is undefined, and scoring around it would report a quality
///   number for a partition that is not actually K-way.
pub fn silhouette(points: &[Point], clusters: &ClusterSet, threads: usize) -> Result<Silhouette> {
    if points.is_empty() {
        return Err(Error::EmptyInput);
    }
    if clusters.len() < 2 || points.iter().any(|p| p.cluster.is_none()) {
        return Err(Error::EmptyClusterSet);
    }
    for cluster in clusters.iter() {
        if cluster.is_empty() {
            return Err(Error::DegenerateCluster { id: cluster.id() });
        }
    }

    let pool = WorkerPool::new(threads)?;
    let start = Instant::now();
    let chunk = partition::chunk_len(points.len(), pool.threads());

    let mut values = vec![0.0; points.len()];
    pool.install(|| {
        values
            .par_chunks_mut(chunk)
            .zip(points.par_chunks(chunk))
            .for_each(|(out, range)| {
                for (slot, point) in out.iter_mut().zip(range) {
                    *slot = match point.cluster {
                        Some(own) => score_point(point, own, clusters),
                        // Unassigned points were rejected up front.
                        None => 0.0,
                    };
                }
            });
    });

    let mean = values.iter().sum::<f64>() / values.len() as f64;
    debug!(
        "silhouette over {} points, {} clusters: {mean:.4} ({:?})",
        points.len(),
        clusters.len(),
        start.elapsed()
    );
    Ok(Silhouette { values, mean })
}

/// `s(p)` for a single point.
fn score_point(point: &Point, own: ClusterId, clusters: &ClusterSet) -> f64 {
    let mut a = 0.0;
    let mut b = f64::INFINITY;
    for cluster in clusters.iter() {
        let members = cluster.members();
        let sum: f64 = members.iter().map(|m| point.distance(m)).sum();
        if cluster.id() == own {
            // `point` is among the members and contributes 0 to the sum;
            // a singleton cluster scores a = 0 by convention.
            a = if members.len() > 1 {
                sum / (members.len() - 1) as f64
            } else {
                0.0
            };
        } else {
            b = b.min(sum / members.len() as f64);
        }
    }

    let denom = a.max(b);
    if denom == 0.0 {
        0.0
    } else {
        (b - a) / denom
    }
}

/// Within-cluster sum of squares: `Σₖ Σ_{p ∈ Cₖ} ‖p − μₖ‖²`.
///
/// The objective k-means locally minimizes; lower means tighter
/// clusters. Empty clusters contribute nothing.
pub fn wcss(clusters: &ClusterSet) -> f64 {
    clusters
        .iter()
        .map(|cluster| {
            let centroid = cluster.centroid();
            cluster
                .members()
                .iter()
                .map(|m| m.distance_squared(&centroid))
                .sum::<f64>()
        })
        .sum()
}
