//! K-means clustering (Lloyd's algorithm) over planar points.
//!
//! Partitions a point sequence into K clusters by repeating two stages
//! as one round:
//!
//! 1. **Assign**: each point moves to the cluster with the nearest centroid.
//! 2. **Recompute**: each centroid moves to the mean of its members.
//!
//! Rounds repeat until no point changes cluster (`Converged`) or a fixed
//! round cap is hit (`RoundCapReached`); both are terminal, successful
//! outcomes. K-means is not guaranteed to settle within any fixed number
//! of rounds, so the cap bounds worst-case runtime.
//!
//! # Determinism
//!
//! For a fixed seed the result is identical for every thread count:
//!
//! - Assignment reads one snapshot of the centroids, taken before the
//!   stage forks; no partition observes another's writes.
//! - Nearest-centroid ties break toward the lowest cluster id.
//! - The per-partition stability flags reduce with a plain logical OR,
//!   so the early-exit decision does not depend on partition boundaries.
//! - Randomness only enters through seed selection, on the calling thread.
//!
//! # Failure Modes
//!
//! - **Local optima**: Lloyd's algorithm finds a local minimum of WCSS,
//!   not the global one.
//! - **Wrong k**: K is fixed up front; compare candidate values with
//!   [`crate::metrics::silhouette`] if it is not known.
//! - **Emptied clusters**: a cluster can lose every member mid-run; its
//!   centroid then freezes in place until points come back. The frozen
//!   centroid is never replaced with a NaN or a zero.

use log::{debug, info};
use rand::prelude::*;
use rand::seq::index;
use rayon::prelude::*;
use std::time::Instant;

use super::model::{Cluster, ClusterId, ClusterSet, Point};
use crate::error::{Error, Result};
use crate::exec::{partition, WorkerPool};

/// Default number of rounds before the run is cut off.
pub const DEFAULT_ROUND_CAP: usize = 10;

/// Terminal state of a clustering run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// No point changed cluster during the final round.
    Converged,
    /// The round cap was reached before assignments stabilized.
    RoundCapReached,
}

/// K-means clusterer for 2-D points.
#[derive(Debug, Clone)]
pub struct Kmeans {
    /// Number of clusters.
    k: usize,
    /// Maximum rounds per run.
    round_cap: usize,
    /// Worker threads for the parallel stages.
    threads: usize,
    /// Random seed for centroid seeding.
    seed: Option<u64>,
}

/// Result of a [`Kmeans::fit`] run.
#[derive(Debug, Clone)]
pub struct KmeansFit {
    /// Final clusters, each with its centroid and member list.
    pub clusters: ClusterSet,
    /// The input points with their final assignments, in input order.
    pub points: Vec<Point>,
    /// Rounds actually executed.
    pub rounds: usize,
    /// How the run ended.
    pub termination: Termination,
}

impl Kmeans {
    /// Create a new K-means clusterer.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            round_cap: DEFAULT_ROUND_CAP,
            threads: 1,
            seed: None,
        }
    }

    /// Set the round cap.
    pub fn with_round_cap(mut self, round_cap: usize) -> Self {
        self.round_cap = round_cap;
        self
    }

    /// Set the worker thread count for the parallel stages.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.threads = threads;
        self
    }

    /// Set random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Cluster `points` into K clusters.
    ///
    /// Validates the configuration before any thread is spawned, then
    /// seeds K clusters and runs assignment/recompute rounds until the
    /// assignments stabilize or the round cap is reached.
    pub fn fit(&self, points: &[Point]) -> Result<KmeansFit> {
        let n = points.len();
        if n == 0 {
            return Err(Error::EmptyInput);
        }
        if self.k < 1 || self.k > n {
            return Err(Error::InvalidClusterCount {
                requested: self.k,
                n_points: n,
            });
        }
        if self.round_cap == 0 {
            return Err(Error::InvalidParameter {
                name: "round_cap",
                message: "round cap must be at least 1",
            });
        }
        let pool = WorkerPool::new(self.threads)?;

        let start = Instant::now();
        let mut points = points.to_vec();
        let mut clusters = self.init_clusters(&mut points);

        let mut rounds = 0;
        let mut termination = Termination::RoundCapReached;
        for round in 1..=self.round_cap {
            rounds = round;
            let round_start = Instant::now();
            let changed = assign(&mut points, &clusters, &pool)?;
            rebuild_members(&points, &mut clusters);
            recompute_centroids(&mut clusters, &pool);
            debug!(
                "round {round}/{}: changed={changed} ({:?})",
                self.round_cap,
                round_start.elapsed()
            );
            if !changed {
                termination = Termination::Converged;
                break;
            }
        }

        info!(
            "k-means done: k={}, n={n}, rounds={rounds}, {termination:?} ({:?})",
            self.k,
            start.elapsed()
        );
        Ok(KmeansFit {
            clusters,
            points,
            rounds,
            termination,
        })
    }

    /// Pick K distinct seed points uniformly at random, without
    /// replacement; each becomes its cluster's initial centroid.
    fn init_clusters(&self, points: &mut [Point]) -> ClusterSet {
        let mut rng: Box<dyn RngCore> = match self.seed {
            Some(s) => Box::new(StdRng::seed_from_u64(s)),
            None => Box::new(rand::rng()),
        };

        let seeds = index::sample(&mut rng, points.len(), self.k);
        let mut clusters = Vec::with_capacity(self.k);
        for (i, idx) in seeds.iter().enumerate() {
            let id = i + 1;
            points[idx].cluster = Some(id);
            clusters.push(Cluster::new(id, points[idx]));
        }
        ClusterSet::new(clusters)
    }
}

/// Assignment stage: move every point to its nearest cluster.
///
/// The whole round reads one snapshot of the centroids; partitions write
/// disjoint point ranges only. Returns whether any point changed cluster.
fn assign(points: &mut [Point], clusters: &ClusterSet, pool: &WorkerPool) -> Result<bool> {
    if clusters.is_empty() {
        return Err(Error::EmptyClusterSet);
    }

    let snapshot: Vec<Point> = clusters.iter().map(Cluster::centroid).collect();
    let chunk = partition::chunk_len(points.len(), pool.threads());

    let changed = pool.install(|| {
        points
            .par_chunks_mut(chunk)
            .map(|range| {
                let mut changed = false;
                for point in range {
                    let nearest = nearest_cluster(point, &snapshot);
                    if point.cluster != Some(nearest) {
                        point.cluster = Some(nearest);
                        changed = true;
                    }
                }
                changed
            })
            .reduce(|| false, |a, b| a || b)
    });

    Ok(changed)
}

/// Id of the centroid nearest to `point`; ties break toward the lowest id.
///
/// `centroids[i]` belongs to cluster id `i + 1`. The slice is non-empty,
/// checked by the assignment stage before it forks.
fn nearest_cluster(point: &Point, centroids: &[Point]) -> ClusterId {
    let mut best_id = 1;
    let mut best_dist = point.distance_squared(&centroids[0]);
    for (i, centroid) in centroids.iter().enumerate().skip(1) {
        let dist = point.distance_squared(centroid);
        if dist < best_dist {
            best_dist = dist;
            best_id = i + 1;
        }
    }
    best_id
}

/// Scatter points into their clusters' member lists.
///
/// Single-threaded: a cheap gather from the shared point array into K
/// lists, rebuilt from scratch every round.
fn rebuild_members(points: &[Point], clusters: &mut ClusterSet) {
    for cluster in clusters.as_mut_slice() {
        cluster.clear_members();
    }
    for point in points {
        // Every point carries an id once the assignment stage has run.
        debug_assert!(point.cluster.is_some());
        if let Some(cluster) = point.cluster.and_then(|id| clusters.get_mut(id)) {
            cluster.push_member(*point);
        }
    }
}

/// Recompute stage: each centroid moves to the mean of its members, one
/// task per cluster. Empty clusters keep their previous centroid.
fn recompute_centroids(clusters: &mut ClusterSet, pool: &WorkerPool) {
    pool.install(|| {
        clusters
            .as_mut_slice()
            .par_iter_mut()
            .for_each(Cluster::recompute_centroid);
    });
}
