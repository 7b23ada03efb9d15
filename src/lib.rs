//! # parcel
//!
//! Partitions a planar point set into K clusters with Lloyd's k-means and
//! scores the partition with the mean silhouette coefficient.
//!
//! The engine consumes an ordered sequence of pre-normalized [`Point`]s
//! plus a caller-supplied thread count; every parallel stage (point
//! assignment, centroid recompute, silhouette scoring) runs as a
//! fork-join over a fixed pool of exactly that many workers. For a fixed
//! seed the result is identical for every thread count.
//!
//! ```rust
//! use parcel::{metrics, Kmeans, Point};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.0, 0.1),
//!     Point::new(0.9, 1.0),
//!     Point::new(1.0, 1.0),
//! ];
//!
//! let fit = Kmeans::new(2).with_seed(42).with_threads(2).fit(&points)?;
//! let quality = metrics::silhouette(&fit.points, &fit.clusters, 2)?;
//!
//! assert_eq!(fit.clusters.len(), 2);
//! assert!(quality.mean > 0.5);
//! # Ok::<(), parcel::Error>(())
//! ```

pub mod cluster;
/// Error types used across `parcel`.
pub mod error;
pub mod exec;
pub mod metrics;

#[cfg(test)]
mod pipeline_tests;

pub use cluster::{
    Cluster, ClusterId, ClusterSet, Kmeans, KmeansFit, Point, Termination, DEFAULT_ROUND_CAP,
};
pub use error::{Error, Result};
pub use exec::WorkerPool;
pub use metrics::{silhouette, wcss, Silhouette};
