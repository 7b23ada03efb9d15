//! K-means clustering of planar points.
//!
//! The engine consumes an ordered sequence of pre-normalized 2-D
//! [`Point`]s and partitions it into exactly K [`Cluster`]s by Lloyd's
//! algorithm: assign every point to its nearest centroid, move every
//! centroid to the mean of its members, repeat. Rounds stop as soon as
//! no assignment changes, or at a fixed round cap.
//!
//! **Objective**: minimize the within-cluster sum of squares:
//!
//! ```text
//! J = Σ_k Σ_{p ∈ C_k} ||p - μ_k||²
//! ```
//!
//! **Assumptions**:
//! - Clusters are roughly spherical and of similar size
//! - K is known in advance (compare candidates with
//!   [`crate::metrics::silhouette`])
//! - Coordinates are already scaled into a bounded range; the engine
//!   never rescales
//!
//! ## Usage
//!
//! ```rust
//! use parcel::cluster::{Kmeans, Point, Termination};
//!
//! let points = vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(0.1, 0.1),
//!     Point::new(1.0, 1.0),
//!     Point::new(0.9, 1.0),
//! ];
//!
//! let fit = Kmeans::new(2).with_seed(42).fit(&points).unwrap();
//!
//! assert_eq!(fit.clusters.len(), 2);
//! assert_eq!(fit.termination, Termination::Converged);
//! // First two points together, separate from the last two.
//! assert_eq!(fit.points[0].cluster, fit.points[1].cluster);
//! assert_ne!(fit.points[0].cluster, fit.points[3].cluster);
//! ```

mod kmeans;
mod model;

pub use kmeans::{Kmeans, KmeansFit, Termination, DEFAULT_ROUND_CAP};
pub use model::{Cluster, ClusterId, ClusterSet, Point};
