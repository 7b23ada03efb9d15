use core::fmt;

/// Result alias for `parcel`.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by the clustering engine and the quality metrics.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// Input point sequence was empty.
    EmptyInput,

    /// Invalid number of clusters requested.
    InvalidClusterCount {
        /// Requested count.
        requested: usize,
        /// Number of input points.
        n_points: usize,
    },

    /// Invalid configuration value.
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Error message.
        message: &'static str,
    },

    /// Assignment or scoring was attempted without an initialized cluster set
    /// (for scoring this includes a set with fewer than two clusters, since
    /// no "other cluster" exists to compare against).
    EmptyClusterSet,

    /// A cluster required for scoring has no members, so its mean distance
    /// is undefined.
    DegenerateCluster {
        /// Id of the empty cluster.
        id: usize,
    },

    /// Generic error with message.
    Other(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::EmptyInput => write!(f, "empty input provided"),
            Error::InvalidClusterCount {
                requested,
                n_points,
            } => {
                write!(f, "cannot create {requested} clusters from {n_points} points")
            }
            Error::InvalidParameter { name, message } => {
                write!(f, "invalid parameter '{name}': {message}")
            }
            Error::EmptyClusterSet => write!(f, "no clusters available"),
            Error::DegenerateCluster { id } => {
                write!(f, "cluster {id} has no members")
            }
            Error::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}
