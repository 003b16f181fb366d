//! Shared text-processing primitives used by the rule engine and the
//! unit extractor.

pub mod cleaner;
pub mod clusters;

pub use cleaner::clean;
pub use clusters::{clusters_to_string, into_clusters, str_into_clusters, Cluster};
