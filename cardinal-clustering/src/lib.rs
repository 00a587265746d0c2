//! # cardinal-clustering
//!
//! K-Means clustering used by the cluster-based samplers.

pub mod kmeans;

pub use kmeans::KMeans;
