//! # cardinal-distance
//!
//! Metric primitive: named distance functions plus the pairwise and
//! nearest-neighbor reductions the samplers need. Every reduction is
//! row-parallel (rayon) and deterministic.

pub mod metric;
pub mod pairwise;

pub use metric::Metric;
pub use pairwise::{
    distances_to_point, pairwise_distances, pairwise_distances_argmin_min, similarity,
};
