//! Samplers that spread the batch over clusters of the pool.

pub mod class_sampler;
pub mod kmeans_sampler;
pub mod two_step;

pub use class_sampler::KMeansClassSampler;
pub use kmeans_sampler::KMeansSampler;
pub use two_step::TwoStepKMeansSampler;
