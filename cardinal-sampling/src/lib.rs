//! # cardinal-sampling
//!
//! Batch query samplers. Every sampler implements
//! [`cardinal_core::traits::IQuerySampler`] and depends on models, metrics
//! and clusterers only through the capability traits in `cardinal-core`.

pub mod clustering;
pub mod composition;
pub mod selection;
pub mod uncertainty;
pub mod utils;

pub use clustering::{KMeansClassSampler, KMeansSampler, TwoStepKMeansSampler};
pub use composition::{AdaptiveSampler, ChainSampler};
pub use selection::{RandomSampler, RankedBatchSampler, ScoredSampler};
pub use uncertainty::{ConfidenceScorer, EntropyScorer, MarginScorer};
pub use utils::pad_with_random;
