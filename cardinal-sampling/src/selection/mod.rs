//! Selection policies over a single pool.

pub mod random;
pub mod ranked_batch;
pub mod scored;

pub use random::RandomSampler;
pub use ranked_batch::RankedBatchSampler;
pub use scored::{top_indices, weighted_choice, ScoredSampler};
