//! Samplers built from other samplers.

pub mod adaptive;
pub mod chain;

pub use adaptive::AdaptiveSampler;
pub use chain::ChainSampler;
