//! Capability traits. Samplers depend only on these, never on concrete
//! models, metrics, or clustering algorithms.

pub mod clusterer;
pub mod metric;
pub mod model;
pub mod sampler;
pub mod scorer;

pub use clusterer::IClusterer;
pub use metric::IDistanceMetric;
pub use model::IModel;
pub use sampler::IQuerySampler;
pub use scorer::IScorer;
