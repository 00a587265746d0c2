//! Margin preselection followed by K-Means over the preselected rows.

use tracing::info;

use cardinal_clustering::KMeans;
use cardinal_core::config::{CardinalConfig, ClusteringConfig};
use cardinal_core::errors::{CardinalResult, SamplingError};
use cardinal_core::traits::{IClusterer, IModel, IQuerySampler, IScorer};
use cardinal_core::{FeatureMatrix, Label};

use super::KMeansSampler;
use crate::selection::top_indices;
use crate::uncertainty::MarginScorer;
use crate::utils::{ensure_candidates, map_back};

/// Keeps the `beta * batch_size` least certain rows by margin, then picks
/// one row per K-Means cluster among them.
pub struct TwoStepKMeansSampler<M, C = KMeans> {
    batch_size: usize,
    beta: usize,
    scorer: MarginScorer<M>,
    kmeans: KMeansSampler<C>,
}

impl<M: IModel> TwoStepKMeansSampler<M, KMeans> {
    pub fn new(
        model: M,
        batch_size: usize,
        beta: usize,
        seed: Option<u64>,
    ) -> CardinalResult<Self> {
        let clusterer = KMeans::new(ClusteringConfig {
            seed,
            ..Default::default()
        });
        Self::with_clusterer(model, batch_size, beta, clusterer)
    }

    pub fn from_config(model: M, config: &CardinalConfig) -> CardinalResult<Self> {
        Self::with_clusterer(
            model,
            config.sampling.batch_size,
            config.two_step.beta,
            KMeans::new(config.clustering.clone()),
        )
    }
}

impl<M: IModel, C: IClusterer> TwoStepKMeansSampler<M, C> {
    pub fn with_clusterer(
        model: M,
        batch_size: usize,
        beta: usize,
        clusterer: C,
    ) -> CardinalResult<Self> {
        if beta == 0 {
            return Err(
                SamplingError::invalid_configuration("two-step beta must be at least 1").into(),
            );
        }
        Ok(Self {
            batch_size,
            beta,
            scorer: MarginScorer::new(model),
            kmeans: KMeansSampler::with_clusterer(batch_size, clusterer),
        })
    }

    pub fn beta(&self) -> usize {
        self.beta
    }
}

impl<M: IModel, C: IClusterer> IQuerySampler for TwoStepKMeansSampler<M, C> {
    fn name(&self) -> &str {
        "two_step_kmeans"
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn fit(&mut self, x: &FeatureMatrix, y: Option<&[Label]>) -> CardinalResult<()> {
        self.scorer.fit(x, y)
    }

    fn select_samples(&mut self, x: &FeatureMatrix) -> CardinalResult<Vec<usize>> {
        ensure_candidates(self.batch_size, x.n_rows())?;
        let scores = self.scorer.score_samples(x)?;
        let keep = self.beta.saturating_mul(self.batch_size).min(x.n_rows());
        let preselected = top_indices(&scores, keep);

        let subset = x.select_rows(&preselected)?;
        let inner = self.kmeans.select_samples(&subset)?;
        let selected = map_back(&preselected, &inner)?;
        info!(
            sampler = "two_step_kmeans",
            preselected = keep,
            batch_size = self.batch_size,
            pool_size = x.n_rows(),
            "two-step selection complete"
        );
        Ok(selected)
    }
}
