//! Per-cluster margin selection, one cluster per class.

use std::collections::BTreeSet;

use rand::rngs::StdRng;
use tracing::{debug, info};

use cardinal_clustering::KMeans;
use cardinal_core::config::ClusteringConfig;
use cardinal_core::errors::{CardinalResult, SamplingError};
use cardinal_core::traits::{IClusterer, IModel, IQuerySampler, IScorer};
use cardinal_core::{FeatureMatrix, Label};

use crate::selection::top_indices;
use crate::uncertainty::MarginScorer;
use crate::utils::{ensure_candidates, make_rng, pad_with_random};

/// Clusters the pool into `n_classes` groups and takes the least certain
/// rows of each group by margin. Short selections are padded with random
/// rows up to `batch_size`.
pub struct KMeansClassSampler<M, C = KMeans> {
    batch_size: usize,
    n_classes: usize,
    scorer: MarginScorer<M>,
    clusterer: C,
    rng: StdRng,
}

impl<M: IModel> KMeansClassSampler<M, KMeans> {
    pub fn new(
        model: M,
        batch_size: usize,
        n_classes: usize,
        seed: Option<u64>,
    ) -> CardinalResult<Self> {
        let clusterer = KMeans::new(ClusteringConfig {
            seed,
            ..Default::default()
        });
        Self::with_clusterer(model, batch_size, n_classes, clusterer, seed)
    }
}

impl<M: IModel, C: IClusterer> KMeansClassSampler<M, C> {
    pub fn with_clusterer(
        model: M,
        batch_size: usize,
        n_classes: usize,
        clusterer: C,
        seed: Option<u64>,
    ) -> CardinalResult<Self> {
        if n_classes == 0 {
            return Err(
                SamplingError::invalid_configuration("n_classes must be at least 1").into(),
            );
        }
        Ok(Self {
            batch_size,
            n_classes,
            scorer: MarginScorer::new(model),
            clusterer,
            rng: make_rng(seed),
        })
    }

    pub fn n_classes(&self) -> usize {
        self.n_classes
    }
}

impl<M: IModel, C: IClusterer> IQuerySampler for KMeansClassSampler<M, C> {
    fn name(&self) -> &str {
        "kmeans_class"
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
        let clustering = self.clusterer.cluster(x, self.n_classes)?;
        let per_cluster = self.batch_size / self.n_classes;

        let mut selected = BTreeSet::new();
        for cluster in 0..clustering.n_clusters() {
            let members = clustering.members(cluster);
            let local: Vec<f64> = members.iter().map(|&i| scores[i]).collect();
            let k = per_cluster.min(members.len());
            selected.extend(top_indices(&local, k).into_iter().map(|i| members[i]));
            debug!(cluster, members = members.len(), picked = k, "class cluster");
        }

        let chosen = selected.len();
        let selected = pad_with_random(
            selected.into_iter().collect(),
            self.batch_size,
            0,
            x.n_rows(),
            &mut self.rng,
        )?;
        info!(
            sampler = "kmeans_class",
            n_classes = self.n_classes,
            from_clusters = chosen,
            batch_size = self.batch_size,
            pool_size = x.n_rows(),
            "kmeans class selection complete"
        );
        Ok(selected)
    }
}
