//! One sample per K-Means cluster: the row closest to each centroid.

use tracing::info;

use cardinal_clustering::KMeans;
use cardinal_core::config::{ClusteringConfig, SamplingConfig};
use cardinal_core::errors::CardinalResult;
use cardinal_core::traits::{IClusterer, IQuerySampler};
use cardinal_core::FeatureMatrix;
use cardinal_distance::{distances_to_point, Metric};

use crate::utils::ensure_candidates;

pub struct KMeansSampler<C = KMeans> {
    batch_size: usize,
    clusterer: C,
}

impl KMeansSampler<KMeans> {
    pub fn new(batch_size: usize, seed: Option<u64>) -> Self {
        Self::from_config(
            &SamplingConfig {
                batch_size,
                seed,
                ..Default::default()
            },
            &ClusteringConfig {
                seed,
                ..Default::default()
            },
        )
    }

    pub fn from_config(sampling: &SamplingConfig, clustering: &ClusteringConfig) -> Self {
        Self::with_clusterer(sampling.batch_size, KMeans::new(clustering.clone()))
    }
}

impl<C: IClusterer> KMeansSampler<C> {
    pub fn with_clusterer(batch_size: usize, clusterer: C) -> Self {
        Self {
            batch_size,
            clusterer,
        }
    }
}

/// For each centroid in order, the nearest row not already picked.
/// Ties go to the lowest row.
pub(crate) fn nearest_per_center(
    x: &FeatureMatrix,
    centers: &FeatureMatrix,
) -> CardinalResult<Vec<usize>> {
    let mut taken = vec![false; x.n_rows()];
    let mut picked = Vec::with_capacity(centers.n_rows());
    for center in centers.rows() {
        let distances = distances_to_point(x, center, &Metric::Euclidean)?;
        let mut best: Option<(usize, f64)> = None;
        for (row, &dist) in distances.iter().enumerate() {
            if taken[row] {
                continue;
            }
            if best.map_or(true, |(_, d)| dist < d) {
                best = Some((row, dist));
            }
        }
        if let Some((row, _)) = best {
            taken[row] = true;
            picked.push(row);
        }
    }
    Ok(picked)
}

impl<C: IClusterer> IQuerySampler for KMeansSampler<C> {
    fn name(&self) -> &str {
        "kmeans"
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn select_samples(&mut self, x: &FeatureMatrix) -> CardinalResult<Vec<usize>> {
        ensure_candidates(self.batch_size, x.n_rows())?;
        let clustering = self.clusterer.cluster(x, self.batch_size)?;
        let selected = nearest_per_center(x, &clustering.centers)?;
        ensure_candidates(self.batch_size, selected.len())?;
        info!(
            sampler = "kmeans",
            clusterer = self.clusterer.name(),
            batch_size = self.batch_size,
            pool_size = x.n_rows(),
            inertia = clustering.inertia,
            "kmeans selection complete"
        );
        Ok(selected)
    }
}
