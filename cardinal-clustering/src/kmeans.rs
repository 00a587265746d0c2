//! K-Means: k-means++ seeding, Lloyd iterations, best of `n_init` restarts.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use tracing::{debug, warn};

use cardinal_core::config::ClusteringConfig;
use cardinal_core::errors::{CardinalResult, ClusteringError};
use cardinal_core::traits::{IClusterer, IDistanceMetric};
use cardinal_core::{Clustering, FeatureMatrix};
use cardinal_distance::Metric;

/// Euclidean K-Means.
#[derive(Debug, Clone, Default)]
pub struct KMeans {
    config: ClusteringConfig,
}

/// Result of one seeded run.
struct Run {
    labels: Vec<usize>,
    centers: Vec<f64>,
    inertia: f64,
}

impl KMeans {
    pub fn new(config: ClusteringConfig) -> Self {
        Self { config }
    }

    /// Default settings with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(ClusteringConfig {
            seed: Some(seed),
            ..Default::default()
        })
    }

    pub fn config(&self) -> &ClusteringConfig {
        &self.config
    }

    fn rng(&self) -> StdRng {
        match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    fn run_once(&self, x: &FeatureMatrix, k: usize, rng: &mut StdRng) -> CardinalResult<Run> {
        let d = x.n_features();
        let mut centers = seed_centers(x, k, rng)?;
        let mut assignment = assign(x, &centers, d);

        for iteration in 0..self.config.max_iter {
            let mut next = vec![0.0; k * d];
            let mut counts = vec![0usize; k];
            for (i, &(cluster, _)) in assignment.iter().enumerate() {
                counts[cluster] += 1;
                for (sum, v) in next[cluster * d..(cluster + 1) * d].iter_mut().zip(x.row(i)) {
                    *sum += v;
                }
            }

            let mut taken = vec![false; x.n_rows()];
            for cluster in 0..k {
                let slot = &mut next[cluster * d..(cluster + 1) * d];
                if counts[cluster] > 0 {
                    let count = counts[cluster] as f64;
                    slot.iter_mut().for_each(|v| *v /= count);
                    continue;
                }
                // Empty cluster: move it onto the row worst served by its centroid.
                if let Some(far) = farthest_untaken(&assignment, &taken) {
                    warn!(cluster, row = far, iteration, "re-seeding empty k-means cluster");
                    slot.copy_from_slice(x.row(far));
                    taken[far] = true;
                }
            }

            let shift = centers
                .chunks_exact(d)
                .zip(next.chunks_exact(d))
                .map(|(old, new)| Metric::Euclidean.distance(old, new))
                .fold(0.0, f64::max);
            centers = next;
            assignment = assign(x, &centers, d);

            if shift <= self.config.tolerance {
                debug!(iteration, shift, "k-means converged");
                break;
            }
        }

        let inertia = assignment.iter().map(|(_, dist)| dist).sum();
        Ok(Run {
            labels: assignment.into_iter().map(|(cluster, _)| cluster).collect(),
            centers,
            inertia,
        })
    }
}

impl IClusterer for KMeans {
    fn name(&self) -> &str {
        "kmeans"
    }

    fn cluster(&self, x: &FeatureMatrix, n_clusters: usize) -> CardinalResult<Clustering> {
        if n_clusters == 0 || n_clusters > x.n_rows() {
            return Err(ClusteringError::InvalidClusterCount {
                requested: n_clusters,
                available: x.n_rows(),
            }
            .into());
        }

        let mut rng = self.rng();
        let mut best: Option<Run> = None;
        for _ in 0..self.config.n_init.max(1) {
            let run = self.run_once(x, n_clusters, &mut rng)?;
            if best.as_ref().map_or(true, |b| run.inertia < b.inertia) {
                best = Some(run);
            }
        }
        let best = best.ok_or_else(|| ClusteringError::ClusteringFailed {
            reason: "no k-means run completed".to_string(),
        })?;

        debug!(
            n_rows = x.n_rows(),
            n_clusters,
            inertia = best.inertia,
            "k-means finished"
        );

        Ok(Clustering {
            labels: best.labels,
            centers: FeatureMatrix::new(best.centers, x.n_features())?,
            inertia: best.inertia,
        })
    }
}

#[inline]
fn sq_dist(a: &[f64], b: &[f64]) -> f64 {
    Metric::SqEuclidean.distance(a, b)
}

/// Nearest centroid per row (ties to the lowest centroid index) and the
/// squared distance to it.
fn assign(x: &FeatureMatrix, centers: &[f64], d: usize) -> Vec<(usize, f64)> {
    (0..x.n_rows())
        .into_par_iter()
        .map(|i| {
            let row = x.row(i);
            let mut best = (0usize, f64::INFINITY);
            for (cluster, center) in centers.chunks_exact(d).enumerate() {
                let dist = sq_dist(row, center);
                if dist < best.1 {
                    best = (cluster, dist);
                }
            }
            best
        })
        .collect()
}

fn farthest_untaken(assignment: &[(usize, f64)], taken: &[bool]) -> Option<usize> {
    let mut far: Option<(usize, f64)> = None;
    for (i, &(_, dist)) in assignment.iter().enumerate() {
        if taken[i] {
            continue;
        }
        if far.map_or(true, |(_, best)| dist > best) {
            far = Some((i, dist));
        }
    }
    far.map(|(i, _)| i)
}

/// k-means++ seeding: each new centroid is drawn with probability
/// proportional to its squared distance from the nearest chosen centroid.
fn seed_centers(x: &FeatureMatrix, k: usize, rng: &mut StdRng) -> CardinalResult<Vec<f64>> {
    let n = x.n_rows();
    let mut chosen: Vec<usize> = Vec::with_capacity(k);
    let first = rng.gen_range(0..n);
    chosen.push(first);
    let mut nearest: Vec<f64> = x.rows().map(|row| sq_dist(row, x.row(first))).collect();

    while chosen.len() < k {
        let total: f64 = nearest.iter().sum();
        let next = if total > 0.0 && total.is_finite() {
            let weights = WeightedIndex::new(&nearest).map_err(|e| {
                ClusteringError::ClusteringFailed {
                    reason: format!("k-means++ seeding: {e}"),
                }
            })?;
            weights.sample(rng)
        } else {
            // Every row coincides with a chosen centroid.
            let remaining: Vec<usize> = (0..n).filter(|i| !chosen.contains(i)).collect();
            remaining[rng.gen_range(0..remaining.len())]
        };
        chosen.push(next);
        for (slot, row) in nearest.iter_mut().zip(x.rows()) {
            let dist = sq_dist(row, x.row(next));
            if dist < *slot {
                *slot = dist;
            }
        }
    }

    let mut centers = Vec::with_capacity(k * x.n_features());
    for &i in &chosen {
        centers.extend_from_slice(x.row(i));
    }
    Ok(centers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardinal_core::CardinalError;

    #[test]
    fn rejects_zero_and_too_many_clusters() {
        let x = FeatureMatrix::from_column(&[0.0, 1.0]);
        let kmeans = KMeans::with_seed(0);
        for k in [0, 3] {
            let err = kmeans.cluster(&x, k).unwrap_err();
            assert!(matches!(
                err,
                CardinalError::Clustering(ClusteringError::InvalidClusterCount { .. })
            ));
        }
    }

    #[test]
    fn one_cluster_per_row_has_zero_inertia() {
        let x = FeatureMatrix::from_column(&[0.0, 4.0, 9.0]);
        let clustering = KMeans::with_seed(1).cluster(&x, 3).unwrap();
        assert!(clustering.inertia.abs() < 1e-12);
        let mut labels = clustering.labels.clone();
        labels.sort_unstable();
        assert_eq!(labels, vec![0, 1, 2]);
    }

    #[test]
    fn identical_rows_do_not_break_seeding() {
        let x = FeatureMatrix::from_column(&[2.0; 5]);
        let clustering = KMeans::with_seed(3).cluster(&x, 3).unwrap();
        assert_eq!(clustering.labels.len(), 5);
        assert_eq!(clustering.n_clusters(), 3);
        assert!(clustering.inertia.abs() < 1e-12);
    }

    #[test]
    fn two_groups_on_a_line() {
        let x = FeatureMatrix::from_column(&[0.0, 0.5, 1.0, 20.0, 20.5, 21.0]);
        let clustering = KMeans::with_seed(11).cluster(&x, 2).unwrap();
        let l = &clustering.labels;
        assert_eq!(l[0], l[1]);
        assert_eq!(l[1], l[2]);
        assert_eq!(l[3], l[4]);
        assert_eq!(l[4], l[5]);
        assert_ne!(l[0], l[3]);
    }

    #[test]
    fn farthest_untaken_skips_taken_rows() {
        let assignment = [(0, 1.0), (0, 5.0), (1, 5.0)];
        assert_eq!(farthest_untaken(&assignment, &[false, false, false]), Some(1));
        assert_eq!(farthest_untaken(&assignment, &[false, true, false]), Some(2));
        assert_eq!(farthest_untaken(&assignment, &[true, true, true]), None);
    }
}
