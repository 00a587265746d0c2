//! Ranked batch-mode selection.
//!
//! Greedy construction of a batch that trades off dissimilarity to the
//! reference set (labeled rows plus rows already picked) against a per-row
//! prior weight. The balance `alpha` is the fraction of rows still
//! unlabeled, recomputed after every pick, so early picks favour spread and
//! later picks favour the prior.

use rayon::prelude::*;
use tracing::{debug, info, warn};

use cardinal_core::config::{EmptyReferencePolicy, RankedBatchConfig, SamplingConfig};
use cardinal_core::constants::{LABELED_WEIGHT, LABELED_WEIGHT_CUTOFF};
use cardinal_core::errors::{CardinalResult, SamplingError};
use cardinal_core::traits::{IDistanceMetric, IQuerySampler, IScorer};
use cardinal_core::{FeatureMatrix, Label};
use cardinal_distance::{pairwise_distances_argmin_min, similarity, Metric};

use crate::utils::ensure_candidates;

pub struct RankedBatchSampler {
    batch_size: usize,
    metric: Box<dyn IDistanceMetric>,
    empty_reference: EmptyReferencePolicy,
    prior: Option<Box<dyn IScorer>>,
    reference: Option<FeatureMatrix>,
}

impl RankedBatchSampler {
    /// Euclidean selector that rejects an empty reference set.
    pub fn new(batch_size: usize) -> Self {
        Self {
            batch_size,
            metric: Box::new(Metric::Euclidean),
            empty_reference: EmptyReferencePolicy::Reject,
            prior: None,
            reference: None,
        }
    }

    /// Build from config. Unknown metric names fail here.
    pub fn from_config(
        sampling: &SamplingConfig,
        ranked_batch: &RankedBatchConfig,
    ) -> CardinalResult<Self> {
        let metric: Metric = ranked_batch.metric.parse()?;
        Ok(Self::new(sampling.batch_size)
            .with_metric(metric)
            .with_empty_reference(ranked_batch.empty_reference))
    }

    pub fn with_metric(mut self, metric: impl IDistanceMetric + 'static) -> Self {
        self.metric = Box::new(metric);
        self
    }

    pub fn with_empty_reference(mut self, policy: EmptyReferencePolicy) -> Self {
        self.empty_reference = policy;
        self
    }

    /// Score pool rows with `prior` to obtain their weights. Without a prior
    /// every pool row weighs 0.
    pub fn with_prior(mut self, prior: impl IScorer + 'static) -> Self {
        self.prior = Some(Box::new(prior));
        self
    }

    pub fn metric_name(&self) -> &str {
        self.metric.name()
    }

    /// Rank a batch over `x` where `weights[i] <= -0.5` marks row `i` as
    /// labeled. Returns row indices of `x` in pick order.
    pub fn select_with_weights(
        &self,
        x: &FeatureMatrix,
        weights: &[f64],
    ) -> CardinalResult<Vec<usize>> {
        let n_samples = x.n_rows();
        if n_samples == 0 {
            return Err(SamplingError::precondition("no rows to select from").into());
        }
        if weights.len() != n_samples {
            return Err(SamplingError::precondition(format!(
                "{} weights for {} rows",
                weights.len(),
                n_samples
            ))
            .into());
        }
        if let Some(i) = weights.iter().position(|w| !w.is_finite()) {
            return Err(
                SamplingError::precondition(format!("weight at row {i} is not finite")).into(),
            );
        }

        let (mut eligible, labeled): (Vec<usize>, Vec<usize>) =
            (0..n_samples).partition(|&i| weights[i] > LABELED_WEIGHT_CUTOFF);
        ensure_candidates(self.batch_size, eligible.len())?;
        if self.batch_size == 0 {
            return Ok(Vec::new());
        }

        let mut sims = self.initial_similarities(x, &eligible, &labeled)?;
        let metric = self.metric.as_ref();
        let mut n_unlabeled = eligible.len();
        let mut selected = Vec::with_capacity(self.batch_size);

        for iteration in 0..self.batch_size {
            let alpha = n_unlabeled as f64 / n_samples as f64;

            // `eligible` stays in ascending row order, so the strict `>`
            // keeps the lowest row on ties.
            let mut best: Option<(usize, f64)> = None;
            for (pos, (&row, &sim)) in eligible.iter().zip(&sims).enumerate() {
                let score = alpha * (1.0 - sim) + (1.0 - alpha) * weights[row];
                if best.map_or(true, |(_, top)| score > top) {
                    best = Some((pos, score));
                }
            }
            let Some((pos, score)) = best else {
                return Err(SamplingError::InsufficientCandidates {
                    requested: self.batch_size,
                    available: selected.len(),
                }
                .into());
            };

            let picked = eligible.remove(pos);
            sims.remove(pos);
            selected.push(picked);
            n_unlabeled -= 1;
            debug!(iteration, picked, score, alpha, "ranked batch pick");

            let point = x.row(picked);
            sims.par_iter_mut()
                .zip(eligible.par_iter())
                .for_each(|(sim, &row)| {
                    let candidate = similarity(metric.distance(x.row(row), point));
                    if candidate > *sim {
                        *sim = candidate;
                    }
                });
        }

        Ok(selected)
    }

    /// Similarity of every eligible row to its nearest labeled row.
    fn initial_similarities(
        &self,
        x: &FeatureMatrix,
        eligible: &[usize],
        labeled: &[usize],
    ) -> CardinalResult<Vec<f64>> {
        if labeled.is_empty() {
            return match self.empty_reference {
                EmptyReferencePolicy::Reject => Err(SamplingError::precondition(
                    "no labeled rows to rank candidates against",
                )
                .into()),
                EmptyReferencePolicy::MaxDissimilarity => {
                    warn!(
                        candidates = eligible.len(),
                        "no labeled rows, treating every candidate as maximally dissimilar"
                    );
                    Ok(vec![0.0; eligible.len()])
                }
            };
        }
        let candidates = x.select_rows(eligible)?;
        let reference = x.select_rows(labeled)?;
        let (_, distances) =
            pairwise_distances_argmin_min(&candidates, &reference, self.metric.as_ref())?;
        Ok(distances.into_iter().map(similarity).collect())
    }

    fn prior_weights(&self, pool: &FeatureMatrix) -> CardinalResult<Vec<f64>> {
        let Some(prior) = &self.prior else {
            return Ok(vec![0.0; pool.n_rows()]);
        };
        let weights = prior.score_samples(pool)?;
        if weights.len() != pool.n_rows() {
            return Err(SamplingError::precondition(format!(
                "prior {} returned {} scores for {} rows",
                prior.name(),
                weights.len(),
                pool.n_rows()
            ))
            .into());
        }
        if let Some(i) = weights.iter().position(|&w| w <= LABELED_WEIGHT_CUTOFF) {
            return Err(SamplingError::invalid_configuration(format!(
                "prior {} scored pool row {i} as labeled ({})",
                prior.name(),
                weights[i]
            ))
            .into());
        }
        Ok(weights)
    }
}

impl IQuerySampler for RankedBatchSampler {
    fn name(&self) -> &str {
        "ranked_batch"
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    /// With labels, keep `x` as the labeled reference set and fit the prior,
    /// if any. Without labels the fit is unsupervised and clears the
    /// reference set.
    fn fit(&mut self, x: &FeatureMatrix, y: Option<&[Label]>) -> CardinalResult<()> {
        let Some(y) = y else {
            self.reference = None;
            return Ok(());
        };
        if let Some(prior) = self.prior.as_mut() {
            prior.fit(x, Some(y))?;
        }
        self.reference = Some(x.clone());
        Ok(())
    }

    fn select_samples(&mut self, x: &FeatureMatrix) -> CardinalResult<Vec<usize>> {
        let mut weights = self.prior_weights(x)?;
        let stacked;
        let features = match self.reference.as_ref().filter(|r| !r.is_empty()) {
            Some(reference) => {
                stacked = x.vstack(reference)?;
                weights.resize(stacked.n_rows(), LABELED_WEIGHT);
                &stacked
            }
            None => x,
        };

        let selected = self.select_with_weights(features, &weights)?;
        info!(
            sampler = self.name(),
            metric = self.metric.name(),
            batch_size = self.batch_size,
            pool_size = x.n_rows(),
            "ranked batch selection complete"
        );
        Ok(selected)
    }
}
