//! Score-driven selection: `top`, `linear_choice` and `squared_choice`.

use rand::distributions::{Distribution, WeightedIndex};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::info;

use cardinal_core::config::SamplingConfig;
use cardinal_core::errors::{CardinalResult, SamplingError};
use cardinal_core::traits::{IQuerySampler, IScorer};
use cardinal_core::{FeatureMatrix, Label, SelectionStrategy};

use crate::utils::{ensure_candidates, make_rng};

/// Selects samples from the scores of a wrapped [`IScorer`].
///
/// The strategy is kept as a name and parsed on every selection, so an
/// unknown name only fails once samples are requested.
pub struct ScoredSampler {
    scorer: Box<dyn IScorer>,
    batch_size: usize,
    strategy: String,
    rng: StdRng,
    sample_scores: Option<Vec<f64>>,
}

impl ScoredSampler {
    pub fn new(
        scorer: impl IScorer + 'static,
        batch_size: usize,
        strategy: impl Into<String>,
        seed: Option<u64>,
    ) -> Self {
        Self {
            scorer: Box::new(scorer),
            batch_size,
            strategy: strategy.into(),
            rng: make_rng(seed),
            sample_scores: None,
        }
    }

    pub fn from_config(scorer: impl IScorer + 'static, config: &SamplingConfig) -> Self {
        Self::new(scorer, config.batch_size, config.strategy.clone(), config.seed)
    }

    pub fn strategy(&self) -> &str {
        &self.strategy
    }

    /// Scores computed by the last `select_samples` call.
    pub fn sample_scores(&self) -> Option<&[f64]> {
        self.sample_scores.as_deref()
    }

    /// Apply the configured strategy to precomputed scores.
    pub fn select_from_scores(&mut self, scores: &[f64]) -> CardinalResult<Vec<usize>> {
        let strategy: SelectionStrategy = self.strategy.parse()?;
        ensure_candidates(self.batch_size, scores.len())?;
        if let Some(i) = scores.iter().position(|s| !s.is_finite()) {
            return Err(SamplingError::invalid_configuration(format!(
                "score at row {i} is not finite"
            ))
            .into());
        }

        match strategy {
            SelectionStrategy::Top => Ok(top_indices(scores, self.batch_size)),
            SelectionStrategy::LinearChoice => {
                weighted_choice(scores, self.batch_size, &mut self.rng)
            }
            SelectionStrategy::SquaredChoice => {
                if scores.iter().any(|&s| s < 0.0) {
                    return Err(SamplingError::invalid_configuration(
                        "squared_choice needs non-negative scores",
                    )
                    .into());
                }
                let squared: Vec<f64> = scores.iter().map(|s| s * s).collect();
                weighted_choice(&squared, self.batch_size, &mut self.rng)
            }
        }
    }
}

impl IQuerySampler for ScoredSampler {
    fn name(&self) -> &str {
        self.scorer.name()
    }

    fn batch_size(&self) -> usize {
        self.batch_size
    }

    fn fit(&mut self, x: &FeatureMatrix, y: Option<&[Label]>) -> CardinalResult<()> {
        self.scorer.fit(x, y)
    }

    fn select_samples(&mut self, x: &FeatureMatrix) -> CardinalResult<Vec<usize>> {
        let scores = self.scorer.score_samples(x)?;
        if scores.len() != x.n_rows() {
            return Err(SamplingError::precondition(format!(
                "scorer {} returned {} scores for {} rows",
                self.scorer.name(),
                scores.len(),
                x.n_rows()
            ))
            .into());
        }
        let selected = self.select_from_scores(&scores);
        self.sample_scores = Some(scores);
        let selected = selected?;
        info!(
            sampler = self.scorer.name(),
            strategy = %self.strategy,
            batch_size = self.batch_size,
            pool_size = x.n_rows(),
            "scored selection complete"
        );
        Ok(selected)
    }
}

/// Indices of the `k` highest scores, highest first. Equal scores keep
/// ascending index order.
pub fn top_indices(scores: &[f64], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..scores.len()).collect();
    order.sort_by(|&a, &b| scores[b].total_cmp(&scores[a]).then(a.cmp(&b)));
    order.truncate(k);
    order
}

/// Draw `k` distinct indices with probability proportional to `weights`.
///
/// Weights must be non-negative with at least `k` strictly positive entries.
pub fn weighted_choice<R: Rng + ?Sized>(
    weights: &[f64],
    k: usize,
    rng: &mut R,
) -> CardinalResult<Vec<usize>> {
    if weights.iter().any(|&w| w < 0.0) {
        return Err(
            SamplingError::invalid_configuration("weighted choice needs non-negative scores")
                .into(),
        );
    }
    if !(weights.iter().sum::<f64>() > 0.0) {
        return Err(SamplingError::invalid_configuration(
            "weighted choice needs scores with a positive sum",
        )
        .into());
    }
    let positive = weights.iter().filter(|&&w| w > 0.0).count();
    if positive < k {
        return Err(SamplingError::invalid_configuration(format!(
            "weighted choice of {k} samples needs {k} positive scores, found {positive}"
        ))
        .into());
    }
    if k == 0 {
        return Ok(Vec::new());
    }

    let mut dist = WeightedIndex::new(weights)
        .map_err(|e| SamplingError::invalid_configuration(format!("weighted choice: {e}")))?;
    let mut picked = Vec::with_capacity(k);
    for draw in 0..k {
        let i = dist.sample(rng);
        picked.push(i);
        if draw + 1 < k {
            dist.update_weights(&[(i, &0.0)]).map_err(|e| {
                SamplingError::invalid_configuration(format!("weighted choice: {e}"))
            })?;
        }
    }
    Ok(picked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cardinal_core::CardinalError;

    struct Constant(Vec<f64>);

    impl IScorer for Constant {
        fn name(&self) -> &str {
            "constant"
        }

        fn score_samples(&self, _x: &FeatureMatrix) -> CardinalResult<Vec<f64>> {
            Ok(self.0.clone())
        }
    }

    fn pool(n: usize) -> FeatureMatrix {
        FeatureMatrix::from_column(&(0..n).map(|i| i as f64).collect::<Vec<_>>())
    }

    #[test]
    fn top_orders_by_score_then_index() {
        assert_eq!(top_indices(&[0.2, 0.9, 0.5, 0.9, 0.1], 3), vec![1, 3, 2]);
        assert_eq!(top_indices(&[1.0, 1.0, 1.0], 2), vec![0, 1]);
    }

    #[test]
    fn unknown_strategy_fails_at_selection_time() {
        let mut sampler = ScoredSampler::new(Constant(vec![0.1, 0.2]), 1, "best_guess", Some(0));
        let err = sampler.select_samples(&pool(2)).unwrap_err();
        assert!(matches!(
            err,
            CardinalError::Sampling(SamplingError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn scores_are_retained() {
        let mut sampler = ScoredSampler::new(Constant(vec![0.1, 0.7, 0.3]), 2, "top", None);
        assert!(sampler.sample_scores().is_none());
        assert_eq!(sampler.select_samples(&pool(3)).unwrap(), vec![1, 2]);
        assert_eq!(sampler.sample_scores().unwrap(), &[0.1, 0.7, 0.3]);
    }

    #[test]
    fn batch_larger_than_pool_is_rejected() {
        let mut sampler = ScoredSampler::new(Constant(vec![0.1, 0.7]), 3, "top", None);
        let err = sampler.select_samples(&pool(2)).unwrap_err();
        assert!(matches!(
            err,
            CardinalError::Sampling(SamplingError::InsufficientCandidates {
                requested: 3,
                available: 2
            })
        ));
    }

    #[test]
    fn score_count_must_match_rows() {
        let mut sampler = ScoredSampler::new(Constant(vec![0.1]), 1, "top", None);
        let err = sampler.select_samples(&pool(2)).unwrap_err();
        assert!(matches!(
            err,
            CardinalError::Sampling(SamplingError::PreconditionViolation { .. })
        ));
    }

    #[test]
    fn non_finite_scores_are_rejected() {
        let mut sampler = ScoredSampler::new(Constant(vec![0.1, f64::NAN]), 1, "top", None);
        assert!(sampler.select_samples(&pool(2)).is_err());
    }

    #[test]
    fn weighted_strategies_reject_negative_or_zero_scores() {
        for strategy in ["linear_choice", "squared_choice"] {
            for scores in [vec![0.5, -0.1, 0.2], vec![0.0, 0.0, 0.0]] {
                let mut sampler = ScoredSampler::new(Constant(scores), 1, strategy, Some(1));
                let err = sampler.select_samples(&pool(3)).unwrap_err();
                assert!(
                    matches!(err, CardinalError::Sampling(SamplingError::InvalidConfiguration { .. })),
                    "{strategy}"
                );
            }
        }
    }

    #[test]
    fn weighted_choice_only_picks_positive_entries() {
        let mut rng = make_rng(Some(42));
        let mut picked = weighted_choice(&[0.0, 3.0, 0.0, 1.0], 2, &mut rng).unwrap();
        picked.sort_unstable();
        assert_eq!(picked, vec![1, 3]);
    }

    #[test]
    fn weighted_choice_rejects_zero_sum_even_for_empty_batch() {
        let mut rng = make_rng(Some(1));
        let err = weighted_choice(&[0.0, 0.0], 0, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            CardinalError::Sampling(SamplingError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn weighted_choice_needs_enough_positive_entries() {
        let mut rng = make_rng(Some(42));
        assert!(weighted_choice(&[0.0, 3.0, 0.0], 2, &mut rng).is_err());
    }

    #[test]
    fn seeded_weighted_selection_is_reproducible() {
        let scores = vec![0.3, 0.1, 0.8, 0.4, 0.6, 0.2];
        let run = || {
            let mut sampler = ScoredSampler::new(Constant(scores.clone()), 3, "linear_choice", Some(7));
            sampler.select_samples(&pool(6)).unwrap()
        };
        assert_eq!(run(), run());
    }
}
