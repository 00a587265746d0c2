//! Uncertainty scorers built on a model's class probabilities.
//!
//! Each scorer wraps an [`IModel`]; `fit` trains the model on the labeled
//! rows and `score_samples` turns `predict_proba` rows into one score each.

pub mod confidence;
pub mod entropy;
pub mod margin;

pub use confidence::ConfidenceScorer;
pub use entropy::EntropyScorer;
pub use margin::MarginScorer;

use cardinal_core::config::SamplingConfig;
use cardinal_core::errors::{CardinalResult, SamplingError};
use cardinal_core::traits::IModel;
use cardinal_core::{FeatureMatrix, Label};

use crate::selection::ScoredSampler;

/// Fit `model`, which needs labels.
fn fit_model<M: IModel>(
    model: &mut M,
    scorer: &str,
    x: &FeatureMatrix,
    y: Option<&[Label]>,
) -> CardinalResult<()> {
    let y = y.ok_or_else(|| {
        SamplingError::precondition(format!("{scorer} scorer needs labels to fit its model"))
    })?;
    model.fit(x, y)
}

/// Apply `score` to every probability row returned by `model`.
fn score_probabilities<M, F>(model: &M, x: &FeatureMatrix, score: F) -> CardinalResult<Vec<f64>>
where
    M: IModel,
    F: Fn(&[f64]) -> f64,
{
    let proba = model.predict_proba(x)?;
    if proba.len() != x.n_rows() {
        return Err(SamplingError::precondition(format!(
            "model {} returned {} probability rows for {} samples",
            model.name(),
            proba.len(),
            x.n_rows()
        ))
        .into());
    }
    if let Some(i) = proba.iter().position(|p| p.is_empty()) {
        return Err(SamplingError::precondition(format!(
            "model {} returned no class probabilities for row {i}",
            model.name()
        ))
        .into());
    }
    Ok(proba.iter().map(|p| score(p.as_slice())).collect())
}

/// Scored sampler over least-confidence scores.
pub fn confidence_sampler<M: IModel + 'static>(model: M, config: &SamplingConfig) -> ScoredSampler {
    ScoredSampler::from_config(ConfidenceScorer::new(model), config)
}

/// Scored sampler over margin scores.
pub fn margin_sampler<M: IModel + 'static>(model: M, config: &SamplingConfig) -> ScoredSampler {
    ScoredSampler::from_config(MarginScorer::new(model), config)
}

/// Scored sampler over entropy scores.
pub fn entropy_sampler<M: IModel + 'static>(model: M, config: &SamplingConfig) -> ScoredSampler {
    ScoredSampler::from_config(EntropyScorer::new(model), config)
}
