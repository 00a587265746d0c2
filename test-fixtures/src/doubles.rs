//! Capability doubles used across crate tests.

use std::collections::BTreeMap;

use cardinal_core::errors::{CardinalResult, ModelError, SamplingError};
use cardinal_core::traits::{IModel, IScorer};
use cardinal_core::{FeatureMatrix, Label};

/// Classifier assigning each row to the class with the closest centroid.
/// Probabilities are a softmax over negative Euclidean distances.
#[derive(Debug, Clone, Default)]
pub struct NearestCentroidModel {
    classes: Vec<Label>,
    centroids: Vec<Vec<f64>>,
}

impl NearestCentroidModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn classes(&self) -> &[Label] {
        &self.classes
    }

    fn check_fitted(&self, x: &FeatureMatrix) -> CardinalResult<()> {
        let Some(first) = self.centroids.first() else {
            return Err(ModelError::NotFitted {
                model: self.name().to_string(),
            }
            .into());
        };
        if !x.is_empty() && x.n_features() != first.len() {
            return Err(ModelError::DimensionMismatch {
                expected: first.len(),
                actual: x.n_features(),
            }
            .into());
        }
        Ok(())
    }
}

impl IModel for NearestCentroidModel {
    fn name(&self) -> &str {
        "nearest-centroid"
    }

    fn fit(&mut self, x: &FeatureMatrix, y: &[Label]) -> CardinalResult<()> {
        if x.n_rows() != y.len() {
            return Err(ModelError::LabelMismatch {
                rows: x.n_rows(),
                labels: y.len(),
            }
            .into());
        }
        if x.is_empty() {
            return Err(SamplingError::precondition("cannot fit on zero rows").into());
        }
        let mut sums: BTreeMap<Label, (Vec<f64>, usize)> = BTreeMap::new();
        for (row, &label) in x.rows().zip(y) {
            let entry = sums
                .entry(label)
                .or_insert_with(|| (vec![0.0; x.n_features()], 0));
            entry.0.iter_mut().zip(row).for_each(|(s, v)| *s += v);
            entry.1 += 1;
        }
        self.classes = sums.keys().copied().collect();
        self.centroids = sums
            .into_values()
            .map(|(sum, count)| sum.into_iter().map(|s| s / count as f64).collect())
            .collect();
        Ok(())
    }

    fn predict(&self, x: &FeatureMatrix) -> CardinalResult<Vec<Label>> {
        let proba = self.predict_proba(x)?;
        Ok(proba
            .iter()
            .map(|p| {
                let mut best = 0;
                for (k, &v) in p.iter().enumerate() {
                    if v > p[best] {
                        best = k;
                    }
                }
                self.classes[best]
            })
            .collect())
    }

    fn predict_proba(&self, x: &FeatureMatrix) -> CardinalResult<Vec<Vec<f64>>> {
        self.check_fitted(x)?;
        Ok(x
            .rows()
            .map(|row| {
                let logits: Vec<f64> = self
                    .centroids
                    .iter()
                    .map(|c| {
                        -c.iter()
                            .zip(row)
                            .map(|(a, b)| (a - b).powi(2))
                            .sum::<f64>()
                            .sqrt()
                    })
                    .collect();
                let max = logits.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
                let exp: Vec<f64> = logits.iter().map(|l| (l - max).exp()).collect();
                let total: f64 = exp.iter().sum();
                exp.into_iter().map(|e| e / total).collect()
            })
            .collect())
    }
}

/// Scorer returning a fixed score vector regardless of the features.
#[derive(Debug, Clone)]
pub struct FixedScorer {
    scores: Vec<f64>,
}

impl FixedScorer {
    pub fn new(scores: Vec<f64>) -> Self {
        Self { scores }
    }
}

impl IScorer for FixedScorer {
    fn name(&self) -> &str {
        "fixed"
    }

    fn score_samples(&self, x: &FeatureMatrix) -> CardinalResult<Vec<f64>> {
        if x.n_rows() != self.scores.len() {
            return Err(SamplingError::precondition(format!(
                "fixed scorer holds {} scores for {} rows",
                self.scores.len(),
                x.n_rows()
            ))
            .into());
        }
        Ok(self.scores.clone())
    }
}
