//! Shared value types passed between samplers and capabilities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::SamplingError;
use crate::matrix::FeatureMatrix;

/// How a scored sampler turns per-sample scores into a batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionStrategy {
    /// The `batch_size` highest scores.
    Top,
    /// Sampling without replacement, probability proportional to the score.
    LinearChoice,
    /// Sampling without replacement, probability proportional to the squared score.
    SquaredChoice,
}

impl SelectionStrategy {
    pub const ALL: [SelectionStrategy; 3] = [Self::Top, Self::LinearChoice, Self::SquaredChoice];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::LinearChoice => "linear_choice",
            Self::SquaredChoice => "squared_choice",
        }
    }
}

impl fmt::Display for SelectionStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SelectionStrategy {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| {
                SamplingError::invalid_configuration(format!(
                    "unknown sample selection strategy {s:?}"
                ))
            })
    }
}

/// Output of a clustering capability.
#[derive(Debug, Clone, PartialEq)]
pub struct Clustering {
    /// Cluster id per row, in `0..centers.n_rows()`.
    pub labels: Vec<usize>,
    /// One centroid per cluster.
    pub centers: FeatureMatrix,
    /// Sum of squared distances of rows to their centroid.
    pub inertia: f64,
}

impl Clustering {
    pub fn n_clusters(&self) -> usize {
        self.centers.n_rows()
    }

    /// Row indices assigned to `cluster`, ascending.
    pub fn members(&self, cluster: usize) -> Vec<usize> {
        self.labels
            .iter()
            .enumerate()
            .filter(|(_, &label)| label == cluster)
            .map(|(i, _)| i)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_parses_known_names() {
        for strategy in SelectionStrategy::ALL {
            assert_eq!(strategy.as_str().parse::<SelectionStrategy>().unwrap(), strategy);
        }
    }

    #[test]
    fn unknown_strategy_is_invalid_configuration() {
        let err = "best".parse::<SelectionStrategy>().unwrap_err();
        assert!(matches!(err, SamplingError::InvalidConfiguration { .. }));
        assert!(err.to_string().contains("best"));
    }

    #[test]
    fn clustering_members_are_ascending() {
        let clustering = Clustering {
            labels: vec![1, 0, 1, 1],
            centers: FeatureMatrix::from_column(&[0.0, 1.0]),
            inertia: 0.0,
        };
        assert_eq!(clustering.n_clusters(), 2);
        assert_eq!(clustering.members(1), vec![0, 2, 3]);
        assert_eq!(clustering.members(0), vec![1]);
    }
}
