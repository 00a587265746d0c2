//! Built-in distance metrics, addressable by name.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use cardinal_core::errors::SamplingError;
use cardinal_core::traits::IDistanceMetric;

/// Built-in metrics. Names follow the usual scientific-computing spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Euclidean,
    /// Squared Euclidean. Not a true metric but monotone in Euclidean.
    SqEuclidean,
    Manhattan,
    /// `1 - cos(a, b)`. Zero-magnitude vectors are at distance 1.
    Cosine,
    Chebyshev,
}

impl Metric {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::SqEuclidean => "sqeuclidean",
            Self::Manhattan => "manhattan",
            Self::Cosine => "cosine",
            Self::Chebyshev => "chebyshev",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = SamplingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "euclidean" | "l2" => Ok(Self::Euclidean),
            "sqeuclidean" => Ok(Self::SqEuclidean),
            "manhattan" | "cityblock" | "l1" => Ok(Self::Manhattan),
            "cosine" => Ok(Self::Cosine),
            "chebyshev" => Ok(Self::Chebyshev),
            _ => Err(SamplingError::invalid_configuration(format!(
                "unknown distance metric {s:?}"
            ))),
        }
    }
}

impl IDistanceMetric for Metric {
    fn name(&self) -> &str {
        self.as_str()
    }

    fn distance(&self, a: &[f64], b: &[f64]) -> f64 {
        let pairs = a.iter().zip(b.iter());
        match self {
            Self::Euclidean => pairs.map(|(x, y)| (x - y).powi(2)).sum::<f64>().sqrt(),
            Self::SqEuclidean => pairs.map(|(x, y)| (x - y).powi(2)).sum(),
            Self::Manhattan => pairs.map(|(x, y)| (x - y).abs()).sum(),
            Self::Chebyshev => pairs.map(|(x, y)| (x - y).abs()).fold(0.0, f64::max),
            Self::Cosine => {
                let (mut dot, mut mag_a, mut mag_b) = (0.0f64, 0.0f64, 0.0f64);
                for (x, y) in pairs {
                    dot += x * y;
                    mag_a += x * x;
                    mag_b += y * y;
                }
                let denom = mag_a.sqrt() * mag_b.sqrt();
                if denom < f64::EPSILON {
                    1.0
                } else {
                    1.0 - (dot / denom).clamp(-1.0, 1.0)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_is_pythagorean() {
        let d = Metric::Euclidean.distance(&[0.0, 0.0], &[3.0, 4.0]);
        assert!((d - 5.0).abs() < 1e-12);
        let d = Metric::SqEuclidean.distance(&[0.0, 0.0], &[3.0, 4.0]);
        assert!((d - 25.0).abs() < 1e-12);
    }

    #[test]
    fn manhattan_and_chebyshev() {
        assert_eq!(Metric::Manhattan.distance(&[1.0, -1.0], &[4.0, 3.0]), 7.0);
        assert_eq!(Metric::Chebyshev.distance(&[1.0, -1.0], &[4.0, 3.0]), 4.0);
    }

    #[test]
    fn cosine_of_parallel_and_orthogonal() {
        assert!(Metric::Cosine.distance(&[1.0, 2.0], &[2.0, 4.0]).abs() < 1e-12);
        assert!((Metric::Cosine.distance(&[1.0, 0.0], &[0.0, 1.0]) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn cosine_zero_vector_is_distance_one() {
        assert_eq!(Metric::Cosine.distance(&[0.0, 0.0], &[1.0, 1.0]), 1.0);
    }

    #[test]
    fn parses_names_and_aliases() {
        assert_eq!("euclidean".parse::<Metric>().unwrap(), Metric::Euclidean);
        assert_eq!("cityblock".parse::<Metric>().unwrap(), Metric::Manhattan);
        assert_eq!("L1".parse::<Metric>().unwrap(), Metric::Manhattan);
        assert_eq!("sqeuclidean".parse::<Metric>().unwrap(), Metric::SqEuclidean);
    }

    #[test]
    fn unknown_name_is_invalid_configuration() {
        let err = "hamming".parse::<Metric>().unwrap_err();
        assert!(matches!(err, SamplingError::InvalidConfiguration { .. }));
    }

    #[test]
    fn display_roundtrips_through_parse() {
        for m in [
            Metric::Euclidean,
            Metric::SqEuclidean,
            Metric::Manhattan,
            Metric::Cosine,
            Metric::Chebyshev,
        ] {
            assert_eq!(m.to_string().parse::<Metric>().unwrap(), m);
        }
    }
}
