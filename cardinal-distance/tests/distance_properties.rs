//! Property tests for the metric primitive.

use proptest::prelude::*;

use cardinal_core::traits::IDistanceMetric;
use cardinal_core::FeatureMatrix;
use cardinal_distance::{pairwise_distances, pairwise_distances_argmin_min, Metric};

const METRICS: [Metric; 5] = [
    Metric::Euclidean,
    Metric::SqEuclidean,
    Metric::Manhattan,
    Metric::Cosine,
    Metric::Chebyshev,
];

fn matrix(rows: usize, dims: usize) -> impl Strategy<Value = FeatureMatrix> {
    prop::collection::vec(-100.0f64..100.0, rows * dims)
        .prop_map(move |data| FeatureMatrix::new(data, dims).unwrap())
}

proptest! {
    #[test]
    fn prop_distances_are_symmetric_and_non_negative(
        a in prop::collection::vec(-50.0f64..50.0, 4),
        b in prop::collection::vec(-50.0f64..50.0, 4),
    ) {
        for metric in METRICS {
            let ab = metric.distance(&a, &b);
            let ba = metric.distance(&b, &a);
            prop_assert!(ab >= -1e-12, "{metric} gave {ab}");
            prop_assert!((ab - ba).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_self_distance_is_zero(a in prop::collection::vec(0.1f64..50.0, 3)) {
        for metric in METRICS {
            prop_assert!(metric.distance(&a, &a).abs() < 1e-9);
        }
    }

    #[test]
    fn prop_argmin_min_agrees_with_full_matrix(a in matrix(6, 3), b in matrix(5, 3)) {
        let full = pairwise_distances(&a, &b, &Metric::Euclidean).unwrap();
        let (idx, dist) = pairwise_distances_argmin_min(&a, &b, &Metric::Euclidean).unwrap();
        for (i, row) in full.iter().enumerate() {
            let min = row.iter().cloned().fold(f64::INFINITY, f64::min);
            let first = row.iter().position(|&d| d == min).unwrap();
            prop_assert_eq!(idx[i], first);
            prop_assert_eq!(dist[i], min);
        }
    }
}
