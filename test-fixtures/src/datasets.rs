//! Synthetic datasets.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cardinal_core::{FeatureMatrix, Label};

/// Points scattered uniformly within `spread` of each center, `per_blob`
/// points per center, labeled with the center's index. Rows are grouped by
/// blob in center order.
pub fn blobs(
    centers: &[Vec<f64>],
    per_blob: usize,
    spread: f64,
    seed: u64,
) -> (FeatureMatrix, Vec<Label>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut rows = Vec::with_capacity(centers.len() * per_blob);
    let mut labels = Vec::with_capacity(centers.len() * per_blob);
    for (label, center) in centers.iter().enumerate() {
        for _ in 0..per_blob {
            rows.push(
                center
                    .iter()
                    .map(|c| c + rng.gen_range(-spread..=spread))
                    .collect(),
            );
            labels.push(label);
        }
    }
    let matrix = FeatureMatrix::from_rows(rows).expect("blob centers share a dimension");
    (matrix, labels)
}

/// One-feature matrix from the given positions.
pub fn line(values: &[f64]) -> FeatureMatrix {
    FeatureMatrix::from_column(values)
}
