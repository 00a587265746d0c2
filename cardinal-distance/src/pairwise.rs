//! Pairwise and nearest-neighbor distance reductions.

use rayon::prelude::*;

use cardinal_core::errors::{CardinalResult, SamplingError};
use cardinal_core::traits::IDistanceMetric;
use cardinal_core::FeatureMatrix;

/// Convert a distance into a similarity in `(0, 1]`.
///
/// Monotonically decreasing and finite for every non-negative distance.
#[inline]
pub fn similarity(distance: f64) -> f64 {
    1.0 / (1.0 + distance)
}

fn check_dimensions(a: &FeatureMatrix, b: &FeatureMatrix) -> CardinalResult<()> {
    if !a.is_empty() && !b.is_empty() && a.n_features() != b.n_features() {
        return Err(SamplingError::precondition(format!(
            "feature dimension mismatch: {} vs {}",
            a.n_features(),
            b.n_features()
        ))
        .into());
    }
    Ok(())
}

/// Full `a.n_rows() × b.n_rows()` distance matrix.
pub fn pairwise_distances<M>(
    a: &FeatureMatrix,
    b: &FeatureMatrix,
    metric: &M,
) -> CardinalResult<Vec<Vec<f64>>>
where
    M: IDistanceMetric + ?Sized,
{
    check_dimensions(a, b)?;
    Ok((0..a.n_rows())
        .into_par_iter()
        .map(|i| {
            let row = a.row(i);
            b.rows().map(|other| metric.distance(row, other)).collect()
        })
        .collect())
}

/// For each row of `a`, the index of its nearest row in `b` and the distance
/// to it. Ties go to the lowest index in `b`.
pub fn pairwise_distances_argmin_min<M>(
    a: &FeatureMatrix,
    b: &FeatureMatrix,
    metric: &M,
) -> CardinalResult<(Vec<usize>, Vec<f64>)>
where
    M: IDistanceMetric + ?Sized,
{
    check_dimensions(a, b)?;
    if b.is_empty() {
        return Err(SamplingError::precondition("nearest neighbor of an empty reference set").into());
    }
    Ok((0..a.n_rows())
        .into_par_iter()
        .map(|i| {
            let row = a.row(i);
            let mut best = (0usize, f64::INFINITY);
            for (j, other) in b.rows().enumerate() {
                let d = metric.distance(row, other);
                if d < best.1 {
                    best = (j, d);
                }
            }
            best
        })
        .unzip())
}

/// Distance from every row of `a` to `point`.
pub fn distances_to_point<M>(
    a: &FeatureMatrix,
    point: &[f64],
    metric: &M,
) -> CardinalResult<Vec<f64>>
where
    M: IDistanceMetric + ?Sized,
{
    if !a.is_empty() && a.n_features() != point.len() {
        return Err(SamplingError::precondition(format!(
            "feature dimension mismatch: {} vs {}",
            a.n_features(),
            point.len()
        ))
        .into());
    }
    Ok((0..a.n_rows())
        .into_par_iter()
        .map(|i| metric.distance(a.row(i), point))
        .collect())
}
