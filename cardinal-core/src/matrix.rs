//! Dense row-major feature matrix.
//!
//! Every sampler consumes a `FeatureMatrix` by reference. Rows are addressed by
//! their position in the matrix, and every index a sampler returns refers to
//! that position in the matrix it was handed.

use serde::{Deserialize, Serialize};

use crate::errors::{CardinalError, CardinalResult, SamplingError};

/// Discrete class label attached to a row.
pub type Label = usize;

/// An `n_rows × n_features` matrix of `f64` stored in one owned buffer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct FeatureMatrix {
    data: Vec<f64>,
    n_rows: usize,
    n_features: usize,
}

impl FeatureMatrix {
    /// Build a matrix from a flat row-major buffer.
    pub fn new(data: Vec<f64>, n_features: usize) -> CardinalResult<Self> {
        if n_features == 0 {
            if !data.is_empty() {
                return Err(SamplingError::precondition(
                    "non-empty buffer with zero features per row",
                )
                .into());
            }
            return Ok(Self::empty(0));
        }
        if data.len() % n_features != 0 {
            return Err(SamplingError::precondition(format!(
                "buffer of {} values is not a multiple of {} features",
                data.len(),
                n_features
            ))
            .into());
        }
        let n_rows = data.len() / n_features;
        Ok(Self {
            data,
            n_rows,
            n_features,
        })
    }

    /// Build a matrix from individual rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> CardinalResult<Self> {
        let n_features = rows.first().map(|r| r.len()).unwrap_or(0);
        let mut data = Vec::with_capacity(rows.len() * n_features);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != n_features {
                return Err(SamplingError::precondition(format!(
                    "ragged rows: row {} has {} features, expected {}",
                    i,
                    row.len(),
                    n_features
                ))
                .into());
            }
            data.extend(row);
        }
        if n_features == 0 {
            return Ok(Self::empty(0));
        }
        Self::new(data, n_features)
    }

    /// One-feature matrix, one row per value.
    pub fn from_column(values: &[f64]) -> Self {
        Self {
            data: values.to_vec(),
            n_rows: values.len(),
            n_features: 1,
        }
    }

    /// A matrix with no rows.
    pub fn empty(n_features: usize) -> Self {
        Self {
            data: Vec::new(),
            n_rows: 0,
            n_features,
        }
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_features(&self) -> usize {
        self.n_features
    }

    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Row `i`. Panics when `i >= n_rows`, like slice indexing.
    pub fn row(&self, i: usize) -> &[f64] {
        let start = i * self.n_features;
        &self.data[start..start + self.n_features]
    }

    pub fn get(&self, i: usize) -> Option<&[f64]> {
        (i < self.n_rows).then(|| self.row(i))
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[f64]> + '_ {
        self.data.chunks_exact(self.n_features.max(1))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Copy the given rows, in the given order, into a new matrix.
    pub fn select_rows(&self, indices: &[usize]) -> CardinalResult<Self> {
        let mut data = Vec::with_capacity(indices.len() * self.n_features);
        for &i in indices {
            let row = self.get(i).ok_or_else(|| {
                SamplingError::precondition(format!(
                    "row index {} out of range for {} rows",
                    i, self.n_rows
                ))
            })?;
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            n_rows: indices.len(),
            n_features: self.n_features,
        })
    }

    /// Stack `other` below `self`.
    pub fn vstack(&self, other: &FeatureMatrix) -> CardinalResult<Self> {
        if self.is_empty() {
            return Ok(other.clone());
        }
        if other.is_empty() {
            return Ok(self.clone());
        }
        if self.n_features != other.n_features {
            return Err(SamplingError::precondition(format!(
                "cannot stack {} features onto {} features",
                other.n_features, self.n_features
            ))
            .into());
        }
        let mut data = Vec::with_capacity(self.data.len() + other.data.len());
        data.extend_from_slice(&self.data);
        data.extend_from_slice(&other.data);
        Ok(Self {
            data,
            n_rows: self.n_rows + other.n_rows,
            n_features: self.n_features,
        })
    }
}

impl TryFrom<Vec<Vec<f64>>> for FeatureMatrix {
    type Error = CardinalError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<FeatureMatrix> for Vec<Vec<f64>> {
    fn from(matrix: FeatureMatrix) -> Self {
        matrix.rows().map(|r| r.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_keeps_row_order() {
        let m = FeatureMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        assert_eq!(m.n_rows(), 2);
        assert_eq!(m.n_features(), 2);
        assert_eq!(m.row(1), &[3.0, 4.0]);
    }

    #[test]
    fn ragged_rows_are_rejected() {
        let err = FeatureMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0]]).unwrap_err();
        assert!(err.to_string().contains("ragged"));
    }

    #[test]
    fn buffer_must_be_multiple_of_features() {
        assert!(FeatureMatrix::new(vec![1.0, 2.0, 3.0], 2).is_err());
        assert!(FeatureMatrix::new(vec![1.0], 0).is_err());
    }

    #[test]
    fn empty_rows_build_empty_matrix() {
        let m = FeatureMatrix::from_rows(vec![]).unwrap();
        assert!(m.is_empty());
        assert_eq!(m.rows().count(), 0);
    }

    #[test]
    fn select_rows_follows_given_order() {
        let m = FeatureMatrix::from_column(&[0.0, 1.0, 2.0, 3.0]);
        let sub = m.select_rows(&[3, 1]).unwrap();
        assert_eq!(sub.as_slice(), &[3.0, 1.0]);
    }

    #[test]
    fn select_rows_rejects_out_of_range() {
        let m = FeatureMatrix::from_column(&[0.0, 1.0]);
        assert!(m.select_rows(&[2]).is_err());
    }

    #[test]
    fn vstack_appends_rows() {
        let a = FeatureMatrix::from_column(&[0.0, 1.0]);
        let b = FeatureMatrix::from_column(&[5.0]);
        let stacked = a.vstack(&b).unwrap();
        assert_eq!(stacked.as_slice(), &[0.0, 1.0, 5.0]);
        assert!(a.vstack(&FeatureMatrix::from_rows(vec![vec![1.0, 1.0]]).unwrap()).is_err());
    }

    #[test]
    fn get_is_bounds_checked() {
        let m = FeatureMatrix::from_column(&[7.0]);
        assert_eq!(m.get(0), Some(&[7.0][..]));
        assert_eq!(m.get(1), None);
    }

    #[test]
    fn serde_uses_nested_rows() {
        let m = FeatureMatrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "[[1.0,2.0],[3.0,4.0]]");
        let back: FeatureMatrix = serde_json::from_str(&json).unwrap();
        assert_eq!(back, m);
        assert!(serde_json::from_str::<FeatureMatrix>("[[1.0],[2.0,3.0]]").is_err());
    }
}
