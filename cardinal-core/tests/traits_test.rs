use cardinal_core::errors::{CardinalError, CardinalResult, ModelError, SamplingError};
use cardinal_core::traits::{IModel, IQuerySampler};
use cardinal_core::{FeatureMatrix, Label};

/// Predicts class 1 for positive first feature, class 0 otherwise.
struct SignModel;

impl IModel for SignModel {
    fn name(&self) -> &str {
        "sign"
    }
    fn fit(&mut self, _x: &FeatureMatrix, _y: &[Label]) -> CardinalResult<()> {
        Ok(())
    }
    fn predict(&self, x: &FeatureMatrix) -> CardinalResult<Vec<Label>> {
        Ok(x.rows().map(|r| usize::from(r[0] > 0.0)).collect())
    }
}

/// Returns the first `batch_size` rows.
struct FirstRows(usize);

impl IQuerySampler for FirstRows {
    fn name(&self) -> &str {
        "first-rows"
    }
    fn batch_size(&self) -> usize {
        self.0
    }
    fn select_samples(&mut self, x: &FeatureMatrix) -> CardinalResult<Vec<usize>> {
        Ok((0..self.0.min(x.n_rows())).collect())
    }
}

#[test]
fn predict_proba_defaults_to_not_implemented() {
    let x = FeatureMatrix::from_column(&[1.0]);
    let err = SignModel.predict_proba(&x).unwrap_err();
    match err {
        CardinalError::Sampling(SamplingError::NotImplemented { capability }) => {
            assert_eq!(capability, "sign::predict_proba")
        }
        other => panic!("unexpected error {other:?}"),
    }
}

#[test]
fn default_score_is_accuracy() {
    let x = FeatureMatrix::from_column(&[-1.0, 2.0, 3.0, -4.0]);
    let accuracy = SignModel.score(&x, &[0, 1, 0, 0]).unwrap();
    assert!((accuracy - 0.75).abs() < 1e-12);
}

#[test]
fn default_score_rejects_label_mismatch() {
    let x = FeatureMatrix::from_column(&[1.0, 2.0]);
    let err = SignModel.score(&x, &[1]).unwrap_err();
    assert!(matches!(
        err,
        CardinalError::Model(ModelError::LabelMismatch { rows: 2, labels: 1 })
    ));
}

#[test]
fn sampler_fit_defaults_to_noop() {
    let mut sampler = FirstRows(2);
    let x = FeatureMatrix::from_column(&[0.0, 1.0, 2.0]);
    sampler.fit(&x, None).unwrap();
    assert_eq!(sampler.select_samples(&x).unwrap(), vec![0, 1]);
}

#[test]
fn samplers_are_object_safe() {
    let mut boxed: Vec<Box<dyn IQuerySampler>> = vec![Box::new(FirstRows(1))];
    let x = FeatureMatrix::from_column(&[0.0]);
    assert_eq!(boxed[0].select_samples(&x).unwrap(), vec![0]);
    assert_eq!(boxed[0].batch_size(), 1);
}
