/// Distance between two feature rows of equal length.
pub trait IDistanceMetric: Send + Sync {
    fn name(&self) -> &str;

    fn distance(&self, a: &[f64], b: &[f64]) -> f64;
}
