use crate::skin_analysis::common::error::Result;
use crate::skin_analysis::normalize::NormalizedTensor;

/// Scores a normalized image. Implementations are shared across requests.
pub trait SkinClassifier: Send + Sync {
    fn score(&self, input: &NormalizedTensor) -> Result<f32>;
}
