//! ONNX Runtime backed classifier.
//!
//! Each classifier owns one runtime session. Running a session needs
//! exclusive access, so concurrent requests take turns on the mutex.

use std::path::Path;
use std::sync::Mutex;

use ort::session::Session;
use ort::value::Tensor;
use tracing::{debug, info};

use crate::skin_analysis::classifier::scorer::SkinClassifier;
use crate::skin_analysis::common::error::{AnalysisError, Result};
use crate::skin_analysis::normalize::{INPUT_SHAPE, NormalizedTensor};

pub struct OnnxClassifier {
    name: String,
    session: Mutex<Session>,
}

fn unavailable(path: &Path, reason: impl Into<String>) -> AnalysisError {
    AnalysisError::ModelUnavailable {
        path: path.to_path_buf(),
        reason: reason.into(),
    }
}

/// Fails unless `path` is a readable, non-empty file.
pub fn check_model_file(path: &Path) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| unavailable(path, e.to_string()))?;
    if !metadata.is_file() {
        return Err(unavailable(path, "not a regular file"));
    }
    if metadata.len() == 0 {
        return Err(unavailable(path, "model file is empty"));
    }
    Ok(())
}

impl OnnxClassifier {
    pub fn load<P: AsRef<Path>>(name: impl Into<String>, path: P, intra_threads: usize) -> Result<Self> {
        let path = path.as_ref();
        let name = name.into();
        check_model_file(path)?;

        let session = Session::builder()
            .and_then(|b| b.with_intra_threads(intra_threads))
            .and_then(|b| b.commit_from_file(path))
            .map_err(|e| unavailable(path, format!("ONNX session load error: {}", e)))?;

        info!(model = %name, path = %path.display(), "Loaded classifier");
        Ok(Self {
            name,
            session: Mutex::new(session),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl SkinClassifier for OnnxClassifier {
    fn score(&self, input: &NormalizedTensor) -> Result<f32> {
        let values: Vec<f32> = input.as_array().iter().copied().collect();
        let tensor = Tensor::from_array((INPUT_SHAPE, values))
            .map_err(|e| AnalysisError::Inference(format!("{}: input tensor: {}", self.name, e)))?;

        let mut session = self
            .session
            .lock()
            .map_err(|_| AnalysisError::Inference(format!("{}: session lock poisoned", self.name)))?;

        let outputs = session
            .run(ort::inputs![tensor])
            .map_err(|e| AnalysisError::Inference(format!("{}: {}", self.name, e)))?;

        let (_shape, data) = outputs[0]
            .try_extract_tensor::<f32>()
            .map_err(|e| AnalysisError::Inference(format!("{}: extract output: {}", self.name, e)))?;

        let score = data
            .first()
            .copied()
            .ok_or_else(|| AnalysisError::Inference(format!("{}: empty output", self.name)))?;

        debug!(model = %self.name, score, "Classifier score");
        Ok(score)
    }
}
