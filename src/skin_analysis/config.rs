//! Analyzer configuration types

use std::path::{Path, PathBuf};

pub const DEFAULT_MODEL_DIR: &str = "models";
pub const DEFAULT_TEXT_INFO_PATH: &str = "text_info.json";
pub const DEFAULT_OILY_MODEL: &str = "oily_dry_model.onnx";
pub const DEFAULT_PIGMENTATION_MODEL: &str = "pigmented_nonpigmented_model.onnx";
pub const DEFAULT_SENSITIVITY_MODEL: &str = "sensitive_resistant_model.onnx";

/// Where the analyzer finds its models and descriptions.
#[derive(Debug, Clone)]
pub struct AnalyzerConfig {
    /// Directory holding the three classifier files
    pub model_dir: PathBuf,
    pub oily_model: String,
    pub pigmentation_model: String,
    /// Loaded to honour the startup contract; sensitivity comes from color
    pub sensitivity_model: String,
    /// JSON object mapping skin type codes to descriptions
    pub text_info_path: PathBuf,
    /// Intra-op threads per ONNX session
    pub intra_threads: usize,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            model_dir: PathBuf::from(DEFAULT_MODEL_DIR),
            oily_model: DEFAULT_OILY_MODEL.to_string(),
            pigmentation_model: DEFAULT_PIGMENTATION_MODEL.to_string(),
            sensitivity_model: DEFAULT_SENSITIVITY_MODEL.to_string(),
            text_info_path: PathBuf::from(DEFAULT_TEXT_INFO_PATH),
            intra_threads: 1,
        }
    }
}

impl AnalyzerConfig {
    pub fn builder() -> AnalyzerConfigBuilder {
        AnalyzerConfigBuilder::default()
    }

    pub fn oily_model_path(&self) -> PathBuf {
        self.model_dir.join(&self.oily_model)
    }

    pub fn pigmentation_model_path(&self) -> PathBuf {
        self.model_dir.join(&self.pigmentation_model)
    }

    pub fn sensitivity_model_path(&self) -> PathBuf {
        self.model_dir.join(&self.sensitivity_model)
    }
}

/// Builder for AnalyzerConfig
#[derive(Default)]
pub struct AnalyzerConfigBuilder {
    model_dir: Option<PathBuf>,
    oily_model: Option<String>,
    pigmentation_model: Option<String>,
    sensitivity_model: Option<String>,
    text_info_path: Option<PathBuf>,
    intra_threads: Option<usize>,
}

impl AnalyzerConfigBuilder {
    pub fn model_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.model_dir = Some(dir.as_ref().to_path_buf());
        self
    }

    pub fn oily_model(mut self, file_name: impl Into<String>) -> Self {
        self.oily_model = Some(file_name.into());
        self
    }

    pub fn pigmentation_model(mut self, file_name: impl Into<String>) -> Self {
        self.pigmentation_model = Some(file_name.into());
        self
    }

    pub fn sensitivity_model(mut self, file_name: impl Into<String>) -> Self {
        self.sensitivity_model = Some(file_name.into());
        self
    }

    pub fn text_info_path(mut self, path: impl AsRef<Path>) -> Self {
        self.text_info_path = Some(path.as_ref().to_path_buf());
        self
    }

    pub fn intra_threads(mut self, threads: usize) -> Self {
        self.intra_threads = Some(threads.max(1));
        self
    }

    pub fn build(self) -> AnalyzerConfig {
        let default = AnalyzerConfig::default();
        AnalyzerConfig {
            model_dir: self.model_dir.unwrap_or(default.model_dir),
            oily_model: self.oily_model.unwrap_or(default.oily_model),
            pigmentation_model: self.pigmentation_model.unwrap_or(default.pigmentation_model),
            sensitivity_model: self.sensitivity_model.unwrap_or(default.sensitivity_model),
            text_info_path: self.text_info_path.unwrap_or(default.text_info_path),
            intra_threads: self.intra_threads.unwrap_or(default.intra_threads),
        }
    }
}
