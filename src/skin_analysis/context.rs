//! Process-wide analysis resources
//!
//! Built once at startup and shared read-only between requests.

use tracing::{info, instrument};

use crate::skin_analysis::classifier::{OnnxClassifier, SkinClassifier};
use crate::skin_analysis::common::error::Result;
use crate::skin_analysis::config::AnalyzerConfig;
use crate::skin_analysis::text_info::TextInfoTable;

pub struct AnalysisContext {
    oily: Box<dyn SkinClassifier>,
    pigmentation: Box<dyn SkinClassifier>,
    sensitivity: Box<dyn SkinClassifier>,
    text_info: TextInfoTable,
}

impl AnalysisContext {
    /// Loads every model and the text table named by `config`.
    ///
    /// Fails with `ModelUnavailable` on the first model that is missing,
    /// empty or rejected by the runtime.
    #[instrument(skip(config), fields(model_dir = %config.model_dir.display()))]
    pub fn load(config: &AnalyzerConfig) -> Result<Self> {
        let pigmentation = OnnxClassifier::load(
            "pigmentation",
            config.pigmentation_model_path(),
            config.intra_threads,
        )?;
        let oily = OnnxClassifier::load("oily", config.oily_model_path(), config.intra_threads)?;
        let sensitivity = OnnxClassifier::load(
            "sensitivity",
            config.sensitivity_model_path(),
            config.intra_threads,
        )?;
        let text_info = TextInfoTable::load(&config.text_info_path)?;

        info!("Analysis context ready");
        Ok(Self::with_custom(
            Box::new(oily),
            Box::new(pigmentation),
            Box::new(sensitivity),
            text_info,
        ))
    }

    pub fn with_custom(
        oily: Box<dyn SkinClassifier>,
        pigmentation: Box<dyn SkinClassifier>,
        sensitivity: Box<dyn SkinClassifier>,
        text_info: TextInfoTable,
    ) -> Self {
        Self {
            oily,
            pigmentation,
            sensitivity,
            text_info,
        }
    }

    pub fn oily_classifier(&self) -> &dyn SkinClassifier {
        self.oily.as_ref()
    }

    pub fn pigmentation_classifier(&self) -> &dyn SkinClassifier {
        self.pigmentation.as_ref()
    }

    /// The trained sensitivity model. Classification uses the color
    /// heuristic instead; the model is held so deployments stay complete.
    pub fn sensitivity_classifier(&self) -> &dyn SkinClassifier {
        self.sensitivity.as_ref()
    }

    pub fn text_info(&self) -> &TextInfoTable {
        &self.text_info
    }
}
