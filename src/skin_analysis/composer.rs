use std::path::Path;
use std::sync::Arc;

use image::RgbImage;
use serde::Serialize;
use tracing::{debug, info, info_span, instrument};

use crate::skin_analysis::{
    code::SkinTypeCode,
    common::error::Result,
    config::AnalyzerConfig,
    context::AnalysisContext,
    coverage::{SkinCoverage, validate_coverage},
    decode::{decode_file, decode_image},
    normalize::normalize,
    sensitivity::is_sensitive,
};

/// Outcome of a successful classification.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClassificationResult {
    pub skin_type: SkinTypeCode,
    pub short_info: String,
    /// Skin coverage from validation, rounded to two decimals
    pub skin_percentage: f64,
}

pub struct SkinTypeClassifier {
    context: Arc<AnalysisContext>,
}

impl SkinTypeClassifier {
    pub fn new(config: &AnalyzerConfig) -> Result<Self> {
        Ok(Self::with_context(Arc::new(AnalysisContext::load(config)?)))
    }

    pub fn with_context(context: Arc<AnalysisContext>) -> Self {
        Self { context }
    }

    pub fn context(&self) -> &Arc<AnalysisContext> {
        &self.context
    }

    /// Validates skin coverage, then classifies.
    #[instrument(skip(self, image), fields(width = image.width(), height = image.height()))]
    pub fn classify(&self, image: &RgbImage) -> Result<ClassificationResult> {
        let coverage = {
            let _span = info_span!("validate_coverage").entered();
            validate_coverage(image)?
        };
        self.compose(image, coverage)
    }

    /// Classifies an image whose coverage has already been validated.
    ///
    /// The reported percentage is the one carried by `coverage`.
    pub fn compose(&self, image: &RgbImage, coverage: SkinCoverage) -> Result<ClassificationResult> {
        let tensor = {
            let _span = info_span!("normalize").entered();
            normalize(image)?
        };

        let (oily_score, pigmentation_score) = {
            let _span = info_span!("classify").entered();
            let oily = self.context.oily_classifier().score(&tensor)?;
            let pigmentation = self.context.pigmentation_classifier().score(&tensor)?;
            (oily, pigmentation)
        };

        let sensitive = {
            let _span = info_span!("color_sensitivity").entered();
            is_sensitive(image)
        };

        debug!(
            oily_score,
            pigmentation_score, sensitive, "Skin analysis scores"
        );

        let skin_type = SkinTypeCode::from_signals(oily_score, sensitive, pigmentation_score);
        let short_info = self.context.text_info().lookup(&skin_type)?.to_string();

        info!(
            skin_type = %skin_type,
            skin_percentage = coverage.percentage(),
            "Classification complete"
        );

        Ok(ClassificationResult {
            skin_type,
            short_info,
            skin_percentage: coverage.rounded(),
        })
    }

    pub fn classify_bytes(&self, data: &[u8]) -> Result<ClassificationResult> {
        let image = {
            let _span = info_span!("decode_image", input_size = data.len()).entered();
            decode_image(data)?
        };
        self.classify(&image)
    }

    #[instrument(skip(self, path), fields(path = %path.as_ref().display()))]
    pub fn classify_file<P: AsRef<Path>>(&self, path: P) -> Result<ClassificationResult> {
        let image = {
            let _span = info_span!("decode_file").entered();
            decode_file(path)?
        };
        self.classify(&image)
    }
}
