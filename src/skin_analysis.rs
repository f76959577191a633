//! Skin type analysis pipeline
//!
//! Decoding, skin detection and coverage gating, color based sensitivity,
//! classifier input normalization, and composition of the final skin type
//! code.

pub mod classifier;
pub mod code;
pub mod color;
pub mod common;
pub mod composer;
pub mod config;
pub mod context;
pub mod coverage;
pub mod decode;
pub mod mask;
pub mod normalize;
pub mod sensitivity;
pub mod text_info;
pub mod upload;

#[cfg(test)]
mod tests;

pub use common::{AnalysisError, Result};

pub use classifier::{OnnxClassifier, SkinClassifier};
pub use code::{Oiliness, Pigmentation, Sensitivity, SkinTypeCode};
pub use composer::{ClassificationResult, SkinTypeClassifier};
pub use config::{AnalyzerConfig, AnalyzerConfigBuilder};
pub use context::AnalysisContext;
pub use coverage::{SkinCoverage, validate_coverage};
pub use decode::{decode_file, decode_image};
pub use mask::{SkinMask, detect_skin};
pub use normalize::{NormalizedTensor, normalize};
pub use sensitivity::{ColorStats, color_stats, is_sensitive};
pub use text_info::TextInfoTable;
pub use upload::{analyze_upload, analyze_upload_in};
