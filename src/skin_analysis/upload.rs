//! Upload handling
//!
//! Uploaded bytes are staged in a temporary file, decoded from there and
//! classified. The staged file is removed on every exit path when the
//! `NamedTempFile` guard drops.

use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;
use tracing::{debug, instrument};

use crate::skin_analysis::common::error::{AnalysisError, Result};
use crate::skin_analysis::composer::{ClassificationResult, SkinTypeClassifier};

pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Returns the lowercase extension when `file_name` is a JPEG or PNG name.
pub fn check_extension(file_name: &str) -> Result<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .filter(|ext| ALLOWED_EXTENSIONS.contains(&ext.as_str()))
        .ok_or_else(|| AnalysisError::UnsupportedFormat(file_name.to_string()))
}

/// Writes `data` to a fresh temporary file in `dir`.
pub fn stage_upload(dir: &Path, file_name: &str, data: &[u8]) -> Result<NamedTempFile> {
    let extension = check_extension(file_name)?;
    if data.is_empty() {
        return Err(AnalysisError::EmptyUpload);
    }

    let mut staged = tempfile::Builder::new()
        .prefix("temp_image_")
        .suffix(&format!(".{extension}"))
        .tempfile_in(dir)?;
    staged.write_all(data)?;
    staged.flush()?;

    debug!(path = %staged.path().display(), bytes = data.len(), "Staged upload");
    Ok(staged)
}

pub fn analyze_upload(
    classifier: &SkinTypeClassifier,
    file_name: &str,
    data: &[u8],
) -> Result<ClassificationResult> {
    analyze_upload_in(classifier, &std::env::temp_dir(), file_name, data)
}

#[instrument(skip(classifier, dir, data), fields(size = data.len()))]
pub fn analyze_upload_in(
    classifier: &SkinTypeClassifier,
    dir: &Path,
    file_name: &str,
    data: &[u8],
) -> Result<ClassificationResult> {
    let staged = stage_upload(dir, file_name, data)?;
    classifier.classify_file(staged.path())
}
