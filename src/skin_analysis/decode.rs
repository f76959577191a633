//! Image decoding into the RGB raster the pipeline works on.

use std::path::Path;

use image::RgbImage;
use tracing::debug;

use crate::skin_analysis::common::error::{AnalysisError, Result};

/// Decodes JPEG or PNG bytes into an 8-bit RGB image.
///
/// Alpha and grayscale inputs are expanded to RGB. Anything the `image`
/// crate cannot interpret is reported as [`AnalysisError::Decode`].
pub fn decode_image(data: &[u8]) -> Result<RgbImage> {
    debug!("Decoding image, {} bytes", data.len());

    let decoded =
        image::load_from_memory(data).map_err(|e| AnalysisError::Decode(e.to_string()))?;
    let rgb = decoded.to_rgb8();

    debug!("Decoded image: {}x{}", rgb.width(), rgb.height());
    Ok(rgb)
}

pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<RgbImage> {
    let path = path.as_ref();
    let data = std::fs::read(path)?;
    decode_image(&data).map_err(|e| match e {
        AnalysisError::Decode(msg) => {
            AnalysisError::Decode(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}
