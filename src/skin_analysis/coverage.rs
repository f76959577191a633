//! Skin coverage gate.

use image::RgbImage;
use tracing::{debug, warn};

use crate::skin_analysis::common::error::{AnalysisError, Result};
use crate::skin_analysis::mask::{SkinMask, detect_skin};

/// Images at or below this share of skin pixels are rejected.
pub const MIN_SKIN_PERCENTAGE: f64 = 5.0;

/// Skin coverage measured by a successful validation pass.
///
/// The only way to obtain one outside this crate is [`validate_coverage`],
/// so a result that reports a `SkinCoverage` reports the validated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkinCoverage {
    percentage: f64,
}

impl SkinCoverage {
    pub(crate) fn new(percentage: f64) -> Self {
        Self { percentage }
    }

    /// Share of skin pixels, 0 to 100.
    pub fn percentage(&self) -> f64 {
        self.percentage
    }

    /// Percentage rounded to two decimals, as reported to callers.
    pub fn rounded(&self) -> f64 {
        (self.percentage * 100.0).round() / 100.0
    }
}

pub fn skin_percentage(mask: &SkinMask) -> f64 {
    let total = mask.pixel_count();
    if total == 0 {
        return 0.0;
    }
    mask.count_skin() as f64 * 100.0 / total as f64
}

/// Checks that `image` shows enough skin to be analysed.
pub fn validate_coverage(image: &RgbImage) -> Result<SkinCoverage> {
    let mask = detect_skin(image);
    let percentage = skin_percentage(&mask);
    debug!(percentage, "Skin coverage measured");

    if percentage <= MIN_SKIN_PERCENTAGE {
        warn!(percentage, "Rejecting image with insufficient skin area");
        return Err(AnalysisError::InsufficientSkinArea { percentage });
    }

    Ok(SkinCoverage::new(percentage))
}
