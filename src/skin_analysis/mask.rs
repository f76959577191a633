//! Heuristic skin detection
//!
//! A pixel counts as skin when it falls inside the YCrCb skin range or the
//! HSV skin range. The union is then cleaned with a morphological open so
//! single stray pixels do not register as skin.

mod morphology;
pub mod types;

pub use morphology::{dilate, erode, open};
pub use types::SkinMask;

use image::{Rgb, RgbImage};
use tracing::trace;

use crate::skin_analysis::color::{Hsv, YCrCb, rgb_to_hsv, rgb_to_ycrcb};

/// Inclusive lower/upper bounds for a three channel color.
#[derive(Debug, Clone, Copy)]
pub struct ChannelRange {
    pub lower: [u8; 3],
    pub upper: [u8; 3],
}

impl ChannelRange {
    pub fn contains(&self, channels: [u8; 3]) -> bool {
        channels
            .iter()
            .zip(self.lower.iter().zip(self.upper.iter()))
            .all(|(c, (lo, hi))| (lo..=hi).contains(&c))
    }
}

/// Y, Cr, Cb bounds. Luma is unconstrained.
pub const YCRCB_SKIN: ChannelRange = ChannelRange {
    lower: [0, 130, 80],
    upper: [255, 185, 140],
};

/// H, S, V bounds, hue in half-degrees.
pub const HSV_SKIN: ChannelRange = ChannelRange {
    lower: [0, 20, 70],
    upper: [50, 255, 255],
};

pub fn ycrcb_is_skin(c: YCrCb) -> bool {
    YCRCB_SKIN.contains([c.y, c.cr, c.cb])
}

pub fn hsv_is_skin(c: Hsv) -> bool {
    HSV_SKIN.contains([c.h, c.s, c.v])
}

pub fn pixel_is_skin(pixel: &Rgb<u8>) -> bool {
    ycrcb_is_skin(rgb_to_ycrcb(pixel)) || hsv_is_skin(rgb_to_hsv(pixel))
}

/// Raw threshold mask, before morphological cleanup.
pub fn threshold_skin(image: &RgbImage) -> SkinMask {
    SkinMask::from_fn(image.width(), image.height(), |x, y| {
        pixel_is_skin(image.get_pixel(x, y))
    })
}

/// Computes the cleaned skin mask for `image`.
pub fn detect_skin(image: &RgbImage) -> SkinMask {
    let raw = threshold_skin(image);
    let mask = open(&raw);
    trace!(
        raw = raw.count_skin(),
        opened = mask.count_skin(),
        "Skin mask computed"
    );
    mask
}
