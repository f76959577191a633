//! Per-pixel color space conversions.
//!
//! Both conversions follow the 8-bit conventions skin thresholds are usually
//! quoted in: hue is stored as degrees / 2 so it fits `[0, 180)`, saturation
//! and value span `[0, 255]`, and the chroma channels are offset by 128.

use image::Rgb;

/// Luma / red-difference / blue-difference triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YCrCb {
    pub y: u8,
    pub cr: u8,
    pub cb: u8,
}

/// Hue / saturation / value triple, hue in `[0, 180)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

const CHROMA_OFFSET: f32 = 128.0;
const CR_SCALE: f32 = 0.713;
const CB_SCALE: f32 = 0.564;

fn saturate(value: f32) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

pub fn rgb_to_ycrcb(pixel: &Rgb<u8>) -> YCrCb {
    let [r, g, b] = pixel.0.map(f32::from);
    // Chroma is derived from the rounded luma, as in fixed-point converters.
    let y = saturate(0.299 * r + 0.587 * g + 0.114 * b);
    let luma = f32::from(y);

    YCrCb {
        y,
        cr: saturate((r - luma) * CR_SCALE + CHROMA_OFFSET),
        cb: saturate((b - luma) * CB_SCALE + CHROMA_OFFSET),
    }
}

pub fn rgb_to_hsv(pixel: &Rgb<u8>) -> Hsv {
    let [r, g, b] = pixel.0.map(f32::from);
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let diff = max - min;

    let s = if max > 0.0 { diff * 255.0 / max } else { 0.0 };

    let mut degrees = if diff == 0.0 {
        0.0
    } else if max == r {
        60.0 * (g - b) / diff
    } else if max == g {
        120.0 + 60.0 * (b - r) / diff
    } else {
        240.0 + 60.0 * (r - g) / diff
    };
    if degrees < 0.0 {
        degrees += 360.0;
    }

    let mut h = (degrees / 2.0).round();
    if h >= 180.0 {
        h -= 180.0;
    }

    Hsv {
        h: h as u8,
        s: saturate(s),
        v: max as u8,
    }
}
