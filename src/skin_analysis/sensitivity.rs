//! Color based sensitivity heuristic
//!
//! Stands in for a trained sensitivity classifier: reddish, low saturation
//! skin or skin with a very low hue is flagged as sensitive.

use image::RgbImage;
use image::imageops::{self, FilterType};
use tracing::debug;

use crate::skin_analysis::color::rgb_to_hsv;
use crate::skin_analysis::mask::detect_skin;

/// Side length the image is resized to before sampling colors.
pub const ANALYSIS_SIZE: u32 = 224;

const RED_THRESHOLD: f64 = 150.0;
const SATURATION_THRESHOLD: f64 = 100.0;
const HUE_THRESHOLD: f64 = 10.0;

/// Mean channel values over skin pixels. All zero when there are none.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorStats {
    pub avg_hue: f64,
    pub avg_saturation: f64,
    pub avg_value: f64,
    pub avg_red: f64,
}

impl ColorStats {
    pub fn is_sensitive(&self) -> bool {
        (self.avg_red > RED_THRESHOLD && self.avg_saturation < SATURATION_THRESHOLD)
            || self.avg_hue < HUE_THRESHOLD
    }
}

/// Resizes `image` to the analysis size and averages colors over its skin mask.
pub fn color_stats(image: &RgbImage) -> ColorStats {
    let resized = imageops::resize(image, ANALYSIS_SIZE, ANALYSIS_SIZE, FilterType::Triangle);
    let mask = detect_skin(&resized);

    let mut count = 0u64;
    let mut sums = [0u64; 4];
    for (pixel, &skin) in resized.pixels().zip(mask.as_slice()) {
        if !skin {
            continue;
        }
        let hsv = rgb_to_hsv(pixel);
        sums[0] += u64::from(hsv.h);
        sums[1] += u64::from(hsv.s);
        sums[2] += u64::from(hsv.v);
        sums[3] += u64::from(pixel[0]);
        count += 1;
    }

    if count == 0 {
        return ColorStats::default();
    }

    let mean = |sum: u64| sum as f64 / count as f64;
    ColorStats {
        avg_hue: mean(sums[0]),
        avg_saturation: mean(sums[1]),
        avg_value: mean(sums[2]),
        avg_red: mean(sums[3]),
    }
}

/// Flags sensitive skin from color alone.
///
/// An image with no detected skin yields all-zero statistics, and a zero
/// hue satisfies the hue rule, so such an image is reported as sensitive.
pub fn is_sensitive(image: &RgbImage) -> bool {
    let stats = color_stats(image);
    let sensitive = stats.is_sensitive();
    debug!(
        "Skin color analysis: H={:.1}, S={:.1}, V={:.1}, R={:.1}, sensitive={}",
        stats.avg_hue, stats.avg_saturation, stats.avg_value, stats.avg_red, sensitive
    );
    sensitive
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_no_skin_is_sensitive() {
        let img = RgbImage::from_pixel(50, 80, Rgb([0, 0, 0]));
        assert_eq!(color_stats(&img), ColorStats::default());
        assert!(is_sensitive(&img));
    }

    #[test]
    fn test_low_hue_is_sensitive() {
        let img = RgbImage::from_pixel(300, 300, Rgb([220, 170, 150]));
        let stats = color_stats(&img);
        assert_eq!(stats.avg_hue, 9.0);
        assert!(is_sensitive(&img));
    }

    #[test]
    fn test_red_low_saturation_is_sensitive() {
        let img = RgbImage::from_pixel(224, 224, Rgb([230, 190, 170]));
        let stats = color_stats(&img);
        assert_eq!(stats.avg_hue, 10.0);
        assert_eq!(stats.avg_saturation, 67.0);
        assert_eq!(stats.avg_red, 230.0);
        assert!(is_sensitive(&img));
    }

    #[test]
    fn test_resistant_skin() {
        let img = RgbImage::from_pixel(128, 96, Rgb([200, 150, 120]));
        let stats = color_stats(&img);
        assert_eq!(stats.avg_hue, 11.0);
        assert_eq!(stats.avg_saturation, 102.0);
        assert_eq!(stats.avg_value, 200.0);
        assert_eq!(stats.avg_red, 200.0);
        assert!(!is_sensitive(&img));
    }

    #[test]
    fn test_background_is_excluded() {
        let img = RgbImage::from_fn(448, 224, |x, _| {
            if x < 224 {
                Rgb([200, 150, 120])
            } else {
                Rgb([0, 0, 0])
            }
        });
        let stats = color_stats(&img);
        assert!((stats.avg_hue - 11.0).abs() < 0.5);
        assert!(stats.avg_red > 190.0 && stats.avg_red <= 200.0);
    }

    #[test]
    fn test_rule_precedence() {
        let stats = ColorStats {
            avg_hue: 30.0,
            avg_saturation: 99.0,
            avg_value: 200.0,
            avg_red: 151.0,
        };
        assert!(stats.is_sensitive());
        assert!(!ColorStats { avg_red: 150.0, ..stats }.is_sensitive());
        assert!(!ColorStats { avg_saturation: 100.0, ..stats }.is_sensitive());
        assert!(ColorStats { avg_hue: 9.9, avg_red: 0.0, ..stats }.is_sensitive());
    }
}
