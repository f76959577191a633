//! Binary morphology with the 5x5 elliptical structuring element.
//!
//! Kernel cells that fall outside the image are skipped, so borders are
//! neither eroded nor grown by the padding.

use crate::skin_analysis::mask::types::SkinMask;

const KERNEL_RADIUS: i64 = 2;

#[rustfmt::skip]
static ELLIPSE_5X5: [[bool; 5]; 5] = [
    [false, false, true, false, false],
    [true,  true,  true, true,  true ],
    [true,  true,  true, true,  true ],
    [true,  true,  true, true,  true ],
    [false, false, true, false, false],
];

fn neighbours(mask: &SkinMask, x: u32, y: u32) -> impl Iterator<Item = bool> + '_ {
    let (w, h) = (i64::from(mask.width()), i64::from(mask.height()));
    let (x, y) = (i64::from(x), i64::from(y));

    ELLIPSE_5X5.iter().enumerate().flat_map(move |(ky, row)| {
        row.iter().enumerate().filter_map(move |(kx, &on)| {
            let nx = x + kx as i64 - KERNEL_RADIUS;
            let ny = y + ky as i64 - KERNEL_RADIUS;
            (on && (0..w).contains(&nx) && (0..h).contains(&ny))
                .then(|| mask.get(nx as u32, ny as u32))
        })
    })
}

pub fn erode(mask: &SkinMask) -> SkinMask {
    SkinMask::from_fn(mask.width(), mask.height(), |x, y| {
        neighbours(mask, x, y).all(|skin| skin)
    })
}

pub fn dilate(mask: &SkinMask) -> SkinMask {
    SkinMask::from_fn(mask.width(), mask.height(), |x, y| {
        neighbours(mask, x, y).any(|skin| skin)
    })
}

/// Erosion followed by dilation, one iteration each.
pub fn open(mask: &SkinMask) -> SkinMask {
    dilate(&erode(mask))
}
