//! Classifier input preparation
//!
//! Every classifier expects a `1 x 224 x 224 x 3` tensor with values in
//! `[-1, 1]`. The rescale to `[0, 1]` only happens when the resized values
//! are still in byte range, so inputs that arrive pre-scaled are not divided
//! twice.

use image::RgbImage;
use image::imageops::{self, FilterType};
use ndarray::{Array3, Array4, Axis};
use tracing::trace;

use crate::skin_analysis::common::error::{AnalysisError, Result};

pub const INPUT_SIZE: u32 = 224;
pub const INPUT_CHANNELS: usize = 3;
pub const INPUT_SHAPE: [usize; 4] = [1, INPUT_SIZE as usize, INPUT_SIZE as usize, INPUT_CHANNELS];

/// Batched NHWC tensor handed to the classifiers.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedTensor(Array4<f32>);

impl NormalizedTensor {
    pub fn as_array(&self) -> &Array4<f32> {
        &self.0
    }

    pub fn into_array(self) -> Array4<f32> {
        self.0
    }

    pub fn shape(&self) -> &[usize] {
        self.0.shape()
    }
}

/// Divides by 255 when any value is above 1.
pub fn scale_to_unit_range(values: &mut Array3<f32>) {
    let max = values.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    if max > 1.0 {
        values.mapv_inplace(|v| v / 255.0);
    }
}

/// Maps `[0, 1]` onto `[-1, 1]` and adds the batch axis.
pub fn to_model_range(mut values: Array3<f32>) -> NormalizedTensor {
    scale_to_unit_range(&mut values);
    values.mapv_inplace(|v| v * 2.0 - 1.0);
    NormalizedTensor(values.insert_axis(Axis(0)))
}

pub fn normalize(image: &RgbImage) -> Result<NormalizedTensor> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(AnalysisError::InvalidDimensions(width, height));
    }

    let resized = imageops::resize(image, INPUT_SIZE, INPUT_SIZE, FilterType::Triangle);
    let (out_width, out_height) = resized.dimensions();
    let values = Array3::from_shape_vec(
        (out_height as usize, out_width as usize, INPUT_CHANNELS),
        resized.into_raw().into_iter().map(f32::from).collect(),
    )
    .map_err(|_| AnalysisError::InvalidDimensions(out_width, out_height))?;

    let tensor = to_model_range(values);
    trace!(shape = ?tensor.shape(), "Normalized classifier input");
    Ok(tensor)
}
