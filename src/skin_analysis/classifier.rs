//! Binary skin classifiers
//!
//! Classifiers are black boxes: a normalized tensor goes in, a score in
//! `[0, 1]` comes out. The ONNX Runtime implementation is the production
//! backend; anything else implementing [`SkinClassifier`] can stand in.

mod scorer;
mod onnx_classifier;

pub use scorer::SkinClassifier;
pub use onnx_classifier::{OnnxClassifier, check_model_file};
