use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Could not decode image: {0}")]
    Decode(String),

    #[error(
        "Insufficient skin area ({percentage:.2}%). Please upload a photo showing enough skin area with good lighting and clear focus."
    )]
    InsufficientSkinArea { percentage: f64 },

    #[error("Invalid skin type classification: {0}")]
    UnrecognizedClassification(String),

    #[error("Model unavailable at {}: {reason}", path.display())]
    ModelUnavailable { path: PathBuf, reason: String },

    #[error("Classifier inference failed: {0}")]
    Inference(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(u32, u32),

    #[error("Unsupported upload format: {0}. Only JPG or PNG files are allowed")]
    UnsupportedFormat(String),

    #[error("Empty file uploaded")]
    EmptyUpload,

    #[error("Failed to load text info: {0}")]
    TextInfo(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnalysisError>;
