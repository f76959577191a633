//! Common utilities module
//!
//! This module contains shared utilities used across the skin analysis pipeline.

pub mod error;

pub use error::{AnalysisError, Result};
