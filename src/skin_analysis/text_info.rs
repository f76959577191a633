//! Skin type descriptions keyed by code.

use std::collections::HashMap;
use std::path::Path;

use tracing::{info, warn};

use crate::skin_analysis::code::SkinTypeCode;
use crate::skin_analysis::common::error::{AnalysisError, Result};

#[derive(Debug, Clone, Default)]
pub struct TextInfoTable {
    entries: HashMap<String, String>,
}

impl TextInfoTable {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }

    /// Parses a JSON object mapping codes to descriptions.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let entries: HashMap<String, String> =
            serde_json::from_str(json).map_err(|e| AnalysisError::TextInfo(e.to_string()))?;
        Ok(Self::new(entries))
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| AnalysisError::TextInfo(format!("{}: {}", path.display(), e)))?;
        let entries: HashMap<String, String> = serde_json::from_str(&json)
            .map_err(|e| AnalysisError::TextInfo(format!("{}: {}", path.display(), e)))?;
        let table = Self::new(entries);

        let missing = table.missing_codes();
        if missing.is_empty() {
            info!(entries = table.len(), "Loaded text info from {}", path.display());
        } else {
            warn!(
                "Text info at {} has no entry for {}",
                path.display(),
                missing.join(", ")
            );
        }
        Ok(table)
    }

    /// Description for `code`. A missing entry means the table is incomplete.
    pub fn lookup(&self, code: &SkinTypeCode) -> Result<&str> {
        let key = code.to_string();
        self.entries
            .get(&key)
            .map(String::as_str)
            .ok_or(AnalysisError::UnrecognizedClassification(key))
    }

    /// Taxonomy codes that have no description.
    pub fn missing_codes(&self) -> Vec<String> {
        SkinTypeCode::taxonomy()
            .into_iter()
            .filter(|code| !self.entries.contains_key(code))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
