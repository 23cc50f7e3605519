use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One selectable symptom with its scoring weight.
///
/// `critical` marks symptoms that escalate a Severe report to High
/// priority on their own, regardless of the numeric score.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymptomEntry {
    pub name: String,
    pub weight: u32,
    pub critical: bool,
}

/// Versioned symptom table. Loaded once at startup and shared read-only;
/// the version travels in API responses so clients can detect drift.
#[derive(Debug, Clone, Deserialize)]
pub struct SymptomCatalogue {
    version: u32,
    symptoms: Vec<SymptomEntry>,
}

#[derive(Error, Debug)]
pub enum CatalogueError {
    #[error("Cannot read catalogue file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid catalogue JSON: {0}")]
    Parse(String),

    #[error("Invalid catalogue entry: {0}")]
    Entry(String),
}

const BUNDLED_CATALOGUE: &str = include_str!("../../resources/symptoms.json");

impl SymptomCatalogue {
    /// The catalogue shipped with the binary (version 1).
    ///
    /// Panics if the embedded resource is malformed; that is a build
    /// defect, not a runtime condition.
    pub fn bundled() -> Self {
        Self::from_json(BUNDLED_CATALOGUE).expect("bundled symptom catalogue is invalid")
    }

    /// Load a deployment-specific catalogue from disk.
    pub fn load(path: &Path) -> Result<Self, CatalogueError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    fn from_json(json: &str) -> Result<Self, CatalogueError> {
        let catalogue: SymptomCatalogue =
            serde_json::from_str(json).map_err(|e| CatalogueError::Parse(e.to_string()))?;
        catalogue.validate()?;
        Ok(catalogue)
    }

    fn validate(&self) -> Result<(), CatalogueError> {
        if self.symptoms.is_empty() {
            return Err(CatalogueError::Entry("catalogue has no symptoms".into()));
        }
        for (i, entry) in self.symptoms.iter().enumerate() {
            if entry.name.trim().is_empty() {
                return Err(CatalogueError::Entry("symptom name is empty".into()));
            }
            if entry.weight == 0 {
                return Err(CatalogueError::Entry(format!(
                    "symptom '{}' has weight 0 (minimum is 1)",
                    entry.name
                )));
            }
            if self.symptoms[..i].iter().any(|other| other.name == entry.name) {
                return Err(CatalogueError::Entry(format!(
                    "duplicate symptom name '{}'",
                    entry.name
                )));
            }
        }
        Ok(())
    }

    /// Exact, case-sensitive lookup. Unknown names return None.
    pub fn lookup(&self, name: &str) -> Option<&SymptomEntry> {
        self.symptoms.iter().find(|s| s.name == name)
    }

    /// Entries in file order, as presented to patients.
    pub fn entries(&self) -> &[SymptomEntry] {
        &self.symptoms
    }

    pub fn version(&self) -> u32 {
        self.version
    }
}
