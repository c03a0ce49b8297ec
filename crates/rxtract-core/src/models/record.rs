//! Medicine record data models.

use serde::{Deserialize, Serialize};

/// A single extracted medicine entry.
///
/// `name` is never empty in pipeline output: entries without a recognizable
/// medicine name are dropped before a record is created. `dosage` and
/// `duration` are empty strings when the entry carried no matchable value,
/// never omitted, so the schema shape is stable for downstream consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MedicineRecord {
    /// Medicine name, medication-type abbreviation included (e.g. "TABPARA500").
    pub name: String,

    /// Dosage schedule (e.g. "1 Morning, 1 Night"), or empty if none found.
    #[serde(default)]
    pub dosage: String,

    /// Treatment duration (e.g. "5 Days"), or empty if none found.
    #[serde(default)]
    pub duration: String,
}

impl MedicineRecord {
    /// Create a record with empty dosage and duration.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dosage: String::new(),
            duration: String::new(),
        }
    }
}

/// Result of a prescription extraction run.
///
/// Carries the text as it was given to the pipeline, for traceability, and
/// the extracted records in original textual order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// The input text the pipeline received (before OCR-artifact rewrites).
    pub input_text: String,

    /// Extracted medicine records, in the order their entries appeared.
    pub medicines: Vec<MedicineRecord>,
}

impl ExtractionResult {
    /// True when no medicine could be extracted. A valid outcome, not an error.
    pub fn is_empty(&self) -> bool {
        self.medicines.is_empty()
    }
}
