//! Dosage schedule extraction.
//!
//! A dosage is one or more `count + time-of-day` groups, comma-separated:
//! `1 Morning`, `1 Morning, 1 Night`. The whole list is captured as a single
//! string, exactly as it appears in the entry.

use super::patterns::DOSAGE_SCHEDULE;
use super::{FieldExtractor, FieldMatch};

/// Dosage schedule field extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DosageExtractor;

impl DosageExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for DosageExtractor {
    type Output = FieldMatch;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let m = DOSAGE_SCHEDULE.find(text)?;
        Some(FieldMatch::new(m.as_str().trim(), m.start(), m.end()))
    }
}

/// Extract the first dosage schedule from text.
pub fn extract_dosage(text: &str) -> Option<String> {
    DosageExtractor::new().extract(text).map(|m| m.value)
}
