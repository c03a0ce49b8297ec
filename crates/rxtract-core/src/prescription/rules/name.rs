//! Medicine name extraction.
//!
//! A name is a medication-type abbreviation (TAB, TABLET, CAP, CAPSULE, SYP,
//! INJ) followed by a name token, e.g. `TAB.PARA500`. This is the only field
//! whose match is post-processed: literal `.` characters are removed, so
//! `TAB.PARA500` becomes `TABPARA500`.

use super::patterns::MEDICINE_NAME;
use super::{FieldExtractor, FieldMatch};

/// Medicine name field extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct NameExtractor;

impl NameExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for NameExtractor {
    type Output = FieldMatch;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let m = MEDICINE_NAME.find(text)?;
        let cleaned = m.as_str().trim().replace('.', "");
        Some(FieldMatch::new(cleaned, m.start(), m.end()))
    }
}

/// Extract the first medicine name from text, dots stripped.
pub fn extract_name(text: &str) -> Option<String> {
    NameExtractor::new().extract(text).map(|m| m.value)
}
