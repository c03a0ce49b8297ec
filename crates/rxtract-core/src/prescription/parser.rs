//! Prescription parsing pipeline: normalize, segment, extract, assemble.

use tracing::{debug, info};

use crate::models::config::RxtractConfig;
use crate::models::record::{ExtractionResult, MedicineRecord};

use super::normalizer::Normalizer;
use super::rules::{FieldSet, FieldSource, RuleFields};
use super::segmenter::segment;

/// Trait for prescription parsers.
pub trait PrescriptionParser {
    /// Parse prescription text into an ordered extraction result.
    ///
    /// Never fails: malformed or empty text yields an empty record list.
    fn parse(&self, text: &str) -> ExtractionResult;
}

/// The rule-based extraction pipeline.
///
/// Four linear stages: OCR-artifact normalization, entry segmentation,
/// per-entry field extraction, and assembly. Generic over the field source,
/// so a model-backed extractor can stand in for the regex rules behind the
/// same contract.
///
/// The pipeline is pure over its input: no I/O, no shared mutable state, and
/// each invocation is independent.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedParser<S: FieldSource = RuleFields> {
    normalizer: Normalizer,
    fields: S,
}

impl RuleBasedParser<RuleFields> {
    /// Create a parser with the default normalization rules and the
    /// rule-based field source.
    pub fn new() -> Self {
        Self {
            normalizer: Normalizer::new(),
            fields: RuleFields,
        }
    }

    /// Create a parser honoring config-supplied extra normalizer rules.
    pub fn from_config(config: &RxtractConfig) -> Self {
        Self::new().with_normalizer(
            Normalizer::new().with_extra_literals(&config.normalizer.extra_rules),
        )
    }
}

impl<S: FieldSource> RuleBasedParser<S> {
    /// Replace the normalizer.
    pub fn with_normalizer(mut self, normalizer: Normalizer) -> Self {
        self.normalizer = normalizer;
        self
    }

    /// Use a different field-extraction strategy (e.g. the model-backed one).
    pub fn with_field_source<T: FieldSource>(self, fields: T) -> RuleBasedParser<T> {
        RuleBasedParser {
            normalizer: self.normalizer,
            fields,
        }
    }

    /// Turn one entry's fields into a record, or `None` when the entry has
    /// no medicine name. A missing name is a structural "no medicine present"
    /// signal, not an error.
    fn assemble_entry(&self, entry: &str) -> Option<MedicineRecord> {
        let FieldSet {
            name,
            dosage,
            duration,
        } = self.fields.fields(entry);

        let name = name.filter(|n| !n.is_empty())?;
        Some(MedicineRecord {
            name,
            dosage: dosage.unwrap_or_default(),
            duration: duration.unwrap_or_default(),
        })
    }
}

impl<S: FieldSource> PrescriptionParser for RuleBasedParser<S> {
    fn parse(&self, text: &str) -> ExtractionResult {
        let normalized = self.normalizer.normalize(text);
        let entries = segment(&normalized);
        debug!("segmented into {} entries", entries.len());

        let medicines: Vec<MedicineRecord> = entries
            .iter()
            .filter_map(|entry| self.assemble_entry(entry))
            .collect();

        info!(
            "extracted {} medicine(s) from {} entries",
            medicines.len(),
            entries.len()
        );

        ExtractionResult {
            input_text: text.to_string(),
            medicines,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(text: &str) -> ExtractionResult {
        RuleBasedParser::new().parse(text)
    }

    #[test]
    fn test_full_entry() {
        let result = parse("1) TAB.PARA500 1 Morning, 1 Night 5 Days");

        assert_eq!(
            result.medicines,
            vec![MedicineRecord {
                name: "TABPARA500".to_string(),
                dosage: "1 Morning, 1 Night".to_string(),
                duration: "5 Days".to_string(),
            }]
        );
    }

    #[test]
    fn test_multiple_entries_preserve_order() {
        let result = parse("1) TAB.A 2 Days 2) CAP.B 3 Days");

        let names: Vec<&str> = result.medicines.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["TABA", "CAPB"]);
        assert_eq!(result.medicines[0].duration, "2 Days");
        assert_eq!(result.medicines[1].duration, "3 Days");
    }

    #[test]
    fn test_entry_without_name_dropped() {
        let result = parse("1) TAB.A 2 Days 2) gargle with salt water 3 Days");

        assert_eq!(result.medicines.len(), 1);
        assert_eq!(result.medicines[0].name, "TABA");
    }

    #[test]
    fn test_missing_fields_are_empty_strings() {
        let result = parse("1) SYP.COREX");

        assert_eq!(result.medicines[0].dosage, "");
        assert_eq!(result.medicines[0].duration, "");
    }

    #[test]
    fn test_empty_input_empty_records() {
        let result = parse("");
        assert!(result.is_empty());
        assert_eq!(result.input_text, "");
    }

    #[test]
    fn test_unnumbered_text_is_one_entry() {
        let result = parse("TAB.DOLO650 1 Night 3 Days");
        assert_eq!(result.medicines.len(), 1);
        assert_eq!(result.medicines[0].name, "TABDOLO650");
    }

    #[test]
    fn test_normalization_feeds_extraction() {
        // "IN)" misread becomes INJ and then matches the name pattern;
        // "1NigBtDays" expands into a dosage and a duration.
        let result = parse("1) IN) TT 1NigBtDays");

        assert_eq!(result.medicines.len(), 1);
        assert_eq!(result.medicines[0].name, "INJ TT");
        assert_eq!(result.medicines[0].dosage, "1 Night");
        assert_eq!(result.medicines[0].duration, "7 Days");
    }

    #[test]
    fn test_input_text_is_pre_normalization() {
        let result = parse("IN) TT");
        assert_eq!(result.input_text, "IN) TT");
    }

    #[test]
    fn test_records_never_exceed_entries() {
        let text = "1) no medicine here 2) TAB.A 3) rest well";
        let result = parse(text);
        assert!(result.medicines.len() <= 3);
        assert_eq!(result.medicines.len(), 1);
    }
}
