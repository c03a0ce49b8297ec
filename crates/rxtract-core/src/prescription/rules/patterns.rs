//! Common regex patterns for prescription extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Medicine name: medication-type abbreviation + name token.
    // With (?i) the [A-Z0-9]+ class also accepts lowercase, so "tab.para500"
    // matches the same way "TAB.PARA500" does.
    pub static ref MEDICINE_NAME: Regex = Regex::new(
        r"(?i)\b(?:TAB|TABLET|CAP|CAPSULE|SYP|INJ)[.\s]*[A-Z0-9]+"
    ).unwrap();

    // Dosage schedule: "1 Morning", optionally extended as a comma-separated
    // list like "1 Morning, 1 Night". The whole span is one capture.
    pub static ref DOSAGE_SCHEDULE: Regex = Regex::new(
        r"(?i)\b\d+\s*(?:Morning|Night|Evening|Afternoon)(?:,\s*\d+\s*(?:Morning|Night|Evening|Afternoon))*"
    ).unwrap();

    // Duration: "5 Days", "1 Day".
    pub static ref DURATION: Regex = Regex::new(
        r"(?i)\b\d+\s*Days?\b"
    ).unwrap();

    // Numbered-list delimiter: "1)", "12)". Entry boundaries for the segmenter.
    pub static ref ENTRY_DELIMITER: Regex = Regex::new(
        r"\b\d+\)"
    ).unwrap();

    // Numeric-unit dosage: "500 mg", "10ml". Model-strategy fallback only.
    pub static ref UNIT_DOSAGE: Regex = Regex::new(
        r"(?i)\b\d+\s*(?:mg|g|ml|mcg|milligrams?)\b"
    ).unwrap();

    // Substrings to strip out of model-extracted names: dosage-unit spans
    // and bare digit runs.
    pub static ref NAME_NOISE: Regex = Regex::new(
        r"(?i)\b\d+\s*(?:mg|g|ml|mcg|milligrams?)\b|\b\d+\b"
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medicine_name_matches_abbreviations() {
        for text in ["TAB.PARA500", "CAPSULE AMOX", "SYP BENADRYL", "INJ.TT"] {
            assert!(MEDICINE_NAME.is_match(text), "no match in {text:?}");
        }
        assert!(!MEDICINE_NAME.is_match("PARACETAMOL 500"));
    }

    #[test]
    fn test_dosage_captures_full_list() {
        let m = DOSAGE_SCHEDULE
            .find("take 1 Morning, 1 Night with food")
            .unwrap();
        assert_eq!(m.as_str(), "1 Morning, 1 Night");
    }

    #[test]
    fn test_duration_optional_plural() {
        assert_eq!(DURATION.find("for 1 Day only").unwrap().as_str(), "1 Day");
        assert_eq!(DURATION.find("5 Days").unwrap().as_str(), "5 Days");
    }

    #[test]
    fn test_entry_delimiter_needs_word_boundary() {
        assert!(ENTRY_DELIMITER.is_match("1) TAB.A"));
        // Digits glued to a word are part of a name, not a list marker.
        assert!(!ENTRY_DELIMITER.is_match("PARA500)"));
    }
}
