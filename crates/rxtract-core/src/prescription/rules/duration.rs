//! Treatment duration extraction: `5 Days`, `1 Day`.

use super::patterns::DURATION;
use super::{FieldExtractor, FieldMatch};

/// Duration field extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct DurationExtractor;

impl DurationExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl FieldExtractor for DurationExtractor {
    type Output = FieldMatch;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let m = DURATION.find(text)?;
        Some(FieldMatch::new(m.as_str().trim(), m.start(), m.end()))
    }
}

/// Extract the first duration from text.
pub fn extract_duration(text: &str) -> Option<String> {
    DurationExtractor::new().extract(text).map(|m| m.value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plural_and_singular() {
        assert_eq!(extract_duration("for 5 Days"), Some("5 Days".to_string()));
        assert_eq!(extract_duration("for 1 Day"), Some("1 Day".to_string()));
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(extract_duration("7 days"), Some("7 days".to_string()));
    }

    #[test]
    fn test_word_boundary_after_days() {
        // "Daysh" is not a duration token.
        assert_eq!(extract_duration("5 Daysh"), None);
    }

    #[test]
    fn test_leftmost_match_only() {
        assert_eq!(
            extract_duration("3 Days then 5 Days"),
            Some("3 Days".to_string())
        );
    }
}
